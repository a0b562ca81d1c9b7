//! Standard Ibor index conventions and the Ibor index master.
//!
//! Names follow the market shorthand `<family><tenor>`, e.g. `USDLIBOR3M`,
//! `EURIBOR6M`.

use crate::ibor_index::IborIndex;
use ig_core::errors::Result;
use ig_core::Registry;
use ig_currencies::currencies::{CAD, EUR, GBP, JPY, USD};
use ig_currencies::Currency;
use ig_time::{Actual360, Actual365Fixed, BusinessDayConvention, DayCounter, Period};
use std::sync::Arc;

/// Tenors registered in [`ibor_master`] for every family.
pub const STANDARD_TENORS: [Period; 4] = [
    Period::months(1),
    Period::months(3),
    Period::months(6),
    Period::months(12),
];

fn family(
    prefix: &str,
    currency: Currency,
    tenor: Period,
    spot_lag: u32,
    day_counter: Arc<dyn DayCounter>,
) -> Result<IborIndex> {
    IborIndex::new(
        format!("{prefix}{tenor}"),
        currency,
        tenor,
        spot_lag,
        day_counter,
        BusinessDayConvention::ModifiedFollowing,
        true,
    )
}

/// USD LIBOR: ACT/360, spot lag 2, modified following, end of month.
pub fn usd_libor(tenor: Period) -> Result<IborIndex> {
    family("USDLIBOR", USD, tenor, 2, Arc::new(Actual360))
}

/// Euribor: ACT/360, spot lag 2, modified following, end of month.
pub fn euribor(tenor: Period) -> Result<IborIndex> {
    family("EURIBOR", EUR, tenor, 2, Arc::new(Actual360))
}

/// GBP LIBOR: ACT/365F, same-day spot.
pub fn gbp_libor(tenor: Period) -> Result<IborIndex> {
    family("GBPLIBOR", GBP, tenor, 0, Arc::new(Actual365Fixed))
}

/// JPY LIBOR: ACT/360, spot lag 2.
pub fn jpy_libor(tenor: Period) -> Result<IborIndex> {
    family("JPYLIBOR", JPY, tenor, 2, Arc::new(Actual360))
}

/// CDOR: ACT/365F, same-day spot.
pub fn cdor(tenor: Period) -> Result<IborIndex> {
    family("CADCDOR", CAD, tenor, 0, Arc::new(Actual365Fixed))
}

/// Every standard family in [`STANDARD_TENORS`], keyed by index name.
pub fn ibor_master() -> Result<Registry<IborIndex>> {
    let factories: [fn(Period) -> Result<IborIndex>; 5] =
        [usd_libor, euribor, gbp_libor, jpy_libor, cdor];
    Registry::try_from_entries(
        "ibor index",
        factories
            .iter()
            .flat_map(|f| STANDARD_TENORS.iter().map(move |&t| f(t)))
            .map(|idx| idx.map(|idx| (idx.name().to_string(), idx))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_time::TenorConvention;

    #[test]
    fn factory_names() {
        assert_eq!(usd_libor(Period::months(3)).unwrap().name(), "USDLIBOR3M");
        assert_eq!(euribor(Period::months(6)).unwrap().name(), "EURIBOR6M");
        assert!(euribor(Period::months(0)).is_err());
    }

    #[test]
    fn master_lookup() {
        let master = ibor_master().unwrap();
        assert_eq!(master.len(), 20);
        let idx = master.get("GBPLIBOR6M").unwrap();
        assert_eq!(idx.tenor(), Period::months(6));
        assert_eq!(idx.spot_lag(), 0);
        assert_eq!(*idx, gbp_libor(Period::months(6)).unwrap());
        assert!(master.get("CHFLIBOR3M").unwrap_err().is_lookup_error());
    }
}
