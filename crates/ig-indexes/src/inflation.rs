//! Standard price indexes and the price index master.

use crate::price_index::IndexPrice;
use ig_core::errors::Result;
use ig_core::Registry;
use ig_currencies::currencies::{EUR, GBP, USD};

/// US CPI-U, non seasonally adjusted.
pub fn us_cpi() -> Result<IndexPrice> {
    IndexPrice::new("US CPI-U", USD)
}

/// Eurozone HICP excluding tobacco.
pub fn eu_hicp() -> Result<IndexPrice> {
    IndexPrice::new("EUR HICP-XT", EUR)
}

/// UK RPI.
pub fn uk_rpi() -> Result<IndexPrice> {
    IndexPrice::new("UK RPI", GBP)
}

/// The standard price indexes keyed by name.
pub fn price_index_master() -> Result<Registry<IndexPrice>> {
    Registry::try_from_entries(
        "price index",
        [us_cpi(), eu_hicp(), uk_rpi()]
            .into_iter()
            .map(|idx| idx.map(|idx| (idx.name().to_string(), idx))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_lookup() {
        let master = price_index_master().unwrap();
        assert_eq!(master.get("UK RPI").unwrap().currency(), GBP);
        assert!(master.get("JP CPI").unwrap_err().is_lookup_error());
        assert!(IndexPrice::new("", USD).is_err());
    }
}
