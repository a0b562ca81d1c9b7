//! Generator masters: frozen registries of standard market conventions.
//!
//! Templates are built on a weekends-only calendar.  Callers look them up
//! through [`GeneratorMaster::get_generator`], which substitutes the calendar
//! they actually trade on.

use std::sync::Arc;

use ig_core::errors::Result;
use ig_core::{Natural, Registry};
use ig_currencies::currencies::{EUR, GBP, JPY, USD};
use ig_currencies::Currency;
use ig_indexes::ibor::{euribor, gbp_libor, jpy_libor, usd_libor, STANDARD_TENORS};
use ig_indexes::overnight::{eonia, estr, fed_fund, sofr, sonia};
use ig_indexes::{IborIndex, IndexOn};
use ig_time::{
    Actual360, Actual365Fixed, BusinessDayConvention, Calendar, DayCounter, Period,
    TenorConvention, Thirty360, WeekendsOnly,
};
use tracing::debug;

use crate::generator::{Generator, GeneratorInstrument, WithCalendar};
use crate::instrument::{
    GeneratorDeposit, GeneratorDepositOn, GeneratorForexSwap, GeneratorSwapFixedIbor,
    GeneratorSwapFixedOn, GeneratorSwapIborIbor,
};
use crate::leg::{GeneratorLegFixed, GeneratorLegIbor, GeneratorLegOnCompounded, LegConventions};

const MF: BusinessDayConvention = BusinessDayConvention::ModifiedFollowing;

type DayCount = fn() -> Arc<dyn DayCounter>;

fn template_calendar() -> Arc<dyn Calendar> {
    Arc::new(WeekendsOnly)
}

fn act360() -> Arc<dyn DayCounter> {
    Arc::new(Actual360)
}

fn act365() -> Arc<dyn DayCounter> {
    Arc::new(Actual365Fixed)
}

fn thirty360() -> Arc<dyn DayCounter> {
    Arc::new(Thirty360)
}

fn conventions(currency: Currency, spot_offset: Natural) -> LegConventions {
    LegConventions::new(currency, template_calendar(), spot_offset, MF, true)
}

/// Key generators by name.  A template that fails to build, or a name
/// registered twice, fails the whole master.
fn keyed<G: GeneratorInstrument>(kind: &'static str, templates: Vec<Result<G>>) -> Result<Registry<G>> {
    let count = templates.len();
    let registry = Registry::try_from_entries(
        kind,
        templates
            .into_iter()
            .map(|g| g.map(|g| (g.name().to_string(), g))),
    )?;
    debug!(kind, count, "built generator master");
    Ok(registry)
}

// ── Templates ─────────────────────────────────────────────────────────────────

fn deposit_templates() -> Vec<Result<GeneratorDeposit>> {
    let specs: [(&str, Currency, Natural, DayCount); 4] = [
        ("USD Deposit", USD, 2, act360),
        ("EUR Deposit", EUR, 2, act360),
        ("GBP Deposit", GBP, 0, act365),
        ("JPY Deposit", JPY, 2, act365),
    ];
    specs
        .into_iter()
        .map(|(name, ccy, lag, dc)| {
            GeneratorDeposit::new(name, ccy, template_calendar(), lag, dc(), MF, true)
        })
        .collect()
}

fn deposit_on_templates() -> Vec<Result<GeneratorDepositOn>> {
    let specs: [(&str, Currency, DayCount); 3] = [
        ("USD Deposit ON", USD, act360),
        ("EUR Deposit ON", EUR, act360),
        ("GBP Deposit ON", GBP, act365),
    ];
    specs
        .into_iter()
        .map(|(name, ccy, dc)| GeneratorDepositOn::new(name, ccy, template_calendar(), dc()))
        .collect()
}

fn forex_swap_templates() -> Vec<Result<GeneratorForexSwap>> {
    [("EURUSD", EUR, USD), ("GBPUSD", GBP, USD), ("USDJPY", USD, JPY)]
        .into_iter()
        .map(|(name, c1, c2)| {
            GeneratorForexSwap::new(name, c1, c2, template_calendar(), 2, MF, true)
        })
        .collect()
}

fn ibor_leg(index: IborIndex) -> Result<GeneratorLegIbor> {
    let tenor = index.tenor();
    let day_counter = index.day_counter().clone();
    let conv = conventions(index.currency(), index.spot_lag());
    GeneratorLegIbor::new(index.name().to_string(), conv, index, tenor, day_counter)
}

fn swap_fixed_ibor(
    name: &str,
    fixed_period: Period,
    fixed_dc: DayCount,
    index: Result<IborIndex>,
) -> Result<GeneratorSwapFixedIbor> {
    let index = index?;
    let conv = conventions(index.currency(), index.spot_lag());
    let fixed = GeneratorLegFixed::new(format!("{name} FIXED"), conv, fixed_period, fixed_dc())?;
    GeneratorSwapFixedIbor::new(name, fixed, ibor_leg(index)?)
}

fn swap_fixed_ibor_templates() -> Vec<Result<GeneratorSwapFixedIbor>> {
    let m = Period::months;
    vec![
        swap_fixed_ibor("USD6MLIBOR3M", m(6), thirty360, usd_libor(m(3))),
        swap_fixed_ibor("USD1YLIBOR3M", Period::years(1), act360, usd_libor(m(3))),
        swap_fixed_ibor("EUR1YEURIBOR6M", Period::years(1), thirty360, euribor(m(6))),
        swap_fixed_ibor("EUR1YEURIBOR3M", Period::years(1), thirty360, euribor(m(3))),
        swap_fixed_ibor("GBP6MLIBOR6M", m(6), act365, gbp_libor(m(6))),
        swap_fixed_ibor("JPY6MLIBOR6M", m(6), act365, jpy_libor(m(6))),
    ]
}

fn swap_fixed_on(name: &str, index: Result<IndexOn>, spot_offset: Natural) -> Result<GeneratorSwapFixedOn> {
    let index = index?;
    let dc = index.day_counter().clone();
    let conv = conventions(index.currency(), spot_offset)
        .with_payment_offset(index.publication_lag() + 1);
    let fixed = GeneratorLegFixed::new(format!("{name} FIXED"), conv.clone(), Period::years(1), dc.clone())?;
    let on = GeneratorLegOnCompounded::new(index.name().to_string(), conv, index, Period::years(1), dc)?;
    GeneratorSwapFixedOn::new(name, fixed, on)
}

fn swap_fixed_on_templates() -> Vec<Result<GeneratorSwapFixedOn>> {
    vec![
        swap_fixed_on("USD1YFEDFUND", fed_fund(), 2),
        swap_fixed_on("USD1YSOFR", sofr(), 2),
        swap_fixed_on("EUR1YEONIA", eonia(), 2),
        swap_fixed_on("EUR1YESTR", estr(), 2),
        swap_fixed_on("GBP1YSONIA", sonia(), 0),
    ]
}

fn swap_ibor_ibor(
    name: &str,
    first: Result<IborIndex>,
    second: Result<IborIndex>,
) -> Result<GeneratorSwapIborIbor> {
    GeneratorSwapIborIbor::new(name, ibor_leg(first?)?, ibor_leg(second?)?)
}

fn swap_ibor_ibor_templates() -> Vec<Result<GeneratorSwapIborIbor>> {
    let m = Period::months;
    vec![
        swap_ibor_ibor("USDLIBOR3MLIBOR6M", usd_libor(m(3)), usd_libor(m(6))),
        swap_ibor_ibor("EUREURIBOR3MEURIBOR6M", euribor(m(3)), euribor(m(6))),
    ]
}

fn leg_templates() -> Vec<Result<GeneratorLegIbor>> {
    let factories: [fn(Period) -> Result<IborIndex>; 4] = [usd_libor, euribor, gbp_libor, jpy_libor];
    factories
        .iter()
        .flat_map(|f| STANDARD_TENORS.iter().map(move |&t| f(t).and_then(ibor_leg)))
        .collect()
}

// ── Typed masters ─────────────────────────────────────────────────────────────

/// Term deposit conventions by currency (`"USD Deposit"`, ...).
pub fn deposit_master() -> Result<Registry<GeneratorDeposit>> {
    keyed("deposit generator", deposit_templates())
}

/// Overnight deposit conventions by currency (`"USD Deposit ON"`, ...).
pub fn deposit_on_master() -> Result<Registry<GeneratorDepositOn>> {
    keyed("overnight deposit generator", deposit_on_templates())
}

/// FX swap conventions by pair (`"EURUSD"`, ...).
pub fn forex_swap_master() -> Result<Registry<GeneratorForexSwap>> {
    keyed("FX swap generator", forex_swap_templates())
}

/// Vanilla swap conventions named `<ccy><fixed period><index>`.
pub fn swap_fixed_ibor_master() -> Result<Registry<GeneratorSwapFixedIbor>> {
    keyed("swap generator", swap_fixed_ibor_templates())
}

/// Overnight indexed swap conventions, annual on both legs.
pub fn swap_fixed_on_master() -> Result<Registry<GeneratorSwapFixedOn>> {
    keyed("swap generator", swap_fixed_on_templates())
}

/// Single-currency basis swap conventions.
pub fn swap_ibor_ibor_master() -> Result<Registry<GeneratorSwapIborIbor>> {
    keyed("swap generator", swap_ibor_ibor_templates())
}

/// Standalone Ibor legs, one per standard index, named after the index.
pub fn leg_master() -> Result<Registry<GeneratorLegIbor>> {
    keyed("leg generator", leg_templates())
}

// ── Combined master ───────────────────────────────────────────────────────────

/// Every standard template behind one name lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorMaster {
    generators: Registry<Generator>,
}

impl GeneratorMaster {
    /// Build the master from every typed template list.
    ///
    /// # Errors
    /// A template that fails to build, or a duplicated name, is an argument
    /// error.
    pub fn new() -> Result<Self> {
        fn erase<G: Into<Generator>>(templates: Vec<Result<G>>) -> Vec<Result<Generator>> {
            templates.into_iter().map(|g| g.map(Into::into)).collect()
        }
        let mut templates = erase(deposit_templates());
        templates.extend(erase(deposit_on_templates()));
        templates.extend(erase(forex_swap_templates()));
        templates.extend(erase(swap_fixed_ibor_templates()));
        templates.extend(erase(swap_fixed_on_templates()));
        templates.extend(erase(swap_ibor_ibor_templates()));
        templates.extend(erase(leg_templates()));
        Ok(Self {
            generators: keyed("generator", templates)?,
        })
    }

    /// The template registered as `name`, on its template calendar.
    pub fn template(&self, name: &str) -> Result<&Generator> {
        self.generators.get(name)
    }

    /// The generator registered as `name`, adjusted on `calendar`.
    ///
    /// # Errors
    /// An unknown name is a lookup error.
    pub fn get_generator(&self, name: &str, calendar: Arc<dyn Calendar>) -> Result<Generator> {
        Ok(self.generators.get(name)?.with_calendar(calendar))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.names()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether the master is empty.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_master_sizes() {
        assert_eq!(deposit_master().unwrap().len(), 4);
        assert_eq!(deposit_on_master().unwrap().len(), 3);
        assert_eq!(forex_swap_master().unwrap().len(), 3);
        assert_eq!(swap_fixed_ibor_master().unwrap().len(), 6);
        assert_eq!(swap_fixed_on_master().unwrap().len(), 5);
        assert_eq!(swap_ibor_ibor_master().unwrap().len(), 2);
        assert_eq!(leg_master().unwrap().len(), 16);
    }

    #[test]
    fn combined_master_holds_every_template() {
        let master = GeneratorMaster::new().unwrap();
        assert_eq!(master.len(), 4 + 3 + 3 + 6 + 5 + 2 + 16);
        assert!(master.contains("USD6MLIBOR3M"));
        assert!(master.contains("EURIBOR6M"));
        let err = master.template("USD7MLIBOR3M").unwrap_err();
        assert!(err.is_lookup_error());
    }

    #[test]
    fn failed_template_fails_the_master() {
        let broken = vec![
            GeneratorDepositOn::new("USD Deposit ON", USD, template_calendar(), act360()),
            GeneratorDepositOn::new("", EUR, template_calendar(), act360()),
        ];
        let err = keyed("overnight deposit generator", broken).unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn duplicate_template_names_fail_the_master() {
        let twice = vec![
            GeneratorDepositOn::new("USD Deposit ON", USD, template_calendar(), act360()),
            GeneratorDepositOn::new("USD Deposit ON", USD, template_calendar(), act365()),
        ];
        let err = keyed("overnight deposit generator", twice).unwrap_err();
        assert!(err.is_argument_error());
    }
}
