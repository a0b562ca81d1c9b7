//! Standard overnight index conventions and the overnight index master.

use crate::overnight_index::IndexOn;
use ig_core::errors::Result;
use ig_core::Registry;
use ig_currencies::currencies::{BRL, EUR, GBP, USD};
use ig_time::{Actual360, Actual365Fixed, Business252, Calendar};
use std::sync::Arc;

/// Effective Fed Funds: ACT/360, published the next day.
pub fn fed_fund() -> Result<IndexOn> {
    IndexOn::new("FED FUND", USD, Arc::new(Actual360), 1)
}

/// SOFR: ACT/360, published the next day.
pub fn sofr() -> Result<IndexOn> {
    IndexOn::new("SOFR", USD, Arc::new(Actual360), 1)
}

/// EONIA: ACT/360, published the same day.
pub fn eonia() -> Result<IndexOn> {
    IndexOn::new("EONIA", EUR, Arc::new(Actual360), 0)
}

/// €STR: ACT/360, published the next day.
pub fn estr() -> Result<IndexOn> {
    IndexOn::new("ESTR", EUR, Arc::new(Actual360), 1)
}

/// SONIA: ACT/365F, published the same day.
pub fn sonia() -> Result<IndexOn> {
    IndexOn::new("SONIA", GBP, Arc::new(Actual365Fixed), 0)
}

/// Brazilian CDI: Business/252 on the given calendar.
pub fn cdi(calendar: Arc<dyn Calendar>) -> Result<IndexOn> {
    IndexOn::new("CDI", BRL, Arc::new(Business252::new(calendar)), 0)
}

/// Fed Funds, SOFR, EONIA, €STR and SONIA keyed by name.
pub fn overnight_master() -> Result<Registry<IndexOn>> {
    Registry::try_from_entries(
        "overnight index",
        [fed_fund(), sofr(), eonia(), estr(), sonia()]
            .into_iter()
            .map(|idx| idx.map(|idx| (idx.name().to_string(), idx))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_time::WeekendsOnly;

    #[test]
    fn master_lookup() {
        let master = overnight_master().unwrap();
        assert_eq!(master.len(), 5);
        let sonia = master.get("SONIA").unwrap();
        assert_eq!(sonia.currency(), GBP);
        assert_eq!(sonia.day_counter().name(), "Actual/365 (Fixed)");
        assert!(master.get("TONAR").unwrap_err().is_lookup_error());
    }

    #[test]
    fn cdi_counts_business_days() {
        let idx = cdi(Arc::new(WeekendsOnly)).unwrap();
        assert_eq!(idx.day_counter().name(), "Business/252(Weekends Only)");
    }
}
