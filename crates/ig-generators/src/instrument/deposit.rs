//! Deposit generators.

use std::sync::Arc;

use ig_core::errors::{ensure_named, Error, Result};
use ig_core::{impl_eq_by_key, Natural, Real};
use ig_currencies::Currency;
use ig_instruments::{Deposit, DepositCounterpart};
use ig_time::schedule::{adjust_business_days, adjust_period};
use ig_time::{BusinessDayConvention, Calendar, Date, DayCounter, TimeUnit};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, spot_date, GeneratorInstrument, WithCalendar};

// ── Term deposits ─────────────────────────────────────────────────────────────

/// Term deposits starting at spot (or a forward period after it).
#[derive(Debug, Clone)]
pub struct GeneratorDeposit {
    name: String,
    currency: Currency,
    calendar: Arc<dyn Calendar>,
    spot_lag: Natural,
    day_counter: Arc<dyn DayCounter>,
    business_day_convention: BusinessDayConvention,
    end_of_month: bool,
}

impl GeneratorDeposit {
    fn eq_key(&self) -> (&str, Currency, &str, Natural, &str, BusinessDayConvention, bool) {
        (
            &self.name,
            self.currency,
            self.calendar.name(),
            self.spot_lag,
            self.day_counter.name(),
            self.business_day_convention,
            self.end_of_month,
        )
    }
}

impl_eq_by_key!(GeneratorDeposit);

impl GeneratorDeposit {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        spot_lag: Natural,
        day_counter: Arc<dyn DayCounter>,
        business_day_convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "deposit generator")?;
        Ok(Self {
            name,
            currency,
            calendar,
            spot_lag,
            day_counter,
            business_day_convention,
            end_of_month,
        })
    }

    /// Deposit currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Business days from trade to spot.
    pub fn spot_lag(&self) -> Natural {
        self.spot_lag
    }

    /// Accrual day count.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }
}

impl GeneratorInstrument for GeneratorDeposit {
    type Output = Deposit;

    fn name(&self) -> &str {
        &self.name
    }

    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<Deposit> {
        check_call(reference_date, quote, notional)?;
        let (start_period, end_period) = attribute.ir_periods()?;
        let calendar = self.calendar.as_ref();
        let spot = spot_date(reference_date, self.spot_lag, calendar)?;
        let start = adjust_period(
            spot,
            start_period,
            self.business_day_convention,
            calendar,
            self.end_of_month,
        )?;
        let end = adjust_period(
            start,
            end_period,
            self.business_day_convention,
            calendar,
            self.end_of_month,
        )?;
        let accrual = self.day_counter.year_fraction(start, end);
        debug!(generator = %self.name, %reference_date, %start, %end, "generated deposit");
        Deposit::new(self.currency, start, end, notional, quote, accrual)
    }
}

impl WithCalendar for GeneratorDeposit {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }
}

// ── Overnight deposits ────────────────────────────────────────────────────────

/// Overnight (`0D`), tom-next (`1D`) and spot-next deposits lasting one
/// business day.
#[derive(Debug, Clone)]
pub struct GeneratorDepositOn {
    name: String,
    currency: Currency,
    calendar: Arc<dyn Calendar>,
    day_counter: Arc<dyn DayCounter>,
}

impl GeneratorDepositOn {
    fn eq_key(&self) -> (&str, Currency, &str, &str) {
        (&self.name, self.currency, self.calendar.name(), self.day_counter.name())
    }
}

impl_eq_by_key!(GeneratorDepositOn);

impl GeneratorDepositOn {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "overnight deposit generator")?;
        Ok(Self {
            name,
            currency,
            calendar,
            day_counter,
        })
    }

    /// Deposit currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// `(start, end)` of the one-day deposit.  The attribute's start period
    /// counts business days; its end period is ignored.
    fn dates(&self, reference_date: Date, attribute: &GeneratorAttribute) -> Result<(Date, Date)> {
        let (start_period, _) = attribute.ir_periods()?;
        let (days, unit) = start_period.canonical();
        if unit != TimeUnit::Days {
            return Err(Error::InvalidArgument(format!(
                "overnight deposit start period must be in days, got {start_period}"
            )));
        }
        let calendar = self.calendar.as_ref();
        let start = adjust_business_days(reference_date, days, calendar)?;
        let end = adjust_business_days(start, 1, calendar)?;
        Ok((start, end))
    }

    fn deposit(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<Deposit> {
        check_call(reference_date, quote, notional)?;
        let (start, end) = self.dates(reference_date, attribute)?;
        let accrual = self.day_counter.year_fraction(start, end);
        debug!(generator = %self.name, %reference_date, %start, %end, "generated overnight deposit");
        Deposit::new(self.currency, start, end, notional, quote, accrual)
    }
}

impl GeneratorInstrument for GeneratorDepositOn {
    type Output = Deposit;

    fn name(&self) -> &str {
        &self.name
    }

    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<Deposit> {
        self.deposit(reference_date, quote, notional, attribute)
    }
}

impl WithCalendar for GeneratorDepositOn {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }
}

/// Overnight deposits with a named counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorDepositOnCounterpart {
    deposit: GeneratorDepositOn,
    counterpart: String,
}

impl GeneratorDepositOnCounterpart {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        day_counter: Arc<dyn DayCounter>,
        counterpart: impl Into<String>,
    ) -> Result<Self> {
        let counterpart = counterpart.into();
        ensure_named(&counterpart, "counterpart")?;
        Ok(Self {
            deposit: GeneratorDepositOn::new(name, currency, calendar, day_counter)?,
            counterpart,
        })
    }

    /// Counterpart name.
    pub fn counterpart(&self) -> &str {
        &self.counterpart
    }
}

impl GeneratorInstrument for GeneratorDepositOnCounterpart {
    type Output = DepositCounterpart;

    fn name(&self) -> &str {
        &self.deposit.name
    }

    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<DepositCounterpart> {
        let deposit = self
            .deposit
            .deposit(reference_date, quote, notional, attribute)?;
        DepositCounterpart::new(deposit, self.counterpart.clone())
    }
}

impl WithCalendar for GeneratorDepositOnCounterpart {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            deposit: self.deposit.with_calendar(calendar),
            counterpart: self.counterpart.clone(),
        }
    }
}
