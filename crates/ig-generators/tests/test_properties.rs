//! Structural properties of generated legs and instruments.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use approx::relative_eq;
use ig_cashflows::{Annuity, CashFlow, Coupon, Payment};
use ig_core::CompoundingMethod;
use ig_currencies::currencies::USD;
use ig_generators::{
    FixingLayout, Generator, GeneratorAttribute, GeneratorInstrument, GeneratorLegFixed,
    GeneratorLegIbor, GeneratorLegIborCompounding, GeneratorLegOnArithmeticAverage,
    GeneratorLegOnCompounded, GeneratorMaster, LegConventions, WithCalendar,
};
use ig_indexes::ibor::usd_libor;
use ig_indexes::overnight::sofr;
use ig_instruments::InstrumentDefinition;
use ig_time::{Actual360, BusinessDayConvention, Date, Period, StubType, Thirty360, WeekendsOnly};
use proptest::prelude::*;

fn arb_reference() -> impl Strategy<Value = Date> {
    (2000u16..2040, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
}

fn arb_payment_period() -> impl Strategy<Value = Period> {
    prop::sample::select(vec![
        Period::months(1),
        Period::months(3),
        Period::months(6),
        Period::years(1),
    ])
}

fn arb_stub() -> impl Strategy<Value = StubType> {
    prop::sample::select(vec![
        StubType::ShortStart,
        StubType::LongStart,
        StubType::ShortEnd,
        StubType::LongEnd,
    ])
}

fn conventions(stub: StubType) -> LegConventions {
    LegConventions::new(
        USD,
        Arc::new(WeekendsOnly),
        2,
        BusinessDayConvention::ModifiedFollowing,
        true,
    )
    .with_stub_type(stub)
}

#[derive(Debug, Clone, Copy)]
enum LegKind {
    Fixed,
    Ibor,
    IborCompounding,
    OnCompounded,
}

fn arb_leg_kind() -> impl Strategy<Value = LegKind> {
    prop::sample::select(vec![
        LegKind::Fixed,
        LegKind::Ibor,
        LegKind::IborCompounding,
        LegKind::OnCompounded,
    ])
}

/// A standalone payer leg of the given kind.
fn generate_leg(
    kind: LegKind,
    conv: LegConventions,
    period: Period,
    reference: Date,
    notional: f64,
    attr: &GeneratorAttribute,
) -> Annuity {
    let result = match kind {
        LegKind::Fixed => GeneratorLegFixed::new("FIXED", conv, period, Arc::new(Thirty360))
            .unwrap()
            .generate_instrument(reference, 0.03, notional, attr),
        LegKind::Ibor => {
            let index = usd_libor(Period::months(3)).unwrap();
            GeneratorLegIbor::new("IBOR", conv, index, period, Arc::new(Actual360))
                .unwrap()
                .generate_instrument(reference, 0.001, notional, attr)
        }
        LegKind::IborCompounding => GeneratorLegIborCompounding::new(
            "IBOR CMP",
            conv,
            usd_libor(Period::months(1)).unwrap(),
            period,
            Arc::new(Actual360),
            CompoundingMethod::Flat,
        )
        .unwrap()
        .generate_instrument(reference, 0.001, notional, attr),
        LegKind::OnCompounded => {
            let index = sofr().unwrap();
            GeneratorLegOnCompounded::new("SOFR CMP", conv, index, period, Arc::new(Actual360))
                .unwrap()
                .generate_instrument(reference, 0.001, notional, attr)
        }
    };
    result.unwrap()
}

fn hash_of(g: &Generator) -> u64 {
    let mut h = DefaultHasher::new();
    g.hash(&mut h);
    h.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn legs_are_contiguous(
        reference in arb_reference(),
        months in 1i32..121,
        period in arb_payment_period(),
        stub in arb_stub(),
        kind in arb_leg_kind(),
        payment_offset in 0u32..3,
        exchange in any::<bool>(),
        notional in 1.0f64..1e9,
    ) {
        let attr = GeneratorAttribute::ir(Period::months(months));
        let conv = conventions(stub).with_payment_offset(payment_offset);
        let exchanged = conv.clone().with_exchange_notional(exchange);
        let annuity = generate_leg(kind, exchanged, period, reference, notional, &attr);
        let coupons: Vec<_> = annuity.coupons().collect();
        prop_assert!(!coupons.is_empty());
        for w in coupons.windows(2) {
            prop_assert_eq!(w[0].accrual_end_date(), w[1].accrual_start_date());
        }
        let dates = annuity.payment_dates();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        for c in &coupons {
            prop_assert!(c.accrual_start_date() < c.accrual_end_date());
            prop_assert!(c.payment_date() >= c.accrual_end_date());
            prop_assert_eq!(c.notional(), -notional);
        }

        let flows = annuity.flows();
        if exchange {
            let plain_conv = conv.with_exchange_notional(false);
            let plain = generate_leg(kind, plain_conv, period, reference, notional, &attr);
            prop_assert_eq!(coupons.len(), plain.len());
            prop_assert_eq!(flows.len(), plain.len() + 2);
            let (first, last) = (&flows[0], &flows[flows.len() - 1]);
            prop_assert!(matches!(first, CashFlow::Fixed(_)));
            prop_assert!(matches!(last, CashFlow::Fixed(_)));
            // payer leg: the signed notional is -notional
            prop_assert_eq!(first.known_amount(), Some(notional));
            prop_assert_eq!(last.known_amount(), Some(-notional));
            prop_assert_eq!(first.payment_date(), coupons[0].accrual_start_date());
            prop_assert_eq!(last.payment_date(), plain.maturity_date());
        } else {
            prop_assert!(flows.iter().all(|f| f.as_coupon().is_some()));
        }
    }

    #[test]
    fn swap_legs_share_start_and_oppose(
        reference in arb_reference(),
        years in 1i32..31,
        quote in -0.01f64..0.1,
    ) {
        let gen = GeneratorMaster::new()
            .unwrap()
            .get_generator("USD6MLIBOR3M", Arc::new(WeekendsOnly))
            .unwrap();
        let def = gen
            .generate_instrument(reference, quote, 1e6, &GeneratorAttribute::ir(Period::years(years)))
            .unwrap();
        let InstrumentDefinition::Swap(swap) = def else {
            panic!("expected a swap");
        };
        let first = swap.first_leg().coupons().next().unwrap();
        let second = swap.second_leg().coupons().next().unwrap();
        prop_assert_eq!(first.accrual_start_date(), second.accrual_start_date());
        prop_assert!(swap.first_leg().coupons().all(|c| c.notional() < 0.0));
        prop_assert!(swap.second_leg().coupons().all(|c| c.notional() > 0.0));
        prop_assert_eq!(swap.first_leg().maturity_date(), swap.second_leg().maturity_date());
    }

    #[test]
    fn deposits_accrue_forward(
        reference in arb_reference(),
        months in 1i32..25,
    ) {
        let gen = GeneratorMaster::new()
            .unwrap()
            .get_generator("EUR Deposit", Arc::new(WeekendsOnly))
            .unwrap();
        let def = gen
            .generate_instrument(reference, 0.01, 1.0, &GeneratorAttribute::ir(Period::months(months)))
            .unwrap();
        let InstrumentDefinition::Deposit(dep) = def else {
            panic!("expected a deposit");
        };
        prop_assert!(dep.start_date() > reference);
        prop_assert!(dep.end_date() > dep.start_date());
        let days = dep.end_date() - dep.start_date();
        prop_assert!(relative_eq!(dep.accrual_factor(), days as f64 / 360.0, epsilon = 1e-14));
    }

    #[test]
    fn daily_and_simplified_averages_accrue_alike(
        reference in arb_reference(),
        months in 1i32..25,
    ) {
        let leg = |layout| {
            GeneratorLegOnArithmeticAverage::new(
                "SOFR AVG",
                conventions(StubType::ShortStart),
                sofr().unwrap(),
                Period::months(3),
                Arc::new(Actual360),
                layout,
            )
            .unwrap()
        };
        let attr = GeneratorAttribute::ir(Period::months(months));
        let daily = leg(FixingLayout::Daily)
            .generate_instrument(reference, 0.0, 1e6, &attr)
            .unwrap();
        let simplified = leg(FixingLayout::Simplified)
            .generate_instrument(reference, 0.0, 1e6, &attr)
            .unwrap();
        prop_assert_eq!(daily.len(), simplified.len());
        for (d, s) in daily.flows().iter().zip(simplified.flows()) {
            let (CashFlow::CouponOnArithmeticAverage(d), CashFlow::CouponOnArithmeticAverageSimplified(s)) = (d, s)
            else {
                panic!("unexpected coupon types");
            };
            prop_assert!(relative_eq!(
                d.fixings().total_accrual(),
                s.fixing_period().accrual_factor,
                epsilon = 1e-12
            ));
            prop_assert_eq!(d.accrual_start_date(), s.accrual_start_date());
            prop_assert_eq!(d.payment_date(), s.payment_date());
        }
    }

    #[test]
    fn generator_equality_follows_names(
        i in 0usize..40,
        j in 0usize..40,
    ) {
        let master = GeneratorMaster::new().unwrap();
        let names: Vec<&str> = master.names().collect();
        let (a, b) = (names[i % names.len()], names[j % names.len()]);
        let ga = master.get_generator(a, Arc::new(WeekendsOnly)).unwrap();
        let gb = master.get_generator(b, Arc::new(WeekendsOnly)).unwrap();
        prop_assert_eq!(a == b, ga == gb);
        if ga == gb {
            prop_assert_eq!(hash_of(&ga), hash_of(&gb));
        }
        let copy = ga.with_calendar(Arc::new(WeekendsOnly));
        prop_assert_eq!(hash_of(&copy), hash_of(&ga));
    }
}
