//! Benchmarks for the tenor-analytics conversion engine.
//!
//! Run with: cargo bench -p tenor-analytics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;

use tenor_analytics::{ConversionEngine, Measure, Quote};
use tenor_bonds::FixedRateBond;
use tenor_core::types::{Date, Frequency, Horizon, ValuationParams};
use tenor_curves::{CreditCurve, DiscountCurve, MarketEnv, ParYieldCurve};

// =============================================================================
// TEST DATA
// =============================================================================

fn settlement() -> Date {
    Date::from_ymd(2025, 6, 16).unwrap()
}

fn create_test_market() -> MarketEnv {
    MarketEnv::new(DiscountCurve::flat(settlement(), 0.04, 40).unwrap())
        .with_government(ParYieldCurve::flat(settlement(), 0.038).unwrap())
        .with_swap(ParYieldCurve::flat(settlement(), 0.041).unwrap())
        .with_credit(CreditCurve::flat_from_cds(settlement(), 0.012, 0.4).unwrap())
}

fn create_test_bond(years: i32) -> FixedRateBond {
    let dated = Date::from_ymd(2020, 2, 15).unwrap();
    FixedRateBond::builder()
        .coupon_rate(dec!(0.05))
        .frequency(Frequency::SemiAnnual)
        .dated_date(dated)
        .maturity(dated.add_years(5 + years).unwrap())
        .build()
        .unwrap()
}

fn create_callable_bond(years: i32) -> FixedRateBond {
    let dated = Date::from_ymd(2020, 2, 15).unwrap();
    FixedRateBond::builder()
        .coupon_rate(dec!(0.06))
        .frequency(Frequency::SemiAnnual)
        .dated_date(dated)
        .maturity(dated.add_years(5 + years).unwrap())
        .callable(Date::from_ymd(2027, 2, 15).unwrap(), dec!(100))
        .callable(Date::from_ymd(2028, 2, 15).unwrap(), dec!(100))
        .build()
        .unwrap()
}

// =============================================================================
// SINGLE CONVERSIONS
// =============================================================================

fn bench_single_conversions(c: &mut Criterion) {
    let bond = create_test_bond(10);
    let market = create_test_market();
    let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(settlement()));
    let quote = Quote::price(96.5);

    let mut group = c.benchmark_group("convert_from_price");

    for measure in [
        Measure::Yield,
        Measure::ZSpread,
        Measure::GSpread,
        Measure::Oas,
        Measure::AssetSwapSpread,
        Measure::CreditBasis,
        Measure::Pecs,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(measure),
            &measure,
            |b, &measure| {
                b.iter(|| engine.convert(black_box(quote), measure, Horizon::Maturity))
            },
        );
    }
    group.finish();
}

fn bench_conversion_by_maturity(c: &mut Criterion) {
    let market = create_test_market();
    let quote = Quote::price(96.5);

    let mut group = c.benchmark_group("zspread_by_maturity");

    for years in [2, 10, 30] {
        let bond = create_test_bond(years);
        let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(settlement()));

        group.bench_with_input(BenchmarkId::from_parameter(years), &engine, |b, engine| {
            b.iter(|| engine.convert(black_box(quote), Measure::ZSpread, Horizon::Maturity))
        });
    }
    group.finish();
}

// =============================================================================
// OPTIMAL EXERCISE AND FULL REPORT
// =============================================================================

fn bench_optimal_exercise(c: &mut Criterion) {
    let bond = create_callable_bond(10);
    let market = create_test_market();
    let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(settlement()));
    let quote = Quote::price(106.0);

    c.bench_function("yield_to_worst", |b| {
        b.iter(|| engine.convert(black_box(quote), Measure::Yield, Horizon::OptimalExercise))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let bond = create_test_bond(10);
    let market = create_test_market();
    let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(settlement()));
    let quote = Quote::price(96.5);

    c.bench_function("full_report", |b| {
        b.iter(|| engine.full_report(black_box(quote), Horizon::Maturity))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(conversions, bench_single_conversions, bench_conversion_by_maturity);
criterion_group!(reports, bench_optimal_exercise, bench_full_report);

criterion_main!(conversions, reports);
