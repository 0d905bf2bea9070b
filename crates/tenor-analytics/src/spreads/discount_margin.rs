//! Discount margin: spread over the curve-implied funding index.
//!
//! For a fixed bond the margin generalizes the classic FRN quote: the
//! index rate to the work-out is the swap-curve rate restated on the
//! simple money-market basis floating indexes quote in, and
//!
//! ```text
//! dm = y − index_rate(t_w)
//! ```

use tenor_core::types::Compounding;
use tenor_curves::MarketEnv;

use crate::error::AnalyticsResult;

/// The curve-implied index rate to the work-out time.
///
/// Takes the swap rate at `t_workout` (quoted with `quoting` compounding)
/// and converts it to the equivalent simple rate over the same horizon.
pub fn index_rate(
    env: &MarketEnv,
    t_workout: f64,
    quoting: Compounding,
) -> AnalyticsResult<f64> {
    let swap_rate = env.swap()?.yield_at(t_workout)?;
    Ok(quoting.convert_to(swap_rate, Compounding::Simple, t_workout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::types::Date;
    use tenor_curves::{DiscountCurve, ParYieldCurve};

    #[test]
    fn test_index_rate_is_simple_basis() {
        let ref_date = Date::from_ymd(2025, 1, 15).unwrap();
        let env = MarketEnv::new(DiscountCurve::flat(ref_date, 0.04, 30).unwrap())
            .with_swap(ParYieldCurve::flat(ref_date, 0.04).unwrap());

        let t = 5.0;
        let index = index_rate(&env, t, Compounding::SemiAnnual).unwrap();
        let expected = Compounding::SemiAnnual.convert_to(0.04, Compounding::Simple, t);
        assert_relative_eq!(index, expected, epsilon = 1e-12);
        // Simple restatement of a compounded rate over 5y sits above it
        assert!(index > 0.04);
    }
}
