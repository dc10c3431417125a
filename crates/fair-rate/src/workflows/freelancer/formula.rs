use super::domain::RateResult;
use tracing::warn;

/// Working hours in a reference month.
pub const HOURS_PER_MONTH_REFERENCE: f64 = 160.0;

/// Scores strictly above this unlock the premium tier.
pub const PREMIUM_SCORE_THRESHOLD: u8 = 89;

pub const PREMIUM_MULTIPLIER: f64 = 1.25;

/// Hourly rate implied by the reference minimum monthly wage.
pub fn ethical_minimum(min_monthly_salary: f64) -> f64 {
    ethical_minimum_with_hours(min_monthly_salary, HOURS_PER_MONTH_REFERENCE)
}

/// Returns 0 for a non-positive salary; a non-positive hours value falls
/// back to the 160 hour reference month.
pub fn ethical_minimum_with_hours(min_monthly_salary: f64, hours_per_month: f64) -> f64 {
    if min_monthly_salary.is_nan() || min_monthly_salary <= 0.0 {
        warn!(min_monthly_salary, "minimum monthly salary must be positive");
        return 0.0;
    }

    let hours = if hours_per_month > 0.0 {
        hours_per_month
    } else {
        warn!(
            hours_per_month,
            "reference hours must be positive; using {}", HOURS_PER_MONTH_REFERENCE
        );
        HOURS_PER_MONTH_REFERENCE
    };

    min_monthly_salary / hours
}

pub fn effective_market_average(ethical_min: f64, market_avg: f64) -> f64 {
    ethical_min.max(market_avg)
}

/// Linear interpolation between the ethical minimum (score 0) and the
/// effective market average (score 100).
pub fn suggested_rate(ethical_min: f64, market_avg: f64, score: f64) -> f64 {
    let score = if (0.0..=100.0).contains(&score) {
        score
    } else {
        let clamped = if score > 100.0 { 100.0 } else { 0.0 };
        warn!(score, clamped, "profile score outside 0-100; clamping");
        clamped
    };

    let effective = effective_market_average(ethical_min, market_avg);
    if score >= 100.0 {
        return effective;
    }

    ethical_min + (effective - ethical_min) * (score / 100.0)
}

pub fn premium_rate(suggested: f64, score: u8) -> Option<f64> {
    (score > PREMIUM_SCORE_THRESHOLD).then(|| suggested * PREMIUM_MULTIPLIER)
}

pub fn rate_result(ethical_min: f64, market_avg: f64, score: u8) -> RateResult {
    let suggested = suggested_rate(ethical_min, market_avg, f64::from(score));

    RateResult {
        ethical_minimum_rate: ethical_min,
        market_average_rate: effective_market_average(ethical_min, market_avg),
        profile_score: score,
        suggested_rate: suggested,
        premium_rate: premium_rate(suggested, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn ethical_minimum_divides_by_reference_month() {
        assert_eq!(ethical_minimum(1134.0), 7.0875);
        assert_eq!(ethical_minimum(1600.0), 10.0);
    }

    #[test]
    fn ethical_minimum_never_negative() {
        assert_eq!(ethical_minimum(0.0), 0.0);
        assert_eq!(ethical_minimum(-500.0), 0.0);
        assert_eq!(ethical_minimum(f64::NAN), 0.0);
    }

    #[test]
    fn non_positive_hours_fall_back_to_reference() {
        assert_eq!(ethical_minimum_with_hours(1600.0, 0.0), 10.0);
        assert_eq!(ethical_minimum_with_hours(1600.0, -20.0), 10.0);
        assert_eq!(ethical_minimum_with_hours(1600.0, 100.0), 16.0);
    }

    #[test]
    fn suggested_rate_hits_both_endpoints() {
        let ethical = ethical_minimum(1134.0);
        assert_eq!(suggested_rate(ethical, 35.0, 0.0), ethical);
        assert_eq!(suggested_rate(ethical, 35.0, 100.0), 35.0);
    }

    #[test]
    fn suggested_rate_matches_reference_scenario() {
        let ethical = ethical_minimum(1134.0);
        assert!(approx_eq(suggested_rate(ethical, 35.0, 60.0), 23.825));
    }

    #[test]
    fn suggested_rate_is_monotonic_in_score() {
        let ethical = ethical_minimum(7468.0);
        let mut previous = f64::MIN;
        for score in 0..=100 {
            let rate = suggested_rate(ethical, 200.0, f64::from(score));
            assert!(rate >= previous, "rate dropped at score {score}");
            previous = rate;
        }
    }

    #[test]
    fn market_average_below_floor_is_lifted() {
        assert_eq!(suggested_rate(20.0, 10.0, 50.0), 20.0);
        assert_eq!(effective_market_average(20.0, 10.0), 20.0);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(suggested_rate(10.0, 30.0, 150.0), 30.0);
        assert_eq!(suggested_rate(10.0, 30.0, -5.0), 10.0);
    }

    #[test]
    fn premium_requires_score_above_eighty_nine() {
        assert_eq!(premium_rate(40.0, 89), None);
        assert_eq!(premium_rate(40.0, 90), Some(50.0));
    }

    #[test]
    fn rate_result_keeps_suggested_above_floor() {
        let result = rate_result(7.0875, 35.0, 90);
        assert!(result.ethical_minimum_rate <= result.suggested_rate);
        assert_eq!(
            result.premium_rate,
            Some(result.suggested_rate * PREMIUM_MULTIPLIER)
        );
    }
}
