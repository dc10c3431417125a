use super::domain::QuizAnswerSet;
use crate::reference::{ProfileLevel, ReferenceCatalog, SectorProfile, PLATFORM_QUESTION_ID};

/// Number of platform names quoted in the platform recommendation.
pub const MAX_PLATFORM_EXAMPLES: usize = 3;

/// Platform answers at or below this score trigger a platform suggestion.
const PLATFORM_POINTS_CEILING: u32 = 1;

const HIGH_DEMAND_MARKER: &str = "markets with higher potential";

/// Narrative comparison of the suggested rate against the market average.
#[allow(clippy::too_many_arguments)]
pub fn market_insight(
    market_avg: f64,
    score: u8,
    sector_name: &str,
    country_name: &str,
    ethical_min: f64,
    suggested_rate: f64,
    currency_symbol: &str,
) -> String {
    let mut insight = format!(
        "In {country_name}, the average market hourly rate we use for {sector_name} is {currency_symbol}{market_avg:.2}. "
    );

    if suggested_rate > market_avg {
        let above = percent_gap(suggested_rate - market_avg, market_avg);
        insight.push_str(&format!(
            "With your profile (score {score}/100), your suggested rate of {currency_symbol}{suggested_rate:.2} sits {above:.0}% above that average. Excellent! It reflects the value of your experience and skills."
        ));
    } else if suggested_rate < market_avg {
        if suggested_rate < ethical_min * 1.1 {
            insight.push_str(&format!(
                "Your suggested rate of {currency_symbol}{suggested_rate:.2} is considerably below the market average. You start from an ethical floor of {currency_symbol}{ethical_min:.2}, and your score of {score}/100 shows plenty of room to move closer to market value. Consider strengthening your portfolio and value proposition."
            ));
        } else {
            let below = percent_gap(market_avg - suggested_rate, market_avg);
            insight.push_str(&format!(
                "Your suggested rate of {currency_symbol}{suggested_rate:.2} is {below:.0}% below the market average. With a score of {score}/100 you have a solid base. Focus on communicating your value to reach more competitive rates."
            ));
        }
    } else {
        insight.push_str(&format!(
            "Your suggested rate of {currency_symbol}{suggested_rate:.2} is aligned with the market average, a good starting point for a profile scoring {score}/100."
        ));
    }

    let remark = if score < 50 {
        " You are in a growth stage; keep building experience and portfolio to improve your positioning."
    } else if score < 80 {
        " You have a competitive profile. Make sure your personal marketing reflects your capabilities."
    } else {
        " Your profile is strong; don't hesitate to negotiate rates that reflect your high value."
    };
    insight.push_str(remark);

    insight
}

fn percent_gap(difference: f64, base: f64) -> f64 {
    if base > 0.0 {
        difference / base * 100.0
    } else {
        0.0
    }
}

/// Level recommendations plus platform and high-demand notes.
pub fn personalized_recommendations(
    level: &ProfileLevel,
    score: u8,
    answers: &QuizAnswerSet,
    sector: &SectorProfile,
    catalog: &ReferenceCatalog,
) -> Vec<String> {
    let mut recommendations: Vec<String> = level
        .recommendations
        .iter()
        .map(|item| item.to_string())
        .collect();

    if let Some(points) = answers.get(PLATFORM_QUESTION_ID) {
        let examples = catalog.platform_examples(&sector.id);
        if points <= PLATFORM_POINTS_CEILING && !examples.is_empty() {
            let listed = examples
                .iter()
                .take(MAX_PLATFORM_EXAMPLES)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            if !recommendations.iter().any(|item| item.contains(&listed)) {
                recommendations.push(format!(
                    "Consider exploring platforms like {listed} to connect and showcase your work in {}.",
                    sector.display_name
                ));
            }
        }
    }

    if score >= 70
        && !recommendations
            .iter()
            .any(|item| item.contains(HIGH_DEMAND_MARKER))
    {
        recommendations.push(format!(
            "Average rates vary by market. If your profile is strong but your rate is not, research high-demand niches or {HIGH_DEMAND_MARKER}."
        ));
    }

    recommendations
}
