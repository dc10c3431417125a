//! Plain-text reports for copying or downloading a result.

use super::client::ClientRateEstimate;
use super::freelancer::{FreelancerRateReport, ProjectSimulation, SimulationOutcome};
use chrono::NaiveDate;
use std::fmt::Write;

pub const PRODUCT_NAME: &str = "Fair Rate Calculator";

const RULE: &str = "-----------------------------------------------------------------";

/// Simulation inputs paired with the outcome they produced.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedProject<'a> {
    pub simulation: &'a ProjectSimulation,
    pub outcome: &'a SimulationOutcome,
}

fn money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

fn generated_on(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn freelancer_report(
    report: &FreelancerRateReport,
    project: Option<SimulatedProject<'_>>,
    date: NaiveDate,
) -> String {
    let country = &report.country;
    let symbol = country.currency_symbol.as_str();
    let rates = &report.rates;
    let mut out = String::new();

    writeln!(out, "FREELANCE RATE REPORT - {PRODUCT_NAME}").expect("write header");
    writeln!(out, "{RULE}").expect("write header");
    writeln!(out, "Generated: {}\n", generated_on(date)).expect("write header");

    writeln!(out, "FREELANCER PROFILE:").expect("write profile");
    writeln!(out, "- Country: {}", country.display_name).expect("write profile");
    writeln!(out, "- Sector: {}", report.sector.display_name).expect("write profile");
    writeln!(out, "- Level: {} (profile score {}/100)\n", report.level.name, rates.profile_score)
        .expect("write profile");

    writeln!(out, "MENTOR MESSAGE:").expect("write mentor message");
    writeln!(out, "\"{}\"", report.level.mentor_message).expect("write mentor message");
    writeln!(out, "Key tip: \"{}\"\n", report.level.mentor_tip).expect("write mentor message");

    writeln!(out, "SUGGESTED RATES (per hour in {symbol} {}):", country.currency_code)
        .expect("write rates");
    writeln!(out, "- Ethical minimum rate: {}", money(symbol, rates.ethical_minimum_rate))
        .expect("write rates");
    writeln!(out, "  (based on the reference cost of living in {})", country.display_name)
        .expect("write rates");
    writeln!(out, "- Suggested rate: {}", money(symbol, rates.suggested_rate))
        .expect("write rates");
    if let Some(premium) = rates.premium_rate {
        writeln!(out, "- Premium rate (potential): {}", money(symbol, premium))
            .expect("write rates");
    }
    writeln!(
        out,
        "\nMarket reference (average for your sector and country): {}\n",
        money(symbol, rates.market_average_rate)
    )
    .expect("write market reference");

    if let Some(project) = project {
        writeln!(out, "PROJECT SIMULATION:").expect("write simulation");
        writeln!(out, "- Estimated hours: {} h", project.simulation.estimated_hours)
            .expect("write simulation");
        writeln!(out, "- Phases: {}", project.simulation.phases).expect("write simulation");
        writeln!(
            out,
            "- Estimated project budget: {}\n",
            money(symbol, project.outcome.project_budget)
        )
        .expect("write simulation");
        writeln!(
            out,
            "MONTHLY PROJECTION ({} SIMILAR PROJECT(S)):",
            project.simulation.similar_projects_per_month
        )
        .expect("write monthly projection");
        writeln!(out, "- Estimated gross income: {}", money(symbol, project.outcome.monthly_income))
            .expect("write monthly projection");
        writeln!(out, "- Estimated total hours: {} h/month", project.outcome.monthly_hours)
            .expect("write monthly projection");
        if let Some(warning) = &project.outcome.warning {
            writeln!(out, "- Warning: {warning}").expect("write monthly projection");
        }
        out.push('\n');
    }

    writeln!(out, "PERSONALISED RECOMMENDATIONS:").expect("write recommendations");
    for item in &report.recommendations {
        writeln!(out, "- {item}").expect("write recommendations");
    }

    writeln!(out, "\n{RULE}").expect("write footer");
    writeln!(out, "Generated by the {PRODUCT_NAME}.").expect("write footer");
    writeln!(out, "Remember: these are estimates. Keep researching and learning!")
        .expect("write footer");
    out
}

pub fn client_report(estimate: &ClientRateEstimate, tips: &[&str], date: NaiveDate) -> String {
    let country = &estimate.country;
    let symbol = country.currency_symbol.as_str();
    let range = estimate.recommended_range;
    let mut out = String::new();

    writeln!(out, "FREELANCE SERVICE COST ESTIMATE - {PRODUCT_NAME}").expect("write header");
    writeln!(out, "{RULE}").expect("write header");
    writeln!(out, "Generated: {}\n", generated_on(date)).expect("write header");

    writeln!(out, "SERVICE REQUESTED:").expect("write service");
    writeln!(out, "- Country: {}", country.display_name).expect("write service");
    writeln!(out, "- Sector: {}", estimate.sector.display_name).expect("write service");
    writeln!(out, "- Volume: {}\n", estimate.volume.label()).expect("write service");

    writeln!(out, "ESTIMATED HOURLY RATES (in {symbol} {}):", country.currency_code)
        .expect("write rates");
    writeln!(
        out,
        "- Ethical minimum reference rate: {} / hour",
        money(symbol, estimate.ethical_minimum_rate)
    )
    .expect("write rates");
    writeln!(out, "  (based on the reference cost of living in {})", country.display_name)
        .expect("write rates");
    writeln!(out, "- Average market rate: {} / hour", money(symbol, estimate.market_average_rate))
        .expect("write rates");
    writeln!(
        out,
        "- RECOMMENDED RANGE (by experience level): {} - {} / hour\n",
        money(symbol, range.min),
        money(symbol, range.max)
    )
    .expect("write rates");

    if let Some(total) = &estimate.total_cost_range {
        writeln!(out, "ESTIMATED TOTAL PROJECT COST:").expect("write total cost");
        writeln!(
            out,
            "- Estimated range: {} - {}",
            money(symbol, total.min),
            money(symbol, total.max)
        )
        .expect("write total cost");
        writeln!(out, "  ({})\n", total.explanation).expect("write total cost");
    }

    writeln!(out, "TIPS FOR CLIENTS:").expect("write tips");
    for tip in tips {
        writeln!(out, "- {tip}").expect("write tips");
    }

    writeln!(out, "\n{RULE}").expect("write footer");
    writeln!(out, "Generated by the {PRODUCT_NAME}.").expect("write footer");
    writeln!(out, "Remember: these are estimates to help you plan.").expect("write footer");
    out
}

/// Short summary suitable for a social post.
pub fn share_text(report: &FreelancerRateReport) -> String {
    format!(
        "I found my fair freelance rate with the {PRODUCT_NAME}!\nMy level: {}\nSector: {}\nSuggested rate: {} ({}/hour)\n#FairFreelanceRate",
        report.level.name,
        report.sector.display_name,
        money(&report.country.currency_symbol, report.rates.suggested_rate),
        report.country.currency_code
    )
}
