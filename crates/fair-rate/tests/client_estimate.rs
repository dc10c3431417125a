use chrono::NaiveDate;
use fair_rate::reference::{
    ExperienceLevel, MarketRateSource, ProjectUrgency, ProjectVolume, ReferenceCatalog,
};
use fair_rate::workflows::client::{ClientCostEstimator, ClientEstimateInput};
use fair_rate::workflows::export::client_report;
use std::sync::Arc;

fn input(experience_level: ExperienceLevel, urgency: ProjectUrgency) -> ClientEstimateInput {
    ClientEstimateInput {
        country: Some("US".to_string()),
        sector: Some("design".to_string()),
        experience_level,
        urgency,
        volume: ProjectVolume::OneTask,
        estimated_hours: Some(8.0),
    }
}

#[test]
fn us_design_ranges_follow_experience_tiers() {
    let estimator = ClientCostEstimator::new(Arc::new(ReferenceCatalog::standard()));

    let ranges: Vec<_> = ExperienceLevel::ordered()
        .into_iter()
        .map(|level| {
            estimator
                .estimate(&input(level, ProjectUrgency::Normal))
                .expect("estimate succeeds")
                .recommended_range
        })
        .collect();

    assert_eq!(ranges[0].min, 40.0);
    assert_eq!(ranges[0].max, 50.0);
    assert_eq!(ranges[2].max, 90.0);
    assert!(ranges.windows(2).all(|pair| pair[0].max <= pair[1].max));
}

#[test]
fn urgency_scales_total_cost_only() {
    let estimator = ClientCostEstimator::new(Arc::new(ReferenceCatalog::standard()));
    let normal = estimator
        .estimate(&input(ExperienceLevel::Specialized, ProjectUrgency::Normal))
        .expect("normal");
    let immediate = estimator
        .estimate(&input(ExperienceLevel::Specialized, ProjectUrgency::Immediate))
        .expect("immediate");

    assert_eq!(normal.recommended_range, immediate.recommended_range);
    assert_eq!(immediate.market_source, MarketRateSource::Exact);
    assert_eq!(immediate.total_cost_range.map(|cost| cost.max), Some(1260.0));
    assert_eq!(normal.total_cost_range.map(|cost| cost.max), Some(720.0));
}

#[test]
fn parsed_identifiers_drive_the_estimate() {
    let input = ClientEstimateInput {
        country: Some("us".to_string()),
        sector: Some("design".to_string()),
        experience_level: ExperienceLevel::from_id("Specialized").expect("known level"),
        urgency: ProjectUrgency::from_id("immediate").expect("known urgency"),
        volume: ProjectVolume::from_id("several-tasks").expect("known volume"),
        estimated_hours: None,
    };
    assert!(ExperienceLevel::from_id("guru").is_none());

    let estimate = ClientCostEstimator::new(Arc::new(ReferenceCatalog::standard()))
        .estimate(&input)
        .expect("estimate succeeds");
    assert_eq!(estimate.hours, 16.0);
    assert_eq!(estimate.total_cost_range.map(|cost| cost.max), Some(2520.0));
}

#[test]
fn client_report_carries_tips_and_date() {
    let catalog = Arc::new(ReferenceCatalog::standard());
    let estimate = ClientCostEstimator::new(Arc::clone(&catalog))
        .estimate(&input(ExperienceLevel::Basic, ProjectUrgency::Fast))
        .expect("estimate succeeds");
    let date = NaiveDate::from_ymd_opt(2025, 1, 3).expect("valid date");

    let text = client_report(&estimate, catalog.client_tips(), date);

    assert!(text.contains("Generated: January 3, 2025"));
    assert!(text.contains("- Country: United States"));
    assert!(text.contains("- Average market rate: $50.00 / hour"));
    assert!(text.contains("TIPS FOR CLIENTS:"));
    assert_eq!(
        text.lines().filter(|line| line.starts_with("- ")).count(),
        3 + 3 + 1 + catalog.client_tips().len()
    );
}
