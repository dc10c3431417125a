use fair_rate::reference::{MarketRateSource, MarketRateTable, ReferenceCatalog};
use fair_rate::workflows::freelancer::{
    ethical_minimum, premium_rate, suggested_rate, FreelancerRateCalculator,
    FreelancerRateRequest, QuizAnswerSet,
};
use fair_rate::workflows::CalculationError;
use std::sync::Arc;

const QUESTION_IDS: [&str; 7] = [
    "q1_experience",
    "q2_portfolio",
    "q3_professionalism",
    "q4_tools",
    "q5_reputation",
    "q6_value_proposition",
    "q7_platforms",
];

fn answers(points: [u32; 7]) -> QuizAnswerSet {
    QUESTION_IDS.iter().copied().zip(points).collect()
}

fn request(country: &str, sector: &str, points: [u32; 7]) -> FreelancerRateRequest {
    FreelancerRateRequest {
        country: Some(country.to_string()),
        sector: Some(sector.to_string()),
        answers: answers(points),
    }
}

#[test]
fn spain_design_scenario_matches_reference_numbers() {
    let ethical = ethical_minimum(1134.0);
    assert_eq!(ethical, 7.0875);

    let suggested = suggested_rate(ethical, 35.0, 60.0);
    assert!((suggested - 23.825).abs() < 1e-9);
    assert_eq!(premium_rate(suggested, 60), None);
    assert_eq!(premium_rate(40.0, 90), Some(50.0));
}

#[test]
fn suggested_rate_never_decreases_with_score() {
    let calculator = FreelancerRateCalculator::new(Arc::new(ReferenceCatalog::standard()));
    let mut previous = 0.0;

    for q1 in [0, 5, 10, 15, 20] {
        for q2 in [0, 10, 20] {
            let report = calculator
                .calculate(&request("CO", "development", [q1, q2, 20, 15, 10, 15, 3]))
                .expect("calculation succeeds");
            if q2 == 0 {
                previous = 0.0;
            }
            assert!(report.rates.suggested_rate >= previous);
            assert!(report.rates.suggested_rate >= report.rates.ethical_minimum_rate);
            assert!(report.rates.suggested_rate <= report.rates.market_average_rate);
            previous = report.rates.suggested_rate;
        }
    }
}

#[test]
fn every_standard_country_and_sector_resolves_exactly() {
    let catalog = Arc::new(ReferenceCatalog::standard());
    let calculator = FreelancerRateCalculator::new(Arc::clone(&catalog));

    for country in catalog.countries() {
        for sector in catalog.sectors() {
            let report = calculator
                .calculate(&request(&country.code, &sector.id, [10, 10, 10, 10, 5, 10, 2]))
                .expect("standard pairs calculate");
            assert_eq!(
                report.market_source,
                MarketRateSource::Exact,
                "{}/{} fell back",
                country.code,
                sector.id
            );
        }
    }
}

#[test]
fn csv_override_replaces_market_table() {
    let csv = "country,sector,rate\nES,design,70\nES,other,30\n";
    let table = MarketRateTable::from_csv_reader(csv.as_bytes()).expect("csv parses");
    let catalog = ReferenceCatalog::standard().with_market_rates(table);
    let calculator = FreelancerRateCalculator::new(Arc::new(catalog));

    let design = calculator
        .calculate(&request("ES", "design", [20, 20, 20, 15, 10, 15, 3]))
        .expect("design calculates");
    assert_eq!(design.rates.suggested_rate, 70.0);

    let writing = calculator
        .calculate(&request("ES", "writing", [20, 20, 20, 15, 10, 15, 3]))
        .expect("writing calculates");
    assert_eq!(writing.market_source, MarketRateSource::CountryGeneralist);
    assert_eq!(writing.rates.suggested_rate, 30.0);

    let mexico = calculator
        .calculate(&request("MX", "design", [20, 20, 20, 15, 10, 15, 3]))
        .expect("mexico calculates");
    assert_eq!(mexico.market_source, MarketRateSource::EthicalMultiple);
}

#[test]
fn out_of_range_answer_is_rejected() {
    let calculator = FreelancerRateCalculator::new(Arc::new(ReferenceCatalog::standard()));
    let result = calculator.calculate(&request("US", "writing", [25, 20, 20, 15, 10, 15, 3]));

    assert_eq!(
        result.map(|report| report.rates),
        Err(CalculationError::PointsOutOfRange {
            question: "q1_experience".to_string(),
            points: 25,
            max: 20,
        })
    );
}
