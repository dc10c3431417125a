use crate::infra::{
    build_rate_service, parse_answer, parse_experience, parse_urgency, parse_volume,
};
use chrono::Local;
use clap::Args;
use fair_rate::config::AppConfig;
use fair_rate::error::AppError;
use fair_rate::reference::{ExperienceLevel, ProjectUrgency, ProjectVolume};
use fair_rate::telemetry;
use fair_rate::workflows::client::ClientEstimateInput;
use fair_rate::workflows::export::{client_report, freelancer_report, share_text, SimulatedProject};
use fair_rate::workflows::freelancer::{
    simulate_project, FreelancerRateRequest, ProjectExtras, ProjectSimulation,
};
use fair_rate::workflows::{RateService, SessionUsage};

#[derive(Args, Debug)]
pub(crate) struct FreelancerArgs {
    /// Country code, e.g. ES
    #[arg(long)]
    pub(crate) country: String,
    /// Sector id, e.g. design (see `catalog`)
    #[arg(long)]
    pub(crate) sector: String,
    /// Quiz answer as QUESTION_ID=POINTS; repeat once per question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, u32)>,
    /// Estimated hours for a project simulation
    #[arg(long)]
    pub(crate) project_hours: Option<f64>,
    /// Delivery phases of the simulated project
    #[arg(long, default_value_t = 1)]
    pub(crate) phases: u32,
    /// Similar projects per month for the simulation
    #[arg(long, default_value_t = 1)]
    pub(crate) projects_per_month: u32,
    /// Apply the urgency surcharge to the simulated project
    #[arg(long)]
    pub(crate) urgent: bool,
    /// Apply the extended support surcharge to the simulated project
    #[arg(long)]
    pub(crate) extended_support: bool,
    /// Apply the usage rights surcharge to the simulated project
    #[arg(long)]
    pub(crate) usage_rights: bool,
    /// Print the pricing micro-lessons after the result
    #[arg(long)]
    pub(crate) lessons: bool,
    /// Print the full plain-text report instead of the summary
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClientArgs {
    /// Country code, e.g. US
    #[arg(long)]
    pub(crate) country: String,
    /// Sector id, e.g. development (see `catalog`)
    #[arg(long)]
    pub(crate) sector: String,
    /// basic, professional or specialized
    #[arg(long, value_parser = parse_experience)]
    pub(crate) experience: ExperienceLevel,
    /// normal, fast or immediate
    #[arg(long, value_parser = parse_urgency, default_value = "normal")]
    pub(crate) urgency: ProjectUrgency,
    /// one-task, several-tasks or recurrent
    #[arg(long, value_parser = parse_volume, default_value = "one-task")]
    pub(crate) volume: ProjectVolume,
    /// Estimated hours; defaults to a baseline that depends on volume
    #[arg(long)]
    pub(crate) hours: Option<f64>,
    /// Print the full plain-text report instead of the summary
    #[arg(long)]
    pub(crate) report: bool,
}

fn prepare() -> Result<RateService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    build_rate_service(&config)
}

pub(crate) async fn run_freelancer(args: FreelancerArgs) -> Result<(), AppError> {
    let service = prepare()?;
    let request = FreelancerRateRequest {
        country: Some(args.country),
        sector: Some(args.sector),
        answers: args.answers.into_iter().collect(),
    };

    let report = service.freelancer_report(&request)?;
    let simulation = args.project_hours.map(|estimated_hours| ProjectSimulation {
        estimated_hours,
        phases: args.phases,
        extras: ProjectExtras {
            urgency: args.urgent,
            extended_support: args.extended_support,
            usage_rights: args.usage_rights,
        },
        similar_projects_per_month: args.projects_per_month,
    });
    let outcome = simulation
        .as_ref()
        .map(|simulation| simulate_project(report.rates.suggested_rate, simulation));

    if args.report {
        let project = simulation
            .as_ref()
            .zip(outcome.as_ref())
            .map(|(simulation, outcome)| SimulatedProject {
                simulation,
                outcome,
            });
        print!(
            "{}",
            freelancer_report(&report, project, Local::now().date_naive())
        );
    } else {
        let symbol = report.country.currency_symbol.as_str();
        let rates = &report.rates;
        println!(
            "Fair rate for {} in {}",
            report.sector.display_name, report.country.display_name
        );
        println!(
            "- Profile score: {}/100 ({})",
            rates.profile_score, report.level.name
        );
        println!(
            "- Ethical minimum: {symbol}{:.2}/h",
            rates.ethical_minimum_rate
        );
        println!(
            "- Market average: {symbol}{:.2}/h ({})",
            rates.market_average_rate,
            report.market_source.label()
        );
        println!("- Suggested rate: {symbol}{:.2}/h", rates.suggested_rate);
        if let Some(premium) = rates.premium_rate {
            println!("- Premium rate: {symbol}{premium:.2}/h");
        }
        println!("\nMentor: {}", report.level.mentor_message);
        println!("Tip: {}", report.level.mentor_tip);
        println!("\n{}", report.market_insight);

        if let Some(outcome) = &outcome {
            println!("\nProject simulation");
            if let Some(simulation) = &simulation {
                println!("- Phases: {}", simulation.phases);
            }
            println!("- Project budget: {symbol}{:.2}", outcome.project_budget);
            println!(
                "- Monthly income: {symbol}{:.2} over {} h",
                outcome.monthly_income, outcome.monthly_hours
            );
            if let Some(warning) = &outcome.warning {
                println!("- {warning}");
            }
        }

        println!("\nRecommendations:");
        for item in &report.recommendations {
            println!("  - {item}");
        }
        println!("\n{}", share_text(&report));
    }

    if args.lessons {
        println!("\nMicro-lessons");
        for lesson in service.catalog().lessons() {
            println!("\n{}\n{}", lesson.title, lesson.content);
            if let (Some(text), Some(link)) = (lesson.link_text, lesson.link) {
                println!("{text}: {link}");
            }
        }
    }

    let usage = SessionUsage {
        used_simulator: outcome.is_some(),
        used_lessons: args.lessons,
    };
    if let Some(handle) = service.record_usage(&report, usage) {
        match handle.await {
            Ok(notice) if !notice.delivered => eprintln!("analytics: {}", notice.message),
            Ok(_) => {}
            Err(err) => eprintln!("analytics task failed: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn run_client(args: ClientArgs) -> Result<(), AppError> {
    let service = prepare()?;
    let input = ClientEstimateInput {
        country: Some(args.country),
        sector: Some(args.sector),
        experience_level: args.experience,
        urgency: args.urgency,
        volume: args.volume,
        estimated_hours: args.hours,
    };

    let estimate = service.client_estimate(&input)?;

    if args.report {
        print!(
            "{}",
            client_report(
                &estimate,
                service.catalog().client_tips(),
                Local::now().date_naive()
            )
        );
        return Ok(());
    }

    let symbol = estimate.country.currency_symbol.as_str();
    let tier = service.catalog().tariffs().experience(estimate.experience_level);
    println!(
        "Hiring in {} for {} ({})",
        estimate.sector.display_name, estimate.country.display_name, tier.label
    );
    println!(
        "- Ethical minimum: {symbol}{:.2}/h",
        estimate.ethical_minimum_rate
    );
    println!(
        "- Market average: {symbol}{:.2}/h ({})",
        estimate.market_average_rate,
        estimate.market_source.label()
    );
    println!(
        "- Recommended range: {symbol}{:.2} - {symbol}{:.2}/h",
        estimate.recommended_range.min, estimate.recommended_range.max
    );
    match &estimate.total_cost_range {
        Some(total) => println!(
            "- Total cost: {symbol}{:.2} - {symbol}{:.2} ({})",
            total.min, total.max, total.explanation
        ),
        None => println!("- Total cost: not estimated without hours"),
    }

    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let service = prepare()?;
    let catalog = service.catalog();

    println!("Countries");
    for country in catalog.countries() {
        println!(
            "  {:<3} {:<15} {} minimum monthly salary {}{:.2}",
            country.code,
            country.display_name,
            country.currency_code,
            country.currency_symbol,
            country.min_monthly_salary
        );
    }

    println!("\nSectors");
    for sector in catalog.sectors() {
        println!("  {:<16} {}", sector.id, sector.display_name);
    }

    println!("\nMarket rates per hour");
    for (country, sector, rate) in catalog.market_rates().entries() {
        println!("  {country:<3} {sector:<16} {rate:.2}");
    }

    println!("\nQuiz (pass answers as --answer QUESTION_ID=POINTS)");
    for question in catalog.questions() {
        println!("  {} [{}] {}", question.id, question.block_title, question.question_text);
        for option in &question.options {
            println!("    {:>2}  {}", option.points, option.text);
        }
    }

    Ok(())
}
