use serde::{Deserialize, Serialize};
use tracing::warn;

/// Monthly hours above which a projection is flagged as overload.
pub const MONTHLY_HOURS_WARNING_THRESHOLD: f64 = 180.0;

const URGENCY_MULTIPLIER: f64 = 1.25;
const EXTENDED_SUPPORT_MULTIPLIER: f64 = 1.15;
const USAGE_RIGHTS_MULTIPLIER: f64 = 1.20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectExtras {
    #[serde(default)]
    pub urgency: bool,
    #[serde(default)]
    pub extended_support: bool,
    #[serde(default)]
    pub usage_rights: bool,
}

/// What-if inputs for pricing a project at the suggested rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectSimulation {
    pub estimated_hours: f64,
    /// Delivery phases; shown in reports, not priced.
    #[serde(default = "default_phases")]
    pub phases: u32,
    #[serde(default)]
    pub extras: ProjectExtras,
    #[serde(default = "default_projects_per_month")]
    pub similar_projects_per_month: u32,
}

fn default_phases() -> u32 {
    1
}

fn default_projects_per_month() -> u32 {
    1
}

impl Default for ProjectSimulation {
    fn default() -> Self {
        Self {
            estimated_hours: 10.0,
            phases: default_phases(),
            extras: ProjectExtras::default(),
            similar_projects_per_month: default_projects_per_month(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub project_budget: f64,
    pub monthly_income: f64,
    pub monthly_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SimulationOutcome {
    pub fn over_capacity(&self) -> bool {
        self.warning.is_some()
    }
}

pub fn simulate_project(suggested_rate: f64, simulation: &ProjectSimulation) -> SimulationOutcome {
    let hours = if simulation.estimated_hours.is_finite() && simulation.estimated_hours >= 0.0 {
        simulation.estimated_hours
    } else {
        warn!(
            hours = simulation.estimated_hours,
            "estimated project hours must be non-negative; using 0"
        );
        0.0
    };

    let mut budget = suggested_rate * hours;
    let extras = simulation.extras;
    if extras.urgency {
        budget *= URGENCY_MULTIPLIER;
    }
    if extras.extended_support {
        budget *= EXTENDED_SUPPORT_MULTIPLIER;
    }
    if extras.usage_rights {
        budget *= USAGE_RIGHTS_MULTIPLIER;
    }

    let projects = f64::from(simulation.similar_projects_per_month);
    let monthly_hours = hours * projects;
    let warning = (monthly_hours > MONTHLY_HOURS_WARNING_THRESHOLD).then(|| {
        format!(
            "This exceeds {MONTHLY_HOURS_WARNING_THRESHOLD:.0} hours a month. Consider adjusting your workload or your rate."
        )
    });

    SimulationOutcome {
        project_budget: budget,
        monthly_income: budget * projects,
        monthly_hours,
        warning,
    }
}
