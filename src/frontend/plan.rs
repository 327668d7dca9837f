use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::package::StrikePackage;
use crate::backend::scenario::ScenarioRegistry;


#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to read mission plan `{0}`")]
    Read(String, #[source] std::io::Error),
    #[error("Mission plan is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}


/// Input of the compiler: the generated scenario and the packages flying in
/// it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MissionPlan {
    #[serde(default)]
    scenario: ScenarioRegistry,
    #[serde(default)]
    packages: Vec<StrikePackage>,
}

impl MissionPlan {
    #[must_use]
    pub fn new(scenario: ScenarioRegistry, packages: Vec<StrikePackage>) -> Self {
        Self { scenario, packages }
    }

    #[must_use]
    pub fn scenario(&self) -> &ScenarioRegistry {
        &self.scenario
    }

    #[must_use]
    pub fn packages(&self) -> &[StrikePackage] {
        &self.packages
    }

    /// # Errors
    ///
    /// Will return `Err` if the file at `plan_path` cannot be read or does not
    /// hold a valid plan.
    pub fn from_json(plan_path: &Path) -> Result<Self, PlanError> {
        let json_string = fs::read_to_string(plan_path)
            .map_err(|error| {
                PlanError::Read(plan_path.display().to_string(), error)
            })?;

        Self::from_json_str(&json_string)
    }

    /// # Errors
    ///
    /// Will return `Err` if `json_string` does not hold a valid plan.
    pub fn from_json_str(json_string: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json_string)?)
    }
}
