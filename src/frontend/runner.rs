use std::path::Path;

use log::info;
use thiserror::Error;

use crate::backend::compiler::{CompiledPackage, MissionCompiler};

use super::config::{GeneralConfig, InputConfig, OutputConfig};
use super::plan::{MissionPlan, PlanError};

use output::{write_document, CompiledMissionDocument, OutputError};


pub mod output;


#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Plan(#[from] PlanError),
    #[error("{0}")]
    Output(#[from] OutputError),
}


pub struct MissionRunner {
    plan: MissionPlan,
    output_config: OutputConfig,
}

impl MissionRunner {
    #[must_use]
    pub fn new(plan: MissionPlan, output_config: OutputConfig) -> Self {
        Self { plan, output_config }
    }

    /// # Errors
    ///
    /// Will return `Err` if the mission plan cannot be loaded.
    pub fn from_config(general_config: &GeneralConfig) -> Result<Self, RunError> {
        let plan = match general_config.input_config() {
            InputConfig::Plan(plan_path) => MissionPlan::from_json(plan_path)?,
            InputConfig::Demo(demo)      => demo.plan(),
        };

        Ok(Self::new(plan, general_config.output_config().clone()))
    }

    /// # Errors
    ///
    /// Will return `Err` if the compiled mission cannot be written.
    pub fn run(&self) -> Result<(), RunError> {
        self.start_info();

        let mut compiler = MissionCompiler::new(self.plan.scenario());

        let compiled_packages: Vec<CompiledPackage> = self.plan
            .packages()
            .iter()
            .map(|package| compiler.compile(package))
            .collect();

        let document = CompiledMissionDocument::new(
            &compiled_packages,
            compiler.annotations()
        );
        let output_path = write_document(&self.output_config, &document)?;

        self.end_info(&compiled_packages, output_path.as_deref());

        Ok(())
    }

    fn start_info(&self) {
        info!(
            "Scenario group count: {}",
            self.plan.scenario().len()
        );
        info!(
            "Package count: {}",
            self.plan.packages().len()
        );
    }

    fn end_info(
        &self,
        compiled_packages: &[CompiledPackage],
        output_path: Option<&Path>,
    ) {
        let task_count: usize = compiled_packages
            .iter()
            .map(CompiledPackage::task_count)
            .sum();
        let degraded_count: usize = compiled_packages
            .iter()
            .map(|package| package.degraded_waypoints().len())
            .sum();

        info!("Compiled task count: {task_count}");
        info!("Degraded waypoint count: {degraded_count}");

        if let Some(output_path) = output_path {
            info!("Output filename: {}", output_path.display());
        }
    }
}
