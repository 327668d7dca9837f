use log::{error, info};

use super::annotations::MissionAnnotations;
use super::mathphysics::{Point3D, Position};
use super::package::StrikePackage;
use super::scenario::ScenarioEntityRegistry;
use super::task::{MissionTask, TaskList};
use super::waypoint::{FlightWaypoint, FlightWaypointType};
use super::waypoints::{
    builder_for, BuildOutcome, TaskBuildContext, TaskBuildError
};


#[derive(Clone, Debug, PartialEq)]
pub struct CompiledWaypoint {
    name: String,
    waypoint_type: FlightWaypointType,
    position: Point3D,
    tasks: TaskList,
    // Preset tasks aimed at groups missing from the scenario.
    dropped_presets: Vec<TaskBuildError>,
    // `None` for waypoints without a task builder.
    outcome: Option<BuildOutcome>,
}

impl CompiledWaypoint {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn waypoint_type(&self) -> FlightWaypointType {
        self.waypoint_type
    }

    #[must_use]
    pub fn position(&self) -> &Point3D {
        &self.position
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub fn dropped_presets(&self) -> &[TaskBuildError] {
        &self.dropped_presets
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&BuildOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<&TaskBuildError> {
        let mut diagnostics: Vec<&TaskBuildError> = self.dropped_presets
            .iter()
            .collect();

        if let Some(outcome) = &self.outcome {
            diagnostics.extend(outcome.diagnostics());
        }

        diagnostics
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.dropped_presets.is_empty()
            || self.outcome
                .as_ref()
                .is_some_and(BuildOutcome::is_degraded)
    }

    #[must_use]
    pub fn mission_tasks(&self) -> Vec<MissionTask> {
        self.tasks.to_mission_tasks()
    }
}


#[derive(Clone, Debug, PartialEq)]
pub struct CompiledPackage {
    name: String,
    waypoints: Vec<CompiledWaypoint>,
}

impl CompiledPackage {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn waypoints(&self) -> &[CompiledWaypoint] {
        &self.waypoints
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.waypoints
            .iter()
            .map(|waypoint| waypoint.tasks.len())
            .sum()
    }

    #[must_use]
    pub fn degraded_waypoints(&self) -> Vec<&CompiledWaypoint> {
        self.waypoints
            .iter()
            .filter(|waypoint| waypoint.is_degraded())
            .collect()
    }
}


/// Second phase of mission generation: turns the routes of packages into
/// waypoint tasks against an already generated scenario.
pub struct MissionCompiler<'a> {
    scenario: &'a dyn ScenarioEntityRegistry,
    annotations: MissionAnnotations,
}

impl<'a> MissionCompiler<'a> {
    #[must_use]
    pub fn new(scenario: &'a dyn ScenarioEntityRegistry) -> Self {
        Self {
            scenario,
            annotations: MissionAnnotations::new(),
        }
    }

    #[must_use]
    pub fn annotations(&self) -> &MissionAnnotations {
        &self.annotations
    }

    #[must_use]
    pub fn into_annotations(self) -> MissionAnnotations {
        self.annotations
    }

    // The package is only read: every waypoint gets a fresh task list, so
    // compiling again never stacks duplicate tasks onto a route.
    pub fn compile(&mut self, package: &StrikePackage) -> CompiledPackage {
        let registered: usize = package
            .route()
            .iter()
            .map(|waypoint| {
                self.annotations.register_special_waypoints(
                    waypoint,
                    waypoint.targets()
                )
            })
            .sum();

        let context = TaskBuildContext::new(package, self.scenario);

        let waypoints: Vec<CompiledWaypoint> = package
            .route()
            .iter()
            .map(|waypoint| self.compile_waypoint(&context, waypoint))
            .collect();

        let compiled_package = CompiledPackage {
            name: package.name().to_string(),
            waypoints,
        };

        info!("{}", package_summary(&compiled_package, registered));

        compiled_package
    }

    fn compile_waypoint(
        &self,
        context: &TaskBuildContext<'_>,
        waypoint: &FlightWaypoint,
    ) -> CompiledWaypoint {
        let (mut tasks, dropped_presets) = self.resolve_preset_tasks(waypoint);

        let outcome = builder_for(waypoint.waypoint_type())
            .map(|builder| builder.add_tasks(context, waypoint, &mut tasks));

        CompiledWaypoint {
            name: waypoint.name().to_string(),
            waypoint_type: waypoint.waypoint_type(),
            position: *waypoint.position(),
            tasks,
            dropped_presets,
            outcome,
        }
    }

    // Every `AttackGroup` must point at a group of the scenario, presets
    // included.
    fn resolve_preset_tasks(
        &self,
        waypoint: &FlightWaypoint
    ) -> (TaskList, Vec<TaskBuildError>) {
        let mut tasks = TaskList::new();
        let mut dropped_presets = Vec::new();

        for preset in waypoint.preset_tasks() {
            match preset.target_group_id() {
                Some(group_id)
                    if self.scenario.find_group_by_id(group_id).is_none() =>
                {
                    let error = TaskBuildError::UnresolvedPresetGroup {
                        waypoint: waypoint.name().to_string(),
                        group_id,
                    };

                    error!("{error}");
                    dropped_presets.push(error);
                },
                _ => tasks.push(*preset),
            }
        }

        (tasks, dropped_presets)
    }
}


fn package_summary(
    compiled_package: &CompiledPackage,
    registered: usize
) -> String {
    format!(
        "Package {}: {} task(s) on {} waypoint(s), {} degraded, \
        {} special waypoint(s)",
        compiled_package.name(),
        compiled_package.task_count(),
        compiled_package.waypoints().len(),
        compiled_package.degraded_waypoints().len(),
        registered
    )
}
