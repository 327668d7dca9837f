use log::error;
use thiserror::Error;

use super::package::StrikePackage;
use super::scenario::{GroupId, ScenarioEntityRegistry};
use super::target::TargetKind;
use super::task::{EmploymentParams, TaskList, TaskRecord, WeaponType};
use super::waypoint::{FlightWaypoint, FlightWaypointType, MissionKind};

pub use bai::BaiIngressBuilder;
pub use dead::DeadIngressBuilder;
pub use sead::SeadIngressBuilder;
pub use strike::StrikeIngressBuilder;


pub mod bai;
pub mod dead;
pub mod sead;
pub mod strike;


/// Diagnostics of task compilation. They are logged and reported through
/// [`BuildOutcome`], never returned as `Err`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TaskBuildError {
    #[error("Unexpected target type for {mission} mission: {found}")]
    WrongTargetVariant {
        mission: MissionKind,
        found: TargetKind,
    },
    #[error("Could not find group for {mission} mission {group_name}")]
    UnresolvedSubgroup {
        mission: MissionKind,
        group_name: String,
    },
    #[error("Could not find group {group_id} for preset task of waypoint {waypoint}")]
    UnresolvedPresetGroup {
        waypoint: String,
        group_id: GroupId,
    },
    #[error("Nothing left to strike for {mission} mission at {target}")]
    NoAimPoints {
        mission: MissionKind,
        target: String,
    },
}


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    Complete(usize),
    Partial {
        appended: usize,
        unresolved: Vec<TaskBuildError>,
    },
    Skipped(TaskBuildError),
}

impl BuildOutcome {
    #[must_use]
    pub fn from_attempt(
        appended: usize,
        unresolved: Vec<TaskBuildError>
    ) -> Self {
        if unresolved.is_empty() {
            Self::Complete(appended)
        } else {
            Self::Partial { appended, unresolved }
        }
    }

    #[must_use]
    pub fn appended(&self) -> usize {
        match self {
            Self::Complete(appended)
                | Self::Partial { appended, .. } => *appended,
            Self::Skipped(_)                     => 0,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<&TaskBuildError> {
        match self {
            Self::Complete(_)                => Vec::new(),
            Self::Partial { unresolved, .. } => unresolved.iter().collect(),
            Self::Skipped(error)             => vec![error],
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !matches!(self, Self::Complete(_))
    }
}


pub struct TaskBuildContext<'a> {
    package: &'a StrikePackage,
    scenario: &'a dyn ScenarioEntityRegistry,
}

impl<'a> TaskBuildContext<'a> {
    #[must_use]
    pub fn new(
        package: &'a StrikePackage,
        scenario: &'a dyn ScenarioEntityRegistry
    ) -> Self {
        Self { package, scenario }
    }

    #[must_use]
    pub fn package(&self) -> &'a StrikePackage {
        self.package
    }

    #[must_use]
    pub fn scenario(&self) -> &'a dyn ScenarioEntityRegistry {
        self.scenario
    }
}


/// Compiles the intent of one waypoint kind into mission tasks.
pub trait WaypointTaskBuilder {
    fn mission(&self) -> MissionKind;

    /// Appends the tasks of `waypoint` to `tasks`. Existing entries are never
    /// touched. Failures are logged and reported in the outcome.
    fn add_tasks(
        &self,
        context: &TaskBuildContext<'_>,
        waypoint: &FlightWaypoint,
        tasks: &mut TaskList,
    ) -> BuildOutcome;

    fn wrong_target(&self, found: TargetKind) -> BuildOutcome {
        let error = TaskBuildError::WrongTargetVariant {
            mission: self.mission(),
            found,
        };

        error!("{error}");

        BuildOutcome::Skipped(error)
    }
}


#[must_use]
pub fn builder_for(
    waypoint_type: FlightWaypointType
) -> Option<&'static dyn WaypointTaskBuilder> {
    let FlightWaypointType::Ingress(mission) = waypoint_type else {
        return None;
    };

    let builder: &'static dyn WaypointTaskBuilder = match mission {
        MissionKind::Dead   => &DeadIngressBuilder,
        MissionKind::Sead   => &SeadIngressBuilder,
        MissionKind::Bai    => &BaiIngressBuilder,
        MissionKind::Strike => &StrikeIngressBuilder,
    };

    Some(builder)
}


// Resolves every group name in order and appends one `AttackGroup` per
// resolved group. Unresolved names are logged and skipped.
fn attack_groups<'n, I>(
    mission: MissionKind,
    group_names: I,
    context: &TaskBuildContext<'_>,
    weapon_type: WeaponType,
    params: EmploymentParams,
    tasks: &mut TaskList,
) -> BuildOutcome
where
    I: IntoIterator<Item = &'n str>
{
    let mut appended = 0;
    let mut unresolved = Vec::new();

    for group_name in group_names {
        let Some(scenario_group) = context.scenario().find_group(group_name)
        else {
            let error = TaskBuildError::UnresolvedSubgroup {
                mission,
                group_name: group_name.to_string(),
            };

            error!("{error}");
            unresolved.push(error);

            continue;
        };

        tasks.push(
            TaskRecord::attack_group(scenario_group.id(), weapon_type, params)
        );
        appended += 1;
    }

    BuildOutcome::from_attempt(appended, unresolved)
}
