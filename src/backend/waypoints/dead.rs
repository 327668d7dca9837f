use crate::backend::target::{Target, TargetGroup};
use crate::backend::task::{EmploymentParams, TaskList, WeaponType};
use crate::backend::waypoint::{FlightWaypoint, MissionKind};

use super::{attack_groups, BuildOutcome, TaskBuildContext, WaypointTaskBuilder};


const DEAD_PARAMS: EmploymentParams = EmploymentParams::expend_all_on_group();


/// Destruction of enemy air defenses: every group of the targeted
/// installation gets its own `AttackGroup` task.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeadIngressBuilder;

impl WaypointTaskBuilder for DeadIngressBuilder {
    fn mission(&self) -> MissionKind {
        MissionKind::Dead
    }

    fn add_tasks(
        &self,
        context: &TaskBuildContext<'_>,
        _waypoint: &FlightWaypoint,
        tasks: &mut TaskList,
    ) -> BuildOutcome {
        let target = context.package().target();

        let ground_object = match target {
            Target::GroundObject(ground_object) => ground_object,
            Target::Convoy(_)
                | Target::Airfield(_)
                | Target::NavalControlPoint(_)
                | Target::FrontLine(_)          =>
                    return self.wrong_target(target.kind()),
        };

        attack_groups(
            self.mission(),
            ground_object.groups().iter().map(TargetGroup::name),
            context,
            WeaponType::Auto,
            DEAD_PARAMS,
            tasks,
        )
    }
}
