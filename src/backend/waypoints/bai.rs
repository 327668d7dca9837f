use crate::backend::target::{Target, TargetGroup};
use crate::backend::task::{EmploymentParams, Expend, TaskList, WeaponType};
use crate::backend::waypoint::{FlightWaypoint, MissionKind};

use super::{attack_groups, BuildOutcome, TaskBuildContext, WaypointTaskBuilder};


const BAI_PARAMS: EmploymentParams = EmploymentParams::expend_all_on_group()
    .with_expend(Expend::Auto);


/// Battlefield air interdiction against installations, convoys and carrier
/// groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaiIngressBuilder;

impl WaypointTaskBuilder for BaiIngressBuilder {
    fn mission(&self) -> MissionKind {
        MissionKind::Bai
    }

    fn add_tasks(
        &self,
        context: &TaskBuildContext<'_>,
        _waypoint: &FlightWaypoint,
        tasks: &mut TaskList,
    ) -> BuildOutcome {
        let target = context.package().target();

        let group_names: Vec<&str> = match target {
            Target::GroundObject(ground_object) => ground_object
                .groups()
                .iter()
                .map(TargetGroup::name)
                .collect(),
            Target::Convoy(convoy)              => vec![convoy.group_name()],
            Target::NavalControlPoint(naval)    => vec![naval.carrier_group()],
            Target::Airfield(_)
                | Target::FrontLine(_)          =>
                    return self.wrong_target(target.kind()),
        };

        attack_groups(
            self.mission(),
            group_names,
            context,
            WeaponType::Auto,
            BAI_PARAMS,
            tasks,
        )
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::mathphysics::Point3D;
    use crate::backend::target::{ControlPoint, NavalControlPoint, TargetKind};
    use crate::backend::task::TaskRecord;
    use crate::backend::waypoints::TaskBuildError;
    use crate::backend::waypoints::tests::{
        convoy_target, ground_object_target, ingress_waypoint, package, registry
    };

    use super::*;


    fn build(target: Target, groups: &[(usize, &str)]) -> (BuildOutcome, TaskList) {
        let package = package(target, MissionKind::Bai);
        let scenario = registry(groups);
        let context = TaskBuildContext::new(&package, &scenario);
        let waypoint = ingress_waypoint(MissionKind::Bai);
        let mut tasks = TaskList::new();

        let outcome = BaiIngressBuilder.add_tasks(
            &context,
            &waypoint,
            &mut tasks
        );

        (outcome, tasks)
    }


    #[test]
    fn convoy_is_resolved_by_its_name() {
        let (outcome, tasks) = build(convoy_target("Column"), &[(4, "Column")]);

        assert_eq!(outcome, BuildOutcome::Complete(1));
        assert_eq!(tasks.as_slice()[0].target_group_id(), Some(4));
    }

    #[test]
    fn carrier_group_of_naval_control_point_is_attacked() {
        let target = Target::NavalControlPoint(
            NavalControlPoint::new("CVN", Point3D::default(), "CVN group")
        );

        let (outcome, tasks) = build(target, &[(8, "CVN group")]);

        assert_eq!(outcome.appended(), 1);
        assert_eq!(tasks.as_slice()[0].target_group_id(), Some(8));
    }

    #[test]
    fn every_group_of_ground_object_is_attacked_with_automatic_expenditure() {
        let (outcome, tasks) = build(
            ground_object_target(&["armor 1", "armor 2"]),
            &[(1, "armor 1"), (2, "armor 2")]
        );

        assert_eq!(outcome, BuildOutcome::Complete(2));
        assert!(tasks.iter().all(|task| task.params().expend == Expend::Auto));
        assert!(tasks.iter().all(|task| task.params().group_attack));
        assert_eq!(
            tasks.iter().map(TaskRecord::target_group_id).collect::<Vec<_>>(),
            [Some(1), Some(2)]
        );
    }

    #[test]
    fn missing_convoy_group_is_reported() {
        let (outcome, tasks) = build(convoy_target("Column"), &[]);

        assert!(tasks.is_empty());
        assert_eq!(
            outcome.diagnostics()[0].to_string(),
            "Could not find group for BAI mission Column"
        );
    }

    #[test]
    fn airfields_are_not_bai_targets() {
        let target = Target::Airfield(
            ControlPoint::new("Kutaisi", Point3D::default())
        );

        let (outcome, tasks) = build(target, &[]);

        assert!(tasks.is_empty());
        assert_eq!(
            outcome,
            BuildOutcome::Skipped(TaskBuildError::WrongTargetVariant {
                mission: MissionKind::Bai,
                found: TargetKind::Airfield,
            })
        );
    }
}
