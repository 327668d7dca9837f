use log::debug;

use crate::backend::target::{Target, TargetGroup};
use crate::backend::task::{EmploymentParams, TaskList, WeaponType};
use crate::backend::waypoint::{FlightWaypoint, MissionKind};

use super::{attack_groups, BuildOutcome, TaskBuildContext, WaypointTaskBuilder};


/// Suppression of enemy air defenses: anti-radiation attacks on the groups
/// that still have a live emitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeadIngressBuilder;

impl WaypointTaskBuilder for SeadIngressBuilder {
    fn mission(&self) -> MissionKind {
        MissionKind::Sead
    }

    fn add_tasks(
        &self,
        context: &TaskBuildContext<'_>,
        waypoint: &FlightWaypoint,
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

        let emitting_groups = ground_object
            .groups()
            .iter()
            .filter(|group| {
                let has_emitter = group.has_alive_emitter();

                if !has_emitter {
                    debug!(
                        "Waypoint {}: no emitter left in group {}",
                        waypoint.name(),
                        group.name()
                    );
                }

                has_emitter
            })
            .map(TargetGroup::name);

        attack_groups(
            self.mission(),
            emitting_groups,
            context,
            WeaponType::Guided,
            EmploymentParams::expend_all_on_group(),
            tasks,
        )
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::mathphysics::Point3D;
    use crate::backend::target::{
        GroundObject, GroundObjectCategory, TargetKind, TargetUnit
    };
    use crate::backend::task::{TaskAction, TaskRecord};
    use crate::backend::waypoints::TaskBuildError;
    use crate::backend::waypoints::tests::{
        convoy_target, ingress_waypoint, package, registry
    };

    use super::*;


    fn mixed_site() -> Target {
        Target::GroundObject(
            GroundObject::new(
                "SA-2 site",
                GroundObjectCategory::AirDefense,
                Point3D::default(),
                vec![
                    TargetGroup::new(
                        "radar",
                        vec![
                            TargetUnit::new("SR", Point3D::default())
                                .with_emitter()
                        ]
                    ),
                    TargetGroup::new(
                        "aaa",
                        vec![TargetUnit::new("ZU-23", Point3D::default())]
                    ),
                    TargetGroup::new(
                        "dead radar",
                        vec![
                            TargetUnit::new("TR", Point3D::default())
                                .with_emitter()
                                .destroyed()
                        ]
                    ),
                ],
            )
        )
    }


    #[test]
    fn only_groups_with_live_emitters_are_attacked() {
        let package = package(mixed_site(), MissionKind::Sead);
        let scenario = registry(&[(1, "radar"), (2, "aaa"), (3, "dead radar")]);
        let context = TaskBuildContext::new(&package, &scenario);
        let waypoint = ingress_waypoint(MissionKind::Sead);
        let mut tasks = TaskList::new();

        let outcome = SeadIngressBuilder.add_tasks(
            &context,
            &waypoint,
            &mut tasks
        );

        assert_eq!(outcome, BuildOutcome::Complete(1));
        assert_eq!(
            tasks.iter().map(TaskRecord::target_group_id).collect::<Vec<_>>(),
            [Some(1)]
        );
    }

    #[test]
    fn sead_uses_guided_weapons() {
        let package = package(mixed_site(), MissionKind::Sead);
        let scenario = registry(&[(1, "radar")]);
        let context = TaskBuildContext::new(&package, &scenario);
        let waypoint = ingress_waypoint(MissionKind::Sead);
        let mut tasks = TaskList::new();

        let _ = SeadIngressBuilder.add_tasks(&context, &waypoint, &mut tasks);

        assert!(matches!(
            tasks.as_slice()[0].action(),
            TaskAction::AttackGroup { weapon_type: WeaponType::Guided, .. }
        ));
    }

    #[test]
    fn sead_rejects_convoys() {
        let package = package(convoy_target("Column"), MissionKind::Sead);
        let scenario = registry(&[(1, "Column")]);
        let context = TaskBuildContext::new(&package, &scenario);
        let waypoint = ingress_waypoint(MissionKind::Sead);
        let mut tasks = TaskList::new();

        let outcome = SeadIngressBuilder.add_tasks(
            &context,
            &waypoint,
            &mut tasks
        );

        assert!(tasks.is_empty());
        assert!(matches!(
            outcome,
            BuildOutcome::Skipped(
                TaskBuildError::WrongTargetVariant {
                    found: TargetKind::Convoy,
                    ..
                }
            )
        ));
    }
}
