use log::error;

use crate::backend::mathphysics::{centroid, Point3D, Position};
use crate::backend::target::Target;
use crate::backend::task::{EmploymentParams, TaskList, TaskRecord, WeaponType};
use crate::backend::waypoint::{FlightWaypoint, MissionKind};

use super::{
    BuildOutcome, TaskBuildContext, TaskBuildError, WaypointTaskBuilder
};


const STRIKE_PARAMS: EmploymentParams = EmploymentParams::expend_all_on_group()
    .with_group_attack(false);
const BUILDING_STRIKE_PARAMS: EmploymentParams =
    EmploymentParams::expend_all_on_group();


/// Precision strike on fixed points. Aim points come from the waypoint's
/// strike markers, otherwise from the target itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrikeIngressBuilder;

impl StrikeIngressBuilder {
    fn bomb_points(
        points: &[Point3D],
        params: EmploymentParams,
        tasks: &mut TaskList
    ) -> BuildOutcome {
        for point in points {
            tasks.push(TaskRecord::bombing(*point, WeaponType::Auto, params));
        }

        BuildOutcome::Complete(points.len())
    }
}

impl WaypointTaskBuilder for StrikeIngressBuilder {
    fn mission(&self) -> MissionKind {
        MissionKind::Strike
    }

    fn add_tasks(
        &self,
        context: &TaskBuildContext<'_>,
        waypoint: &FlightWaypoint,
        tasks: &mut TaskList,
    ) -> BuildOutcome {
        let target = context.package().target();

        let marker_points: Vec<Point3D> = waypoint
            .targets()
            .iter()
            .map(|marker| *marker.position())
            .collect();

        match target {
            Target::GroundObject(ground_object)
                if ground_object.category().is_building() =>
            {
                let aim_point = centroid(&marker_points)
                    .unwrap_or(*target.position());

                Self::bomb_points(&[aim_point], BUILDING_STRIKE_PARAMS, tasks)
            },
            Target::GroundObject(ground_object) => {
                let points = if marker_points.is_empty() {
                    ground_object.strike_points()
                } else {
                    marker_points
                };

                if points.is_empty() {
                    let error = TaskBuildError::NoAimPoints {
                        mission: self.mission(),
                        target: target.name().to_string(),
                    };

                    error!("{error}");

                    return BuildOutcome::Skipped(error);
                }

                Self::bomb_points(&points, STRIKE_PARAMS, tasks)
            },
            Target::Airfield(_) => {
                let points = if marker_points.is_empty() {
                    vec![*target.position()]
                } else {
                    marker_points
                };

                Self::bomb_points(&points, STRIKE_PARAMS, tasks)
            },
            Target::Convoy(_)
                | Target::NavalControlPoint(_)
                | Target::FrontLine(_) =>
                    self.wrong_target(target.kind()),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::target::{
        ControlPoint, FrontLine, GroundObject, GroundObjectCategory,
        TargetGroup, TargetKind, TargetUnit
    };
    use crate::backend::task::TaskAction;
    use crate::backend::waypoint::{
        FlightWaypointBuilder, FlightWaypointType, StrikeTargetMarker
    };
    use crate::backend::waypoints::tests::{package, registry};

    use super::*;


    fn strike_waypoint(markers: &[StrikeTargetMarker]) -> FlightWaypoint {
        FlightWaypointBuilder::new()
            .set_waypoint_type(FlightWaypointType::Ingress(MissionKind::Strike))
            .set_targets(markers)
            .build()
    }

    fn build(target: Target, waypoint: &FlightWaypoint) -> (BuildOutcome, TaskList) {
        let package = package(target, MissionKind::Strike);
        let scenario = registry(&[]);
        let context = TaskBuildContext::new(&package, &scenario);
        let mut tasks = TaskList::new();

        let outcome = StrikeIngressBuilder.add_tasks(
            &context,
            waypoint,
            &mut tasks
        );

        (outcome, tasks)
    }

    fn bombing_points(tasks: &TaskList) -> Vec<Point3D> {
        tasks
            .iter()
            .filter_map(|task| match task.action() {
                TaskAction::Bombing { position, .. } => Some(*position),
                TaskAction::AttackGroup { .. }       => None,
            })
            .collect()
    }

    fn armor_depot() -> Target {
        Target::GroundObject(
            GroundObject::new(
                "Depot",
                GroundObjectCategory::Armor,
                Point3D::default(),
                vec![
                    TargetGroup::new(
                        "tanks",
                        vec![
                            TargetUnit::new("T-72 1", Point3D::new(1.0, 0.0, 0.0)),
                            TargetUnit::new("T-72 2", Point3D::new(2.0, 0.0, 0.0))
                                .destroyed(),
                            TargetUnit::new("T-72 3", Point3D::new(3.0, 0.0, 0.0)),
                        ]
                    ),
                ],
            )
        )
    }


    #[test]
    fn one_bombing_per_strike_marker() {
        let markers = [
            StrikeTargetMarker::new("DMPI 1", Point3D::new(10.0, 0.0, 0.0)),
            StrikeTargetMarker::new("DMPI 2", Point3D::new(20.0, 0.0, 0.0)),
        ];

        let (outcome, tasks) = build(armor_depot(), &strike_waypoint(&markers));

        assert_eq!(outcome, BuildOutcome::Complete(2));
        assert_eq!(
            bombing_points(&tasks),
            [Point3D::new(10.0, 0.0, 0.0), Point3D::new(20.0, 0.0, 0.0)]
        );
        assert!(tasks.iter().all(|task| !task.params().group_attack));
    }

    #[test]
    fn alive_units_are_struck_without_markers() {
        let (outcome, tasks) = build(armor_depot(), &strike_waypoint(&[]));

        assert_eq!(outcome.appended(), 2);
        assert_eq!(
            bombing_points(&tasks),
            [Point3D::new(1.0, 0.0, 0.0), Point3D::new(3.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn building_is_struck_once_as_a_group() {
        let factory = Target::GroundObject(
            GroundObject::new(
                "Factory",
                GroundObjectCategory::Factory,
                Point3D::new(5.0, 5.0, 0.0),
                Vec::new(),
            )
        );

        let (outcome, tasks) = build(factory, &strike_waypoint(&[]));

        assert_eq!(outcome, BuildOutcome::Complete(1));
        assert_eq!(bombing_points(&tasks), [Point3D::new(5.0, 5.0, 0.0)]);
        assert!(tasks.as_slice()[0].params().group_attack);
    }

    #[test]
    fn airfield_without_markers_is_struck_at_its_position() {
        let airfield = Target::Airfield(
            ControlPoint::new("Kutaisi", Point3D::new(7.0, 8.0, 0.0))
        );

        let (_, tasks) = build(airfield, &strike_waypoint(&[]));

        assert_eq!(bombing_points(&tasks), [Point3D::new(7.0, 8.0, 0.0)]);
    }

    #[test]
    fn wiped_out_target_without_markers_is_skipped() {
        let wiped_out = Target::GroundObject(
            GroundObject::new(
                "Depot",
                GroundObjectCategory::Armor,
                Point3D::default(),
                vec![
                    TargetGroup::new(
                        "tanks",
                        vec![
                            TargetUnit::new("T-72 1", Point3D::default())
                                .destroyed(),
                        ]
                    ),
                ],
            )
        );

        let (outcome, tasks) = build(wiped_out, &strike_waypoint(&[]));

        assert!(tasks.is_empty());
        assert!(outcome.is_degraded());
        assert_eq!(
            outcome,
            BuildOutcome::Skipped(TaskBuildError::NoAimPoints {
                mission: MissionKind::Strike,
                target: "Depot".to_string(),
            })
        );
    }

    #[test]
    fn front_line_is_not_a_strike_target() {
        let front_line = Target::FrontLine(
            FrontLine::new("Kutaisi-Senaki", Point3D::default())
        );

        let (outcome, tasks) = build(front_line, &strike_waypoint(&[]));

        assert!(tasks.is_empty());
        assert_eq!(
            outcome,
            BuildOutcome::Skipped(TaskBuildError::WrongTargetVariant {
                mission: MissionKind::Strike,
                found: TargetKind::FrontLine,
            })
        );
    }
}
