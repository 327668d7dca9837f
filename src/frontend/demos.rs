use crate::backend::mathphysics::Point3D;
use crate::backend::package::StrikePackage;
use crate::backend::scenario::{ScenarioGroup, ScenarioRegistry};
use crate::backend::target::{
    Convoy, GroundObject, GroundObjectCategory, Target, TargetGroup, TargetUnit
};
use crate::backend::waypoint::{
    FlightWaypoint, FlightWaypointBuilder, FlightWaypointType, MissionKind,
    StrikeTargetMarker
};

use super::plan::MissionPlan;


const HOME_BASE: Point3D      = Point3D::new(0.0, 0.0, 0.0);
const INGRESS_POINT: Point3D  = Point3D::new(40_000.0, 10_000.0, 6_000.0);
const SAM_SITE: Point3D       = Point3D::new(60_000.0, 15_000.0, 0.0);
const FACTORY: Point3D        = Point3D::new(55_000.0, -5_000.0, 0.0);
const CONVOY_POSITION: Point3D = Point3D::new(50_000.0, 20_000.0, 0.0);


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Dead,
    Sead,
    Bai,
    Strike,
    // A package whose scenario lost a group, next to a package that targets
    // the wrong kind of objective.
    Degraded,
}

impl Demo {
    #[must_use]
    pub fn plan(&self) -> MissionPlan {
        match self {
            Self::Dead     => MissionPlan::new(
                full_sam_scenario(),
                vec![sam_package("DEAD", MissionKind::Dead)]
            ),
            Self::Sead     => MissionPlan::new(
                full_sam_scenario(),
                vec![sam_package("SEAD", MissionKind::Sead)]
            ),
            Self::Bai      => MissionPlan::new(
                ScenarioRegistry::from([ScenarioGroup::new("Supply column")]),
                vec![convoy_package()]
            ),
            Self::Strike   => MissionPlan::new(
                ScenarioRegistry::new(),
                vec![factory_package()]
            ),
            Self::Degraded => MissionPlan::new(
                ScenarioRegistry::from([
                    ScenarioGroup::new("SA-2 search radar"),
                    ScenarioGroup::new("SA-2 launchers"),
                    ScenarioGroup::new("Supply column"),
                ]),
                vec![
                    sam_package("DEAD", MissionKind::Dead),
                    StrikePackage::new(
                        "DEAD on convoy",
                        convoy_target(),
                        route(MissionKind::Dead, &[])
                    ),
                ]
            ),
        }
    }
}


fn sam_site() -> Target {
    let radar = TargetGroup::new(
        "SA-2 search radar",
        vec![
            TargetUnit::new("P-19", SAM_SITE).with_emitter(),
            TargetUnit::new("SNR-75", SAM_SITE + Point3D::new(50.0, 0.0, 0.0))
                .with_emitter(),
        ]
    );
    let launchers = TargetGroup::new(
        "SA-2 launchers",
        (0..3)
            .map(|index| {
                TargetUnit::new(
                    &format!("S-75 launcher {}", index + 1),
                    SAM_SITE + Point3D::new(0.0, 100.0 * index as f32, 0.0)
                )
            })
            .collect()
    );
    let aaa = TargetGroup::new(
        "SA-2 AAA",
        vec![TargetUnit::new("ZU-23", SAM_SITE + Point3D::new(-80.0, 0.0, 0.0))]
    );

    Target::GroundObject(
        GroundObject::new(
            "SA-2 site",
            GroundObjectCategory::AirDefense,
            SAM_SITE,
            vec![radar, launchers, aaa],
        )
    )
}

fn full_sam_scenario() -> ScenarioRegistry {
    ScenarioRegistry::from([
        ScenarioGroup::new("SA-2 search radar"),
        ScenarioGroup::new("SA-2 launchers"),
        ScenarioGroup::new("SA-2 AAA"),
    ])
}

fn convoy_target() -> Target {
    Target::Convoy(Convoy::new("Supply column", CONVOY_POSITION))
}

fn route(mission: MissionKind, markers: &[StrikeTargetMarker]) -> Vec<FlightWaypoint> {
    vec![
        FlightWaypointBuilder::new()
            .set_waypoint_type(FlightWaypointType::TakeOff)
            .set_position(HOME_BASE)
            .build(),
        FlightWaypointBuilder::new()
            .set_name("INGRESS")
            .set_waypoint_type(FlightWaypointType::Ingress(mission))
            .set_position(INGRESS_POINT)
            .set_targets(markers)
            .build(),
        FlightWaypointBuilder::new()
            .set_waypoint_type(FlightWaypointType::Egress)
            .set_position(INGRESS_POINT)
            .build(),
        FlightWaypointBuilder::new()
            .set_waypoint_type(FlightWaypointType::Landing)
            .set_position(HOME_BASE)
            .build(),
    ]
}

fn sam_package(name: &str, mission: MissionKind) -> StrikePackage {
    StrikePackage::new(name, sam_site(), route(mission, &[]))
}

fn convoy_package() -> StrikePackage {
    StrikePackage::new("BAI", convoy_target(), route(MissionKind::Bai, &[]))
}

fn factory_package() -> StrikePackage {
    let markers = [
        StrikeTargetMarker::new("Assembly hall", FACTORY),
        StrikeTargetMarker::new(
            "Warehouse",
            FACTORY + Point3D::new(120.0, 40.0, 0.0)
        ),
    ];
    let factory = Target::GroundObject(
        GroundObject::new(
            "Tank factory",
            GroundObjectCategory::Factory,
            FACTORY,
            Vec::new(),
        )
    );

    StrikePackage::new(
        "Strike",
        factory,
        route(MissionKind::Strike, &markers)
    )
}
