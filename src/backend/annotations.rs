use log::debug;
use serde::Serialize;

use super::mathphysics::{Point3D, Position};
use super::waypoint::{FlightWaypoint, StrikeTargetMarker};


#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialWaypoint {
    waypoint_name: String,
    label: String,
    position: Point3D,
}

impl SpecialWaypoint {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn waypoint_name(&self) -> &str {
        &self.waypoint_name
    }
}


/// Points that end up as extra steerpoints or kneeboard entries of a mission.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MissionAnnotations {
    special_waypoints: Vec<SpecialWaypoint>,
}

impl MissionAnnotations {
    #[must_use]
    pub fn new() -> Self {
        Self { special_waypoints: Vec::new() }
    }

    /// Returns the number of newly registered special waypoints. A marker
    /// already registered for the same waypoint is not added again.
    pub fn register_special_waypoints(
        &mut self,
        waypoint: &FlightWaypoint,
        markers: &[StrikeTargetMarker],
    ) -> usize {
        let mut registered = 0;

        for marker in markers {
            let special_waypoint = SpecialWaypoint {
                waypoint_name: waypoint.name().to_string(),
                label: marker.name().to_string(),
                position: *marker.position(),
            };

            if self.special_waypoints.contains(&special_waypoint) {
                continue;
            }

            debug!(
                "Waypoint {}: special waypoint {} at {}",
                waypoint.name(),
                marker.name(),
                marker.position()
            );

            self.special_waypoints.push(special_waypoint);
            registered += 1;
        }

        registered
    }

    #[must_use]
    pub fn special_waypoints(&self) -> &[SpecialWaypoint] {
        &self.special_waypoints
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::waypoint::FlightWaypointBuilder;

    use super::*;


    #[test]
    fn markers_are_registered_in_order() {
        let markers = [
            StrikeTargetMarker::new("Bunker 1", Point3D::new(1.0, 1.0, 0.0)),
            StrikeTargetMarker::new("Bunker 2", Point3D::new(2.0, 2.0, 0.0)),
        ];
        let waypoint = FlightWaypointBuilder::new()
            .set_name("INGRESS")
            .set_targets(&markers)
            .build();
        let mut annotations = MissionAnnotations::new();

        let registered = annotations.register_special_waypoints(
            &waypoint,
            waypoint.targets()
        );

        let labels: Vec<&str> = annotations
            .special_waypoints()
            .iter()
            .map(SpecialWaypoint::label)
            .collect();

        assert_eq!(registered, 2);
        assert_eq!(labels, ["Bunker 1", "Bunker 2"]);
        assert_eq!(
            annotations.special_waypoints()[0].waypoint_name(),
            "INGRESS"
        );
    }

    #[test]
    fn registering_the_same_markers_again_adds_nothing() {
        let markers = [
            StrikeTargetMarker::new("Bunker 1", Point3D::new(1.0, 1.0, 0.0)),
        ];
        let waypoint = FlightWaypointBuilder::new()
            .set_name("INGRESS")
            .set_targets(&markers)
            .build();
        let mut annotations = MissionAnnotations::new();

        let first = annotations.register_special_waypoints(
            &waypoint,
            waypoint.targets()
        );
        let second = annotations.register_special_waypoints(
            &waypoint,
            waypoint.targets()
        );

        assert_eq!((first, second), (1, 0));
        assert_eq!(annotations.special_waypoints().len(), 1);
    }
}
