use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::mathphysics::{Point3D, Position};
use super::task::{TaskList, TaskRecord};


#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    #[display("DEAD")]
    Dead,
    #[display("SEAD")]
    Sead,
    #[display("BAI")]
    Bai,
    #[display("Strike")]
    Strike,
}


#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize
)]
pub enum FlightWaypointType {
    #[display("TakeOff")]
    TakeOff,
    #[default]
    #[display("Nav")]
    Nav,
    #[display("Join")]
    Join,
    #[display("Ingress{_0}")]
    Ingress(MissionKind),
    #[display("Split")]
    Split,
    #[display("Egress")]
    Egress,
    #[display("Landing")]
    Landing,
}


/// A point of interest the flight has to know about at a waypoint, such as an
/// individual strike aim point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrikeTargetMarker {
    name: String,
    position: Point3D,
}

impl StrikeTargetMarker {
    #[must_use]
    pub fn new(name: &str, position: Point3D) -> Self {
        Self { name: name.to_string(), position }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Position for StrikeTargetMarker {
    fn position(&self) -> &Point3D {
        &self.position
    }
}


#[derive(Clone, Debug, Default)]
pub struct FlightWaypointBuilder {
    name: Option<String>,
    waypoint_type: Option<FlightWaypointType>,
    position: Option<Point3D>,
    targets: Option<Vec<StrikeTargetMarker>>,
    tasks: Option<TaskList>,
}

impl FlightWaypointBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            waypoint_type: None,
            position: None,
            targets: None,
            tasks: None,
        }
    }

    #[must_use]
    pub fn set_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn set_waypoint_type(
        mut self,
        waypoint_type: FlightWaypointType
    ) -> Self {
        self.waypoint_type = Some(waypoint_type);
        self
    }

    #[must_use]
    pub fn set_position(mut self, position: Point3D) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn set_targets(mut self, targets: &[StrikeTargetMarker]) -> Self {
        self.targets = Some(targets.to_vec());
        self
    }

    #[must_use]
    pub fn set_preset_tasks(mut self, tasks: &[TaskRecord]) -> Self {
        self.tasks = Some(TaskList::from(tasks.to_vec()));
        self
    }

    #[must_use]
    pub fn build(self) -> FlightWaypoint {
        let waypoint_type = self.waypoint_type.unwrap_or_default();

        FlightWaypoint {
            name: self.name.unwrap_or_else(|| waypoint_type.to_string()),
            waypoint_type,
            position: self.position.unwrap_or_default(),
            targets: self.targets.unwrap_or_default(),
            tasks: self.tasks.unwrap_or_default(),
        }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightWaypoint {
    name: String,
    waypoint_type: FlightWaypointType,
    position: Point3D,
    #[serde(default)]
    targets: Vec<StrikeTargetMarker>,
    // Tasks set up by earlier generators, kept ahead of compiled ones.
    #[serde(default)]
    tasks: TaskList,
}

impl FlightWaypoint {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn waypoint_type(&self) -> FlightWaypointType {
        self.waypoint_type
    }

    #[must_use]
    pub fn targets(&self) -> &[StrikeTargetMarker] {
        &self.targets
    }

    #[must_use]
    pub fn preset_tasks(&self) -> &TaskList {
        &self.tasks
    }
}

impl Position for FlightWaypoint {
    fn position(&self) -> &Point3D {
        &self.position
    }
}
