use serde::{Deserialize, Serialize};

use super::target::Target;
use super::waypoint::FlightWaypoint;


/// Aircraft sharing one objective and one route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrikePackage {
    name: String,
    target: Target,
    route: Vec<FlightWaypoint>,
}

impl StrikePackage {
    #[must_use]
    pub fn new(name: &str, target: Target, route: Vec<FlightWaypoint>) -> Self {
        Self {
            name: name.to_string(),
            target,
            route,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn route(&self) -> &[FlightWaypoint] {
        &self.route
    }
}
