use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::mathphysics::{Point3D, Position};


#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum TargetKind {
    #[display("GroundObject")]
    GroundObject,
    #[display("Convoy")]
    Convoy,
    #[display("Airfield")]
    Airfield,
    #[display("NavalControlPoint")]
    NavalControlPoint,
    #[display("FrontLine")]
    FrontLine,
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundObjectCategory {
    #[default]
    AirDefense,
    Ewr,
    Armor,
    Missile,
    Coastal,
    Ship,
    Ammo,
    Comms,
    Factory,
    Fuel,
    Oil,
    Power,
    Ware,
}

impl GroundObjectCategory {
    // Buildings are map objects rather than unit groups.
    #[must_use]
    pub fn is_building(&self) -> bool {
        matches!(
            self,
            Self::Ammo | Self::Comms | Self::Factory | Self::Fuel | Self::Oil
                | Self::Power | Self::Ware
        )
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetUnit {
    name: String,
    position: Point3D,
    #[serde(default = "alive_by_default")]
    alive: bool,
    #[serde(default)]
    emitter: bool,
}

fn alive_by_default() -> bool {
    true
}

impl TargetUnit {
    #[must_use]
    pub fn new(name: &str, position: Point3D) -> Self {
        Self {
            name: name.to_string(),
            position,
            alive: true,
            emitter: false,
        }
    }

    #[must_use]
    pub fn with_emitter(mut self) -> Self {
        self.emitter = true;
        self
    }

    #[must_use]
    pub fn destroyed(mut self) -> Self {
        self.alive = false;
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn is_emitter(&self) -> bool {
        self.emitter
    }
}

impl Position for TargetUnit {
    fn position(&self) -> &Point3D {
        &self.position
    }
}


/// A sub-target. Its name is the name of the group generated for it in the
/// scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetGroup {
    name: String,
    #[serde(default)]
    units: Vec<TargetUnit>,
}

impl TargetGroup {
    #[must_use]
    pub fn new(name: &str, units: Vec<TargetUnit>) -> Self {
        Self {
            name: name.to_string(),
            units,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alive_units(&self) -> impl Iterator<Item = &TargetUnit> {
        self.units
            .iter()
            .filter(|unit| unit.is_alive())
    }

    #[must_use]
    pub fn has_alive_emitter(&self) -> bool {
        self.alive_units().any(TargetUnit::is_emitter)
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundObject {
    name: String,
    #[serde(default)]
    category: GroundObjectCategory,
    position: Point3D,
    #[serde(default)]
    groups: Vec<TargetGroup>,
}

impl GroundObject {
    #[must_use]
    pub fn new(
        name: &str,
        category: GroundObjectCategory,
        position: Point3D,
        groups: Vec<TargetGroup>,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            position,
            groups,
        }
    }

    #[must_use]
    pub fn category(&self) -> GroundObjectCategory {
        self.category
    }

    #[must_use]
    pub fn groups(&self) -> &[TargetGroup] {
        &self.groups
    }

    #[must_use]
    pub fn strike_points(&self) -> Vec<Point3D> {
        self.groups
            .iter()
            .flat_map(TargetGroup::alive_units)
            .map(|unit| *unit.position())
            .collect()
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Convoy {
    name: String,
    position: Point3D,
}

impl Convoy {
    #[must_use]
    pub fn new(name: &str, position: Point3D) -> Self {
        Self { name: name.to_string(), position }
    }

    // The generated convoy group carries the convoy name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.name
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    name: String,
    position: Point3D,
}

impl ControlPoint {
    #[must_use]
    pub fn new(name: &str, position: Point3D) -> Self {
        Self { name: name.to_string(), position }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavalControlPoint {
    name: String,
    position: Point3D,
    carrier_group: String,
}

impl NavalControlPoint {
    #[must_use]
    pub fn new(name: &str, position: Point3D, carrier_group: &str) -> Self {
        Self {
            name: name.to_string(),
            position,
            carrier_group: carrier_group.to_string(),
        }
    }

    #[must_use]
    pub fn carrier_group(&self) -> &str {
        &self.carrier_group
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontLine {
    name: String,
    position: Point3D,
}

impl FrontLine {
    #[must_use]
    pub fn new(name: &str, position: Point3D) -> Self {
        Self { name: name.to_string(), position }
    }
}


/// Strategic objective of a strike package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Target {
    GroundObject(GroundObject),
    Convoy(Convoy),
    Airfield(ControlPoint),
    NavalControlPoint(NavalControlPoint),
    FrontLine(FrontLine),
}

impl Target {
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::GroundObject(_)      => TargetKind::GroundObject,
            Self::Convoy(_)            => TargetKind::Convoy,
            Self::Airfield(_)          => TargetKind::Airfield,
            Self::NavalControlPoint(_) => TargetKind::NavalControlPoint,
            Self::FrontLine(_)         => TargetKind::FrontLine,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::GroundObject(ground_object) => &ground_object.name,
            Self::Convoy(convoy)              => &convoy.name,
            Self::Airfield(control_point)     => &control_point.name,
            Self::NavalControlPoint(naval)    => &naval.name,
            Self::FrontLine(front_line)       => &front_line.name,
        }
    }
}

impl Position for Target {
    fn position(&self) -> &Point3D {
        match self {
            Self::GroundObject(ground_object) => &ground_object.position,
            Self::Convoy(convoy)              => &convoy.position,
            Self::Airfield(control_point)     => &control_point.position,
            Self::NavalControlPoint(naval)    => &naval.position,
            Self::FrontLine(front_line)       => &front_line.position,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    fn sam_site() -> GroundObject {
        GroundObject::new(
            "SAM site",
            GroundObjectCategory::AirDefense,
            Point3D::default(),
            vec![
                TargetGroup::new(
                    "SAM-A",
                    vec![
                        TargetUnit::new("SR", Point3D::new(1.0, 0.0, 0.0))
                            .with_emitter(),
                        TargetUnit::new("LN", Point3D::new(2.0, 0.0, 0.0))
                            .destroyed(),
                    ]
                ),
                TargetGroup::new(
                    "SAM-B",
                    vec![TargetUnit::new("AAA", Point3D::new(3.0, 0.0, 0.0))]
                ),
            ],
        )
    }


    #[test]
    fn groups_keep_insertion_order() {
        let ground_object = sam_site();

        let names: Vec<&str> = ground_object
            .groups()
            .iter()
            .map(TargetGroup::name)
            .collect();

        assert_eq!(names, ["SAM-A", "SAM-B"]);
    }

    #[test]
    fn destroyed_units_are_not_strike_points() {
        let strike_points = sam_site().strike_points();

        assert_eq!(
            strike_points,
            [Point3D::new(1.0, 0.0, 0.0), Point3D::new(3.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn emitter_detection() {
        let ground_object = sam_site();

        assert!(ground_object.groups()[0].has_alive_emitter());
        assert!(!ground_object.groups()[1].has_alive_emitter());
    }

    #[test]
    fn target_kind_is_displayed_by_variant_name() {
        let target = Target::Convoy(Convoy::new("Column", Point3D::default()));

        assert_eq!(target.kind().to_string(), "Convoy");
        assert_eq!(target.name(), "Column");
    }

    #[test]
    fn buildings_are_told_apart_from_unit_installations() {
        assert!(GroundObjectCategory::Factory.is_building());
        assert!(!GroundObjectCategory::AirDefense.is_building());
    }

    #[test]
    fn target_deserializes_from_tagged_json() {
        let json = r#"{
            "type": "GroundObject",
            "name": "SAM site",
            "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "groups": [{ "name": "SAM-A" }]
        }"#;

        let target: Target = serde_json::from_str(json)
            .expect("Failed to deserialize target");

        assert_eq!(target.kind(), TargetKind::GroundObject);
    }
}
