use serde::Serialize;

use crate::backend::mathphysics::Meter;
use crate::backend::scenario::GroupId;

use super::{EmploymentParams, TaskAction, TaskRecord};


const ID_ATTACK_GROUP: &str = "AttackGroup";
const ID_BOMBING: &str      = "Bombing";


/// A task in the shape the mission file expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissionTask {
    id: &'static str,
    number: usize,
    enabled: bool,
    auto: bool,
    params: MissionTaskParams,
}

impl MissionTask {
    #[must_use]
    pub fn new(number: usize, task: &TaskRecord) -> Self {
        let id = match task.action() {
            TaskAction::AttackGroup { .. } => ID_ATTACK_GROUP,
            TaskAction::Bombing { .. }     => ID_BOMBING,
        };

        Self {
            id,
            number,
            enabled: true,
            auto: false,
            params: MissionTaskParams::from(task),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.id
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct MissionTaskParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    group_id: Option<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<Meter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<Meter>,
    weapon_type: u32,
    #[serde(flatten)]
    employment: EmploymentParams,
}

impl From<&TaskRecord> for MissionTaskParams {
    fn from(task: &TaskRecord) -> Self {
        let (group_id, x, y) = match task.action() {
            TaskAction::AttackGroup { group_id, .. } =>
                (Some(*group_id), None, None),
            TaskAction::Bombing { position, .. }     =>
                (None, Some(position.x), Some(position.y)),
        };

        Self {
            group_id,
            x,
            y,
            weapon_type: task.action().weapon_type().code(),
            employment: *task.params(),
        }
    }
}
