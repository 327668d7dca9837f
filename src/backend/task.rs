use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::mathphysics::Point3D;
use super::scenario::GroupId;

pub use wire::MissionTask;


pub mod wire;


const WEAPON_TYPE_AUTO: u32   = 1_073_741_822;
const WEAPON_TYPE_GUIDED: u32 = 268_402_702;


#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize
)]
pub enum WeaponType {
    #[default]
    #[display("Auto")]
    Auto,
    #[display("Guided")]
    Guided,
}

impl WeaponType {
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::Auto   => WEAPON_TYPE_AUTO,
            Self::Guided => WEAPON_TYPE_GUIDED,
        }
    }
}


/// Ordnance expenditure per attack pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expend {
    #[default]
    Auto,
    One,
    Two,
    Four,
    Quarter,
    Half,
    All,
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentParams {
    pub expend: Expend,
    pub attack_qty_limit: bool,
    pub direction_enabled: bool,
    pub altitude_enabled: bool,
    pub group_attack: bool,
}

impl EmploymentParams {
    // Spend everything on the group, no attack direction or altitude forced.
    #[must_use]
    pub const fn expend_all_on_group() -> Self {
        Self {
            expend: Expend::All,
            attack_qty_limit: false,
            direction_enabled: false,
            altitude_enabled: false,
            group_attack: true,
        }
    }

    #[must_use]
    pub const fn with_expend(mut self, expend: Expend) -> Self {
        self.expend = expend;
        self
    }

    #[must_use]
    pub const fn with_group_attack(mut self, group_attack: bool) -> Self {
        self.group_attack = group_attack;
        self
    }
}

impl Default for EmploymentParams {
    fn default() -> Self {
        Self::expend_all_on_group()
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TaskAction {
    AttackGroup {
        group_id: GroupId,
        weapon_type: WeaponType,
    },
    Bombing {
        position: Point3D,
        weapon_type: WeaponType,
    },
}

impl TaskAction {
    #[must_use]
    pub fn weapon_type(&self) -> WeaponType {
        match self {
            Self::AttackGroup { weapon_type, .. }
                | Self::Bombing { weapon_type, .. } => *weapon_type,
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    action: TaskAction,
    params: EmploymentParams,
}

impl TaskRecord {
    #[must_use]
    pub fn attack_group(
        group_id: GroupId,
        weapon_type: WeaponType,
        params: EmploymentParams,
    ) -> Self {
        Self {
            action: TaskAction::AttackGroup { group_id, weapon_type },
            params,
        }
    }

    #[must_use]
    pub fn bombing(
        position: Point3D,
        weapon_type: WeaponType,
        params: EmploymentParams,
    ) -> Self {
        Self {
            action: TaskAction::Bombing { position, weapon_type },
            params,
        }
    }

    #[must_use]
    pub fn action(&self) -> &TaskAction {
        &self.action
    }

    #[must_use]
    pub fn params(&self) -> &EmploymentParams {
        &self.params
    }

    #[must_use]
    pub fn target_group_id(&self) -> Option<GroupId> {
        match self.action {
            TaskAction::AttackGroup { group_id, .. } => Some(group_id),
            TaskAction::Bombing { .. }               => None,
        }
    }
}


/// Tasks of a single waypoint in execution order. Append only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList(Vec<TaskRecord>);

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, task: TaskRecord) {
        self.0.push(task);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TaskRecord] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_mission_tasks(&self) -> Vec<MissionTask> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, task)| MissionTask::new(index + 1, task))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<TaskRecord>> for TaskList {
    fn from(tasks: Vec<TaskRecord>) -> Self {
        Self(tasks)
    }
}
