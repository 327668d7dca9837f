use std::collections::HashMap;
use std::collections::hash_map::Values;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};


pub type GroupId = usize;


static FREE_GROUP_ID: AtomicUsize = AtomicUsize::new(1);


fn generate_group_id() -> GroupId {
    FREE_GROUP_ID.fetch_add(1, Ordering::SeqCst)
}


/// Lookup of the groups materialized by scenario generation.
///
/// A missing name is not an error of the registry: the group may have been
/// destroyed or never generated.
pub trait ScenarioEntityRegistry {
    fn find_group(&self, name: &str) -> Option<&ScenarioGroup>;

    fn find_group_by_id(&self, id: GroupId) -> Option<&ScenarioGroup>;
}


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioGroup {
    id: GroupId,
    name: String,
}

impl ScenarioGroup {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_id(generate_group_id(), name)
    }

    #[must_use]
    pub fn with_id(id: GroupId, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }

    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}


#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ScenarioGroup>", into = "Vec<ScenarioGroup>")]
pub struct ScenarioRegistry(HashMap<String, ScenarioGroup>);

impl ScenarioRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    // A group generated twice under one name replaces the older one.
    pub fn add_group(&mut self, group: ScenarioGroup) {
        self.0.insert(group.name.clone(), group);
    }

    #[must_use]
    pub fn groups(&self) -> Values<'_, String, ScenarioGroup> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ScenarioEntityRegistry for ScenarioRegistry {
    fn find_group(&self, name: &str) -> Option<&ScenarioGroup> {
        self.0.get(name)
    }

    fn find_group_by_id(&self, id: GroupId) -> Option<&ScenarioGroup> {
        self.groups().find(|group| group.id() == id)
    }
}

impl From<Vec<ScenarioGroup>> for ScenarioRegistry {
    fn from(groups: Vec<ScenarioGroup>) -> Self {
        let hash_map = groups
            .into_iter()
            .map(|group| (group.name.clone(), group))
            .collect();

        Self(hash_map)
    }
}

impl<const N: usize> From<[ScenarioGroup; N]> for ScenarioRegistry {
    fn from(groups: [ScenarioGroup; N]) -> Self {
        Self::from(groups.to_vec())
    }
}

impl From<ScenarioRegistry> for Vec<ScenarioGroup> {
    fn from(registry: ScenarioRegistry) -> Self {
        let mut groups: Vec<ScenarioGroup> = registry.0
            .into_values()
            .collect();

        groups.sort_by_key(ScenarioGroup::id);

        groups
    }
}
