//! ArchetypeRegistry resource providing lookups for loaded movement archetypes.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::ArchetypeDef;
use super::validation::{ValidationError, validate_tuning};
use crate::movement::MovementTuning;

pub const DEFAULT_ARCHETYPE_ID: &str = "runner";

/// Movement archetypes by id.
#[derive(Resource, Debug, Default)]
pub struct ArchetypeRegistry {
    pub archetypes: HashMap<String, ArchetypeDef>,
}

impl ArchetypeRegistry {
    /// Registry holding only the built-in archetype, used when content fails to load.
    pub fn builtin() -> Self {
        let def = ArchetypeDef {
            id: DEFAULT_ARCHETYPE_ID.to_string(),
            name: "Runner".to_string(),
            description: "Built-in fallback tuning".to_string(),
            tuning: MovementTuning::default(),
        };
        Self {
            archetypes: HashMap::from([(def.id.clone(), def)]),
        }
    }

    /// Build a registry from loaded definitions. Archetypes whose tuning fails
    /// validation are left out; their errors are returned for logging.
    pub fn from_defs(defs: Vec<ArchetypeDef>) -> (Self, Vec<ValidationError>) {
        let mut registry = Self::default();
        let mut rejected = Vec::new();

        for def in defs {
            let errors = validate_tuning(&def.id, &def.tuning);
            if errors.is_empty() {
                registry.archetypes.insert(def.id.clone(), def);
            } else {
                rejected.extend(errors);
            }
        }

        (registry, rejected)
    }

    /// Returns a summary of loaded archetypes for logging.
    pub fn summary(&self) -> String {
        let mut ids: Vec<&str> = self.archetypes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        format!(
            "ArchetypeRegistry loaded {} archetypes: {}",
            ids.len(),
            ids.join(", ")
        )
    }
}
