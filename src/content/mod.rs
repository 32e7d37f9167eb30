//! Content domain: movement archetypes loaded from RON at startup.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use registry::ArchetypeRegistry;

use loader::load_archetypes;
use registry::DEFAULT_ARCHETYPE_ID;

use bevy::prelude::*;
use std::path::Path;

const DATA_DIR: &str = "assets/data";

/// Archetype the player spawns with.
#[derive(Resource, Debug)]
pub struct SelectedArchetype {
    pub archetype_id: String,
}

impl Default for SelectedArchetype {
    fn default() -> Self {
        Self {
            archetype_id: DEFAULT_ARCHETYPE_ID.to_string(),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedArchetype>()
            .init_resource::<ArchetypeRegistry>()
            .add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let registry = match load_archetypes(Path::new(DATA_DIR)) {
        Ok(defs) => {
            let (registry, rejected) = ArchetypeRegistry::from_defs(defs);
            for error in &rejected {
                warn!("Skipping archetype: {}", error);
            }
            registry
        }
        Err(e) => {
            error!("{}", e);
            ArchetypeRegistry::builtin()
        }
    };

    let registry = if registry.archetypes.is_empty() {
        warn!("No usable archetypes loaded, falling back to built-in tuning");
        ArchetypeRegistry::builtin()
    } else {
        registry
    };

    info!("{}", registry.summary());
    commands.insert_resource(registry);
}
