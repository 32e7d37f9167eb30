//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ArchetypeRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Archetypes (archetypes.ron)
// ============================================================================

/// A named movement feel. Fields omitted from `tuning` keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArchetypeDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tuning: MovementTuning,
}
