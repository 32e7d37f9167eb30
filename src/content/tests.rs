//! Content domain: tests for archetype parsing, validation, and the registry.

use std::path::Path;

use super::data::ArchetypeDef;
use super::loader::{load_archetypes, parse_data_file};
use super::registry::{ArchetypeRegistry, DEFAULT_ARCHETYPE_ID};
use super::validation::validate_tuning;
use crate::movement::MovementTuning;

fn archetype(id: &str, tuning: MovementTuning) -> ArchetypeDef {
    ArchetypeDef {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: String::new(),
        tuning,
    }
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_partial_tuning_keeps_defaults() {
    let ron = r#"(
        schema_version: 1,
        items: [
            (
                id: "floaty",
                name: "Floaty",
                tuning: (
                    gravity: 120.0,
                    max_fall_speed: 900.0,
                ),
            ),
        ],
    )"#;

    let defs = parse_data_file::<ArchetypeDef>(ron, "inline.ron").unwrap();
    assert_eq!(defs.len(), 1);

    let def = &defs[0];
    let defaults = MovementTuning::default();
    assert_eq!(def.id, "floaty");
    assert!(def.description.is_empty());
    assert_eq!(def.tuning.gravity, 120.0);
    assert_eq!(def.tuning.max_fall_speed, Some(900.0));
    assert_eq!(def.tuning.jump_velocity, defaults.jump_velocity);
    assert_eq!(def.tuning.max_dash_distance, defaults.max_dash_distance);
}

#[test]
fn test_parse_missing_tuning_uses_defaults() {
    let ron = r#"(schema_version: 1, items: [(id: "plain", name: "Plain")])"#;

    let defs = parse_data_file::<ArchetypeDef>(ron, "inline.ron").unwrap();
    assert_eq!(defs[0].tuning, MovementTuning::default());
}

#[test]
fn test_parse_explicit_none_disables_dash_cap() {
    let ron = r#"(
        schema_version: 1,
        items: [(id: "free", name: "Free", tuning: (max_dash_distance: None))],
    )"#;

    let defs = parse_data_file::<ArchetypeDef>(ron, "inline.ron").unwrap();
    assert_eq!(defs[0].tuning.max_dash_distance, None);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_data_file::<ArchetypeDef>("(schema_version: 1, items: [", "broken.ron")
        .unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_archetypes(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_archetypes_load_and_validate() {
    let defs = load_archetypes(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data").as_path())
        .unwrap();
    let (registry, rejected) = ArchetypeRegistry::from_defs(defs);

    assert!(rejected.is_empty(), "rejected: {:?}", rejected);
    assert!(registry.archetypes.contains_key(DEFAULT_ARCHETYPE_ID));
    assert_eq!(
        registry.archetypes[DEFAULT_ARCHETYPE_ID].tuning,
        MovementTuning::default()
    );
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning("runner", &MovementTuning::default()).is_empty());
}

#[test]
fn test_validation_flags_each_bad_field() {
    let tuning = MovementTuning {
        gravity: -1.0,
        jump_cut_factor: 1.5,
        dash_duration: 0.0,
        max_fall_speed: Some(0.0),
        ..Default::default()
    };

    let errors = validate_tuning("broken", &tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&"gravity"));
    assert!(fields.contains(&"jump_cut_factor"));
    assert!(fields.contains(&"dash_duration"));
    assert!(fields.contains(&"max_fall_speed"));
    assert!(errors.iter().all(|e| e.archetype_id == "broken"));
}

#[test]
fn test_validation_error_display() {
    let tuning = MovementTuning {
        decel: 0.0,
        ..Default::default()
    };
    let errors = validate_tuning("slippy", &tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Archetype 'slippy' has decel = 0, expected a value > 0"
    );
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_registry_has_default_archetype() {
    let registry = ArchetypeRegistry::builtin();
    assert_eq!(registry.archetypes.len(), 1);
    assert!(registry.archetypes.contains_key(DEFAULT_ARCHETYPE_ID));
}

#[test]
fn test_from_defs_skips_invalid_archetypes() {
    let bad = MovementTuning {
        max_speed: -10.0,
        ..Default::default()
    };
    let defs = vec![
        archetype("good", MovementTuning::default()),
        archetype("bad", bad),
    ];

    let (registry, rejected) = ArchetypeRegistry::from_defs(defs);
    assert!(registry.archetypes.contains_key("good"));
    assert!(!registry.archetypes.contains_key("bad"));
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field, "max_speed");
}

#[test]
fn test_summary_lists_sorted_ids() {
    let defs = vec![
        archetype("sprite", MovementTuning::default()),
        archetype("heavy", MovementTuning::default()),
    ];
    let (registry, _) = ArchetypeRegistry::from_defs(defs);
    assert_eq!(
        registry.summary(),
        "ArchetypeRegistry loaded 2 archetypes: heavy, sprite"
    );
}
