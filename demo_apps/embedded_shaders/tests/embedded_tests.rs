//! Embedded Shader Library Tests
//!
//! Tests for:
//! - Exact byte round-trip of escaped content through the Rust literal grammar
//! - Game tier overrides engine tier by key
//! - Registration callback sees every embedded file once, slash-prefixed
//! - Re-initialization replaces entries instead of duplicating them

use std::collections::BTreeMap;

use embedded_shaders::{ShaderLib, ShaderSources, load, shader_source_pair};

fn initialized() -> (ShaderLib, BTreeMap<String, String>) {
    let mut registered = BTreeMap::new();
    let lib = load(|path, content| {
        let previous = registered.insert(path.to_string(), content.to_string());
        assert!(previous.is_none(), "{path} registered twice");
    });
    (lib, registered)
}

// ============================================================================
// Round-Trip
// ============================================================================

#[test]
fn escaped_content_round_trips_exactly() {
    let (lib, _) = initialized();

    assert_eq!(
        lib.get_source("escapes.glsl"),
        Some(include_str!("../shaders/engine/include/escapes.glsl"))
    );
    assert_eq!(
        lib.get_source("lighting/lambert.glsl"),
        Some(include_str!("../shaders/engine/include/lighting/lambert.glsl"))
    );
    assert_eq!(
        lib.get_source("lit.frag"),
        Some(include_str!("../shaders/engine/lit.frag"))
    );
}

#[test]
fn escapes_fixture_contains_every_escaped_character() {
    let raw = include_str!("../shaders/engine/include/escapes.glsl");
    for needle in ["\\", "\n", "\r", "\"", "'", "\t"] {
        assert!(raw.contains(needle), "fixture lost {needle:?}");
    }
}

// ============================================================================
// Tier Override
// ============================================================================

#[test]
fn game_tier_overrides_engine_shader() {
    let (lib, _) = initialized();

    assert_eq!(
        lib.get_required_sources("unlit"),
        Some(&ShaderSources::new("unlit_hq.vert", "unlit.frag"))
    );
    let (vertex, fragment) = shader_source_pair(&lib, "unlit").unwrap();
    assert_eq!(vertex, include_str!("../shaders/game/unlit_hq.vert"));
    assert_eq!(fragment, include_str!("../shaders/game/unlit.frag"));
}

#[test]
fn engine_only_entries_pass_through() {
    let (lib, _) = initialized();

    assert_eq!(
        lib.get_required_sources("lit"),
        Some(&ShaderSources::new("lit.vert", "lit.frag"))
    );
    assert_eq!(
        lib.get_source("unlit.vert"),
        Some(include_str!("../shaders/engine/unlit.vert"))
    );
    assert_eq!(
        lib.get_source("common.glsl"),
        Some(include_str!("../shaders/game/include/common.glsl"))
    );
}

#[test]
fn game_only_shader_is_available() {
    let (lib, _) = initialized();
    assert!(shader_source_pair(&lib, "sprite").is_some());
}

#[test]
fn unknown_lookups_return_none() {
    let (lib, _) = initialized();
    assert!(lib.get_source("missing.glsl").is_none());
    assert!(lib.get_source("/unlit.vert").is_none());
    assert!(lib.get_required_sources("missing").is_none());
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn callback_sees_every_source_with_leading_slash() {
    let (lib, registered) = initialized();

    let mut paths: Vec<_> = lib.source_paths().map(|p| format!("/{p}")).collect();
    paths.sort();
    assert_eq!(registered.keys().cloned().collect::<Vec<_>>(), paths);
    assert_eq!(registered.len(), 10);
    assert_eq!(
        registered["/escapes.glsl"],
        include_str!("../shaders/engine/include/escapes.glsl")
    );
}

#[test]
fn initialize_without_callback_and_twice_is_idempotent() {
    let mut lib = ShaderLib::new();
    lib.initialize(None);
    let sources = lib.source_paths().count();
    let shaders = lib.shader_names().count();

    lib.initialize(None);

    assert_eq!(lib.source_paths().count(), sources);
    assert_eq!(lib.shader_names().count(), shaders);
    assert_eq!(shaders, 3);
}
