//! # shaderlib_gen
//!
//! Build-time generator that embeds shader source trees into a single
//! compilation unit.
//!
//! ## Pipeline
//!
//! ```text
//! engine shaders.json ─┐
//!                      ├─ merge_tiers ─▶ ShaderCatalog ─▶ CodeEmitter ─▶ shader_lib.rs
//! game shaders.json  ──┘   (override wins by key)
//! ```
//!
//! - [`collector`]: recursive directory reader
//! - [`manifest`]: `shaders.json` schema and application
//! - [`tiers`]: base/override precedence
//! - [`emitter`]: escaping and template rendering
//! - [`generator`]: configuration and atomic output
//!
//! ## Build script usage
//!
//! ```rust,ignore
//! use shaderlib_gen::{GeneratorConfig, generate_for_build_script};
//!
//! fn main() -> anyhow::Result<()> {
//!     let out_dir = std::env::var("OUT_DIR")?;
//!     let config = GeneratorConfig::new("shaders/engine", out_dir)
//!         .with_game_shaders("shaders/game");
//!     generate_for_build_script(&config)?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod collector;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod manifest;
pub mod tiers;

pub use catalog::{ShaderCatalog, ShaderEntry, ShaderTable, SourceTable};
pub use emitter::{CodeEmitter, OutputLanguage, escape_literal};
pub use errors::{Result, ShaderLibError};
pub use generator::{GeneratedUnit, GeneratorConfig, generate, generate_for_build_script};
pub use manifest::{MANIFEST_FILE_NAME, Manifest, apply_manifest};
pub use tiers::{Tier, merge_tiers};
