//! Generator Entry Point
//!
//! Ties the pipeline together: merge tiers, render the unit, write it.
//! Rendering happens fully in memory and the result is written to a sibling
//! temporary file that is renamed over the final path, so a failed run never
//! leaves a truncated or partial unit behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::emitter::{CodeEmitter, OutputLanguage};
use crate::errors::{Result, ShaderLibError};
use crate::manifest::MANIFEST_FILE_NAME;
use crate::tiers::merge_tiers;

/// Inputs of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the base-tier `shaders.json`.
    pub engine_shaders: PathBuf,
    /// Directory holding the optional override-tier `shaders.json`.
    pub game_shaders: Option<PathBuf>,
    /// Directory the unit is written to. Created if missing.
    pub source_out: PathBuf,
    pub language: OutputLanguage,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(engine_shaders: impl Into<PathBuf>, source_out: impl Into<PathBuf>) -> Self {
        Self {
            engine_shaders: engine_shaders.into(),
            game_shaders: None,
            source_out: source_out.into(),
            language: OutputLanguage::default(),
        }
    }

    #[must_use]
    pub fn with_game_shaders(mut self, dir: impl Into<PathBuf>) -> Self {
        self.game_shaders = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: OutputLanguage) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn base_manifest(&self) -> PathBuf {
        self.engine_shaders.join(MANIFEST_FILE_NAME)
    }

    #[must_use]
    pub fn override_manifest(&self) -> Option<PathBuf> {
        self.game_shaders
            .as_ref()
            .map(|dir| dir.join(MANIFEST_FILE_NAME))
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.source_out.join(self.language.file_name())
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub path: PathBuf,
    pub source_count: usize,
    pub shader_count: usize,
    dependencies: Vec<PathBuf>,
}

impl GeneratedUnit {
    /// Every manifest, source file and include directory the run read.
    #[must_use]
    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }
}

/// Runs the full pipeline and writes the unit to
/// [`GeneratorConfig::output_path`].
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedUnit> {
    let override_manifest = config.override_manifest();
    let catalog = merge_tiers(&config.base_manifest(), override_manifest.as_deref())?;
    debug_assert!(catalog.dangling_shader_paths().is_empty());

    let source = CodeEmitter::new().emit(&catalog, config.language)?;

    let path = config.output_path();
    write_atomically(&path, source.as_bytes())?;
    log::info!("Written shaderlib source file \"{}\"", path.display());

    let mut dependencies: Vec<PathBuf> = catalog.dependencies().iter().cloned().collect();
    // A game tier that appears later must trigger regeneration.
    if let Some(dir) = &config.game_shaders
        && dir.is_dir()
    {
        dependencies.push(dir.clone());
    }

    Ok(GeneratedUnit {
        path,
        source_count: catalog.sources().len(),
        shader_count: catalog.shaders().len(),
        dependencies,
    })
}

/// [`generate`] for use from a `build.rs`: also prints a
/// `cargo:rerun-if-changed` line for every input.
pub fn generate_for_build_script(config: &GeneratorConfig) -> Result<GeneratedUnit> {
    let unit = generate(config)?;
    for dependency in unit.dependencies() {
        println!("cargo:rerun-if-changed={}", dependency.display());
    }
    Ok(unit)
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ShaderLibError::io(dir, e))?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents).map_err(|e| ShaderLibError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ShaderLibError::io(path, e));
    }
    Ok(())
}
