//! Source and Shader Tables
//!
//! [`ShaderCatalog`] is the accumulator threaded through every tier. Both
//! tables are ordered maps so the generated unit is byte-for-byte
//! reproducible for the same inputs.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Relative source path (`/`-separated) → text content.
pub type SourceTable = BTreeMap<String, String>;

/// Shader name → [`ShaderEntry`].
pub type ShaderTable = BTreeMap<String, ShaderEntry>;

/// A named vertex/fragment pair. Both paths are keys of the [`SourceTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderEntry {
    pub name: String,
    pub vertex_path: String,
    pub fragment_path: String,
}

impl ShaderEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        vertex_path: impl Into<String>,
        fragment_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
        }
    }
}

/// Accumulated tables of a single generator run.
///
/// Insertion is last-write-wins by key for both tables, which is what gives
/// the override tier precedence over the base tier.
#[derive(Debug, Clone, Default)]
pub struct ShaderCatalog {
    sources: SourceTable,
    shaders: ShaderTable,
    /// Every file and directory read while filling the tables.
    dependencies: BTreeSet<PathBuf>,
}

impl ShaderCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    #[inline]
    #[must_use]
    pub fn shaders(&self) -> &ShaderTable {
        &self.shaders
    }

    #[must_use]
    pub fn source(&self, path: &str) -> Option<&str> {
        self.sources.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn shader(&self, name: &str) -> Option<&ShaderEntry> {
        self.shaders.get(name)
    }

    /// Sets or replaces the content stored under `path`.
    ///
    /// Returns the previous content if the key was already present.
    pub fn insert_source(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<String> {
        let path = path.into();
        let previous = self.sources.insert(path.clone(), content.into());
        if previous.is_some() {
            log::debug!("Source \"{path}\" replaced by a later definition");
        }
        previous
    }

    /// Merges a collected table into this one, later keys winning.
    pub fn extend_sources(&mut self, table: SourceTable) {
        for (path, content) in table {
            self.insert_source(path, content);
        }
    }

    /// Sets or replaces the shader stored under `entry.name`.
    pub fn insert_shader(&mut self, entry: ShaderEntry) -> Option<ShaderEntry> {
        let previous = self.shaders.insert(entry.name.clone(), entry);
        if let Some(previous) = &previous {
            log::debug!("Shader \"{}\" replaced by a later definition", previous.name);
        }
        previous
    }

    /// Records a filesystem input of this run.
    pub fn track(&mut self, path: impl AsRef<Path>) {
        self.dependencies.insert(path.as_ref().to_path_buf());
    }

    #[must_use]
    pub fn dependencies(&self) -> &BTreeSet<PathBuf> {
        &self.dependencies
    }

    /// Shader paths that have no matching source entry.
    ///
    /// Empty after every successful run; a non-empty result means the
    /// tables were assembled by hand inconsistently.
    #[must_use]
    pub fn dangling_shader_paths(&self) -> Vec<&str> {
        self.shaders
            .values()
            .flat_map(|entry| [entry.vertex_path.as_str(), entry.fragment_path.as_str()])
            .filter(|path| !self.sources.contains_key(*path))
            .collect()
    }

    #[must_use]
    pub fn into_tables(self) -> (SourceTable, ShaderTable) {
        (self.sources, self.shaders)
    }
}
