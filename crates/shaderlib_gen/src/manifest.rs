//! Shader Manifest
//!
//! A manifest (`shaders.json`) declares the include directories and the named
//! shaders of one tier. All paths are relative to the manifest's own
//! directory.
//!
//! ```json
//! {
//!     "include_dirs": ["include"],
//!     "shaders": {
//!         "unlit": { "vertex": "unlit.vert", "fragment": "unlit.frag" }
//!     }
//! }
//! ```
//!
//! Unknown fields are rejected, so a typo such as `"shader"` fails loudly
//! instead of producing an empty library.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{ShaderCatalog, ShaderEntry};
use crate::collector::collect_sources;
use crate::errors::{Result, ShaderLibError};

/// Fixed file name of a tier manifest inside its shader directory.
pub const MANIFEST_FILE_NAME: &str = "shaders.json";

/// On-disk manifest schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directories walked in full, in declaration order.
    #[serde(default)]
    pub include_dirs: Vec<String>,
    /// Named shaders. `None` when the field is absent, which is an error at
    /// apply time.
    #[serde(default)]
    pub shaders: Option<BTreeMap<String, ShaderDecl>>,
}

/// A `{ "vertex": ..., "fragment": ... }` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderDecl {
    pub vertex: String,
    pub fragment: String,
}

impl Manifest {
    /// Parses and schema-checks a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ShaderLibError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| ShaderLibError::MalformedManifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What a single manifest contributed to the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    pub include_sources: usize,
    pub shaders: usize,
}

/// Loads the manifest at `path` and merges its sources and shaders into
/// `catalog`.
///
/// Include directories are applied first, in declared order, so a path that
/// appears in two of them keeps the later one. Shader files are then read
/// directly and stored under the path exactly as written in the manifest.
/// The first unreadable shader file aborts the whole manifest.
pub fn apply_manifest(path: &Path, catalog: &mut ShaderCatalog) -> Result<ManifestSummary> {
    let manifest = Manifest::load(path)?;
    catalog.track(path);

    let Some(shaders) = manifest.shaders else {
        return Err(ShaderLibError::NoShadersDeclared(path.to_path_buf()));
    };
    if shaders.is_empty() {
        log::warn!("{} declares an empty shader list", path.display());
    }

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut summary = ManifestSummary::default();

    for include_dir in &manifest.include_dirs {
        let dir = base_dir.join(include_dir);
        let table = collect_sources(&dir)?;
        log::debug!(
            "Include directory \"{}\" provided {} sources",
            dir.display(),
            table.len()
        );
        for key in table.keys() {
            catalog.track(dir.join(key));
        }
        catalog.track(&dir);
        summary.include_sources += table.len();
        catalog.extend_sources(table);
    }

    for (name, decl) in shaders {
        for rel_path in [&decl.vertex, &decl.fragment] {
            let file = base_dir.join(rel_path);
            let content = fs::read_to_string(&file).map_err(|source| {
                ShaderLibError::UnresolvableShaderSource {
                    shader: name.clone(),
                    manifest: path.to_path_buf(),
                    file: file.clone(),
                    source,
                }
            })?;
            catalog.track(&file);
            catalog.insert_source(rel_path.as_str(), content);
        }
        catalog.insert_shader(ShaderEntry::new(name, decl.vertex, decl.fragment));
        summary.shaders += 1;
    }

    Ok(summary)
}
