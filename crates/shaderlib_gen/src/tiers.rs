//! Tier Merger
//!
//! Applies the base manifest and then, when present, the override manifest to
//! one shared [`ShaderCatalog`]. Because catalog insertion is last-write-wins,
//! override entries replace base entries with the same key and everything
//! else passes through.

use std::fmt;
use std::path::Path;

use crate::catalog::ShaderCatalog;
use crate::errors::{Result, ShaderLibError};
use crate::manifest::apply_manifest;

/// Precedence level of a manifest, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Engine shaders. Mandatory.
    Base,
    /// Game shaders. Optional, wins over [`Tier::Base`].
    Override,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Override => f.write_str("override"),
        }
    }
}

/// Builds the merged catalog for one generator run.
///
/// The base manifest must exist. An override manifest path whose file does
/// not exist is skipped without error.
pub fn merge_tiers(base: &Path, override_manifest: Option<&Path>) -> Result<ShaderCatalog> {
    if !base.exists() {
        return Err(ShaderLibError::MissingManifest(base.to_path_buf()));
    }

    let mut catalog = ShaderCatalog::new();
    apply_tier(Tier::Base, base, &mut catalog)?;

    if let Some(path) = override_manifest {
        if path.exists() {
            apply_tier(Tier::Override, path, &mut catalog)?;
        } else {
            log::info!(
                "No {} shader definition at {}, skipping tier",
                Tier::Override,
                path.display()
            );
        }
    }

    Ok(catalog)
}

fn apply_tier(tier: Tier, path: &Path, catalog: &mut ShaderCatalog) -> Result<()> {
    let summary = apply_manifest(path, catalog)?;
    log::debug!(
        "Applied {tier} tier {}: {} shaders, {} include sources",
        path.display(),
        summary.shaders,
        summary.include_sources
    );
    Ok(())
}
