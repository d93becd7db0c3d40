//! Error Types
//!
//! Every failure in the generator is fatal: the run stops at the first error
//! and no generated unit is written.
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ShaderLibError>`.
//!
//! ```rust,ignore
//! use shaderlib_gen::errors::{Result, ShaderLibError};
//!
//! fn load() -> Result<()> {
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for shader library generation.
#[derive(Error, Debug)]
pub enum ShaderLibError {
    // ========================================================================
    // Manifest Errors
    // ========================================================================
    /// A required manifest file does not exist.
    #[error("Shader definition \"{}\" cannot be found", .0.display())]
    MissingManifest(PathBuf),

    /// The manifest has no `shaders` field.
    #[error("No shaders specified in {}", .0.display())]
    NoShadersDeclared(PathBuf),

    /// The manifest is not valid JSON or does not match the manifest schema.
    #[error("Malformed shader definition {}: {source}", .path.display())]
    MalformedManifest {
        /// Manifest file being parsed
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A declared vertex or fragment file could not be read.
    #[error(
        "Error loading shader \"{shader}\" from {}: cannot read {}: {source}",
        .manifest.display(),
        .file.display()
    )]
    UnresolvableShaderSource {
        /// Name of the shader entry
        shader: String,
        /// Manifest declaring the shader
        manifest: PathBuf,
        /// File that failed to load
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Filesystem Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error.
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // ========================================================================
    // Emission Errors
    // ========================================================================
    /// Template loading or rendering error.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ShaderLibError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Alias for `Result<T, ShaderLibError>`.
pub type Result<T> = std::result::Result<T, ShaderLibError>;
