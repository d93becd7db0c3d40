//! # ShaderLib
//!
//! Umbrella crate for the shader library build tools.
//!
//! - [`codegen`]: merges the engine and game shader manifests and generates
//!   the embedded shader library unit
//! - [`pack`]: zips asset folders for distribution
//!
//! ```rust,ignore
//! use shaderlib::codegen::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig::new("engine/shaders", "target/generated")
//!     .with_game_shaders("game/shaders");
//! let unit = generate(&config)?;
//! println!("{} sources embedded", unit.source_count);
//! ```

pub mod codegen {
    pub use shaderlib_gen::*;
}

pub mod pack {
    pub use shaderlib_pack::*;
}

pub use shaderlib_gen::{GeneratorConfig, OutputLanguage, ShaderCatalog, ShaderLibError, generate};
pub use shaderlib_pack::{PackageError, package_directory};
