//! Code Emitter
//!
//! Serializes a [`ShaderCatalog`] into a single generated compilation unit
//! using the minijinja template engine. Templates are embedded in the binary
//! with `rust-embed`.
//!
//! ## Output flavours
//!
//! | Flavour | File | Runtime surface |
//! |---------|------|-----------------|
//! | [`OutputLanguage::Rust`] | `shader_lib.rs` | `ShaderLib` registry object |
//! | [`OutputLanguage::Cpp`]  | `ShaderLib.cpp` | `ShaderLibInitialize` + lookups over globals |
//!
//! Every string placed in the unit goes through [`escape_literal`].

use std::fmt;
use std::str::FromStr;

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use rust_embed::RustEmbed;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::ShaderCatalog;
use crate::errors::Result;

#[derive(RustEmbed)]
#[folder = "templates"]
struct UnitTemplates;

/// Escapes `input` for use inside a double-quoted string literal.
///
/// Replacements are applied in a fixed order, backslash first so that the
/// backslashes introduced by later replacements are not doubled again:
///
/// | Input | Output |
/// |-------|--------|
/// | `\`   | `\\`   |
/// | LF    | `\n`   |
/// | CR    | `\r`   |
/// | `"`   | `\"`   |
/// | `'`   | `\'`   |
///
/// Everything else, including other control characters, is copied verbatim.
#[must_use]
pub fn escape_literal(input: &str) -> String {
    input
        .replace('\\', r"\\")
        .replace('\n', r"\n")
        .replace('\r', r"\r")
        .replace('"', r#"\""#)
        .replace('\'', r"\'")
}

/// Target language of the generated unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputLanguage {
    #[default]
    Rust,
    Cpp,
}

impl OutputLanguage {
    /// Fixed file name of the unit inside the output directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Rust => "shader_lib.rs",
            Self::Cpp => "ShaderLib.cpp",
        }
    }

    fn template_name(self) -> &'static str {
        match self {
            Self::Rust => "shader_lib.rs.j2",
            Self::Cpp => "ShaderLib.cpp.j2",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rust => f.write_str("rust"),
            Self::Cpp => f.write_str("cpp"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output language \"{0}\" (expected \"rust\" or \"cpp\")")]
pub struct ParseLanguageError(String);

impl FromStr for OutputLanguage {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

fn template_loader(name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    let Some(file) = UnitTemplates::get(name) else {
        return Ok(None);
    };
    match String::from_utf8(file.data.into_owned()) {
        Ok(source) => Ok(Some(source)),
        Err(e) => Err(minijinja::Error::new(
            ErrorKind::TemplateNotFound,
            format!("template {name} is not UTF-8: {e}"),
        )),
    }
}

#[derive(Serialize)]
struct SourceContext {
    path: String,
    content: String,
}

#[derive(Serialize)]
struct ShaderContext {
    name: String,
    vertex: String,
    fragment: String,
}

#[derive(Serialize)]
struct UnitContext {
    generator: &'static str,
    sources: Vec<SourceContext>,
    shaders: Vec<ShaderContext>,
}

impl UnitContext {
    fn from_catalog(catalog: &ShaderCatalog) -> Self {
        let sources = catalog
            .sources()
            .iter()
            .map(|(path, content)| SourceContext {
                path: escape_literal(path),
                content: escape_literal(content),
            })
            .collect();
        let shaders = catalog
            .shaders()
            .values()
            .map(|entry| ShaderContext {
                name: escape_literal(&entry.name),
                vertex: escape_literal(&entry.vertex_path),
                fragment: escape_literal(&entry.fragment_path),
            })
            .collect();

        Self {
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")),
            sources,
            shaders,
        }
    }
}

/// Renders catalogs into generated units.
pub struct CodeEmitter {
    env: Environment<'static>,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEmitter {
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(template_loader);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Values are pre-escaped with `escape_literal`.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Renders the full unit for `catalog` in the given flavour.
    pub fn emit(&self, catalog: &ShaderCatalog, language: OutputLanguage) -> Result<String> {
        let template = self.env.get_template(language.template_name())?;
        let ctx = UnitContext::from_catalog(catalog);
        let source = template.render(&ctx)?;
        log::debug!(
            "Emitted {language} unit: {} sources, {} shaders, {} bytes",
            ctx.sources.len(),
            ctx.shaders.len(),
            source.len()
        );
        Ok(source)
    }
}
