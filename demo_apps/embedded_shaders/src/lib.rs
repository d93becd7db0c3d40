//! Shader library generated from `shaders/engine` and `shaders/game` by the
//! build script.

#[allow(clippy::all, clippy::pedantic)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/shader_lib.rs"));
}

pub use generated::{ShaderLib, ShaderSources};

/// Creates and initializes the library, reporting each embedded file to
/// `on_register`.
pub fn load(mut on_register: impl FnMut(&str, &str)) -> ShaderLib {
    let mut lib = ShaderLib::new();
    lib.initialize(Some(&mut on_register));
    lib
}

/// Vertex and fragment source text of the shader called `name`.
#[must_use]
pub fn shader_source_pair<'a>(lib: &'a ShaderLib, name: &str) -> Option<(&'a str, &'a str)> {
    let sources = lib.get_required_sources(name)?;
    Some((
        lib.get_source(&sources.vertex)?,
        lib.get_source(&sources.fragment)?,
    ))
}
