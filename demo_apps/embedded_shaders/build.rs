use std::path::PathBuf;

use shaderlib_gen::{GeneratorConfig, generate_for_build_script};

fn main() -> anyhow::Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let shaders = manifest_dir.join("shaders");

    let config = GeneratorConfig::new(shaders.join("engine"), out_dir)
        .with_game_shaders(shaders.join("game"));
    generate_for_build_script(&config)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
