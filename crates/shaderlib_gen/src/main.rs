use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use shaderlib_gen::{GeneratorConfig, OutputLanguage, generate};

#[derive(Parser)]
#[command(name = "compile_shaders")]
#[command(version, about = "Embed tiered shader sources into a generated shader library", long_about = None)]
struct Cli {
    /// Directory containing the engine (base tier) shaders.json
    #[arg(long, value_name = "DIR")]
    engine_shaders: PathBuf,

    /// Directory containing the game (override tier) shaders.json
    #[arg(long, value_name = "DIR")]
    game_shaders: Option<PathBuf>,

    /// Output directory for the generated unit
    #[arg(long, value_name = "DIR")]
    source_out: PathBuf,

    /// Generated unit language: "rust" or "cpp"
    #[arg(long, value_name = "LANG", default_value = "rust")]
    lang: OutputLanguage,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\x1B[31mERROR\x1B[0m: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(cli.engine_shaders, cli.source_out).with_language(cli.lang);
    if let Some(game_shaders) = cli.game_shaders {
        config = config.with_game_shaders(game_shaders);
    }

    let unit = generate(&config).context("Failed to generate shader library")?;
    log::info!(
        "Embedded {} sources and {} shaders",
        unit.source_count,
        unit.shader_count
    );
    Ok(())
}
