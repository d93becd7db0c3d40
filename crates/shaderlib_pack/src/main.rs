use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shaderlib_pack::package_directory;

#[derive(Parser)]
#[command(name = "package_assets")]
#[command(version, about = "Pack an asset folder into a zip archive", long_about = None)]
struct Cli {
    /// Path to the folder to be packed
    #[arg(long, value_name = "DIR")]
    input: PathBuf,

    /// Path to the output archive file
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[\x1B[31;1mERROR\x1B[0m] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let summary = package_directory(&cli.input, &cli.output)?;
    log::info!(
        "{} files in {} directories",
        summary.files,
        summary.directories
    );
    Ok(())
}
