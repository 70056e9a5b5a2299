use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use redocx::batch::run_batch;
use redocx::config::Config;
use redocx::preflight;
use redocx::rephrase::OllamaParaphraser;

#[derive(Parser)]
#[command(
    name = "redocx",
    version,
    about = "Rephrases every paragraph of the .docx files in a directory while preserving formatting"
)]
struct Cli {
    /// Directory scanned for input .docx files
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving rephrased documents
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Path to a redocx.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.input_dir {
        config.input_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    if let Err(err) = preflight::check_backend(&config.backend).await {
        eprintln!("Error: {err}");
        eprintln!();
        eprintln!("To set up the generation backend:");
        eprintln!("1. Install and start an Ollama-compatible server:");
        eprintln!("   ollama serve");
        eprintln!("2. Pull the configured model:");
        eprintln!("   ollama pull {}", config.backend.model);
        eprintln!("3. Then run redocx again.");
        std::process::exit(1);
    }

    println!(
        "Using generation backend at {} (model: {})",
        config.backend.endpoint, config.backend.model
    );

    let paraphraser = OllamaParaphraser::from_config(&config.backend)?;
    run_batch(&config, &paraphraser).await?;

    Ok(())
}
