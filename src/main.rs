use anyhow::{Context, Result};
use cipherwrite_lib::services::config_store::{AppConfig, ConfigStore, OversizePolicy};
use cipherwrite_lib::services::input::{read_input_file, read_input_stream};
use cipherwrite_lib::services::report::Report;
use cipherwrite_lib::{init_logging, Analyzer, EXAMPLE_TEXT};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "cipherwrite",
    about = "Estimate how likely a text is AI-generated, with an explanation",
    version
)]
struct Cli {
    /// Text files to analyze (.txt, .md, .rtf); reads stdin if none provided
    files: Vec<PathBuf>,

    /// Analyze the built-in sample text
    #[arg(long, conflicts_with = "files")]
    example: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum characters analyzed per input
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Fail on oversized input instead of truncating it
    #[arg(long)]
    reject_oversized: bool,

    /// Config file (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn config_store(cli: &Cli) -> Result<ConfigStore> {
    match &cli.config {
        Some(path) => Ok(ConfigStore::from_file(path.clone())),
        None => ConfigStore::default_config_dir()
            .map(ConfigStore::new)
            .context("could not determine the user config directory; pass --config"),
    }
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(max) = cli.max_chars {
        config.detection.max_input_chars = max;
    }
    if cli.reject_oversized {
        config.detection.oversize_policy = OversizePolicy::Reject;
    }
    config
}

/// Collect (label, text) pairs from the example, the given files or stdin.
/// File and stdin text arrive trimmed.
fn collect_inputs(cli: &Cli) -> Result<Vec<(Option<String>, String)>> {
    if cli.example {
        return Ok(vec![(Some("example".to_string()), EXAMPLE_TEXT.to_string())]);
    }
    if cli.files.is_empty() {
        let input = read_input_stream(std::io::stdin().lock())?;
        return Ok(vec![(None, input)]);
    }
    cli.files
        .iter()
        .map(|path| {
            let text = read_input_file(path).with_context(|| format!("cannot analyze {}", path.display()))?;
            Ok((Some(path.display().to_string()), text))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = config_store(&cli)?;

    if cli.init_config {
        store.save(&AppConfig::default())?;
        println!("Wrote default config to {}", store.config_file().display());
        return Ok(());
    }

    let config = apply_overrides(store.load()?, &cli);
    init_logging(&config.logging);
    info!(config = %store.config_file().display(), "cipherwrite starting");

    let inputs = collect_inputs(&cli)?;
    let analyzer = Analyzer::new(config.detection);

    let mut reports = Vec::with_capacity(inputs.len());
    for (source, text) in inputs {
        let result = analyzer
            .analyze_in_background(text.clone())
            .await
            .with_context(|| format!("analysis failed for {}", source.as_deref().unwrap_or("stdin")))?;
        reports.push(Report::new(source, &text, result));
    }

    match cli.format {
        OutputFormat::Text => {
            let rendered: Vec<String> = reports.iter().map(Report::render_text).collect();
            println!("{}", rendered.join("\n\n"));
        }
        OutputFormat::Json => {
            let json = match reports.as_slice() {
                [single] => single.to_json()?,
                many => serde_json::to_string_pretty(many)?,
            };
            println!("{}", json);
        }
    }

    Ok(())
}
