use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use statcard::options::parse_key_list;
use statcard::{CardWidth, RenderOptions, StatsRecord};

/// Render a GitHub stats card from a JSON stats record.
#[derive(Parser, Debug)]
#[command(name = "statcard", version, about)]
struct Cli {
    /// JSON file holding the stats record
    #[arg(long)]
    stats: PathBuf,

    /// JSON file holding render options; flags below override it
    #[arg(long)]
    options: Option<PathBuf>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    theme: Option<String>,

    #[arg(long)]
    locale: Option<String>,

    /// Comma-separated rows to hide
    #[arg(long)]
    hide: Option<String>,

    /// Comma-separated optional rows to show
    #[arg(long)]
    show: Option<String>,

    #[arg(long)]
    show_icons: bool,

    #[arg(long)]
    hide_rank: bool,

    #[arg(long)]
    card_width: Option<String>,

    /// Omit keyframe animations so output is stable across runs
    #[arg(long)]
    deterministic: bool,
}

fn load_options(cli: &Cli) -> Result<RenderOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse options file {}", path.display()))?
        }
        None => RenderOptions::default(),
    };

    if let Some(theme) = &cli.theme {
        options.theme = Some(theme.clone());
    }
    if let Some(locale) = &cli.locale {
        options.locale = Some(locale.clone());
    }
    if let Some(hide) = &cli.hide {
        options.hide = parse_key_list(hide);
    }
    if let Some(show) = &cli.show {
        options.show = parse_key_list(show);
    }
    if let Some(width) = &cli.card_width {
        options.card_width = Some(CardWidth::Text(width.clone()));
    }
    options.show_icons |= cli.show_icons;
    options.hide_rank |= cli.hide_rank;
    options.deterministic |= cli.deterministic;

    Ok(options)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.stats)
        .with_context(|| format!("Failed to read stats file {}", cli.stats.display()))?;
    let stats: StatsRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse stats file {}", cli.stats.display()))?;
    let options = load_options(&cli)?;

    let svg = statcard::render(&stats, &options).context("Failed to render stats card")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Generated {} successfully.", path.display());
        }
        None => print!("{svg}"),
    }

    Ok(())
}
