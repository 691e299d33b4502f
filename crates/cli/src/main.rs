use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gameboard::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "gameboard")]
#[command(about = "Geodesic gameboard corners, midpoints and flags")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the board from a YAML config, print tables and write the artifact
    Build {
        #[arg(long, default_value = "config.yml")]
        config: PathBuf,
        #[arg(long, default_value = "output.yml")]
        out: PathBuf,
        /// Artifact format; inferred from the --out extension when omitted
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Skip the human-readable tables
        #[arg(long)]
        quiet: bool,
        /// Also write <stem>.provenance.json (config source, edge ranking, flag bearings)
        #[arg(long)]
        provenance: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
    Csv,
}

impl Format {
    fn infer(path: &Path) -> Format {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            Some("csv") => Format::Csv,
            _ => Format::Yaml,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build {
            config,
            out,
            format,
            quiet,
            provenance,
        } => build(&config, &out, format, quiet, provenance),
        Action::Report => report(),
    }
}

fn build(
    config: &Path,
    out: &Path,
    format: Option<Format>,
    quiet: bool,
    with_provenance: bool,
) -> Result<()> {
    let format = format.unwrap_or_else(|| Format::infer(out));
    tracing::info!(config = %config.display(), out = %out.display(), ?format, "build");

    let config_text = std::fs::read_to_string(config)
        .with_context(|| format!("reading {}", config.display()))?;
    let cfg = BuildConfig::from_yaml_str(&config_text)
        .with_context(|| format!("loading {}", config.display()))?;
    let board = run(&cfg)?;
    let records = board.records();

    if !quiet {
        println!("Coordinates in Decimal Degrees:");
        println!("{}", render_decimal_degrees_table(&records));
        println!();
        println!("Coordinates in Decimal Minutes:");
        println!("{}", render_decimal_minutes_table(&records));
    }

    write_artifact(out, format, &records)?;
    tracing::info!(records = records.len(), out = %out.display(), "wrote artifact");

    if with_provenance {
        let format_name = format!("{format:?}").to_lowercase();
        let inputs = provenance::BuildInputs {
            config_path: config,
            config_text: &config_text,
            config: &cfg,
            format: &format_name,
        };
        let path = provenance::write_sidecar(out, &inputs, &board)?;
        tracing::info!(path = %path.display(), "wrote provenance");
    }
    Ok(())
}

/// Config → fully derived board. Nothing is written unless this succeeds.
fn run(cfg: &BuildConfig) -> Result<Gameboard> {
    tracing::info!(
        lat = cfg.start.lat,
        lon = cfg.start.lon,
        bearing = cfg.bearing,
        direction = %cfg.direction,
        length = cfg.length,
        width = cfg.width,
        flag_offset = cfg.flag_offset,
        "building gameboard"
    );
    build_gameboard(cfg, &Wgs84).context("building gameboard")
}

fn write_artifact(out: &Path, format: Format, records: &[OutputRecord]) -> Result<()> {
    let written = match format {
        Format::Yaml => gameboard::output::write_yaml(out, records),
        Format::Json => gameboard::output::write_json(out, records),
        Format::Csv => return export::write_csv(out, records),
    };
    written.with_context(|| format!("writing {}", out.display()))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "crate": "gameboard",
        "version": gameboard::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
