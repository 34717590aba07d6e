//! Command implementations

mod config;
mod demo;
mod render;

use crate::cli::{Cli, Commands, OutputArgs};
use crate::config::{CliConfigOverrides, LayeredConfig};
use crate::output::OutputWriter;
use crate::scene::BuildReport;
use anyhow::{Context, Result};
use kmlgen_core::Document;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render(args) => render::execute(args, config_path, &output),
        Commands::Demo(args) => demo::execute(args, config_path, &output),
        Commands::Config(args) => config::execute(args, config_path, &output),
    }
}

fn load_config(config_path: Option<&Path>, args: &OutputArgs) -> Result<LayeredConfig> {
    let overrides = CliConfigOverrides {
        coordinate_precision: args.precision,
        default_icon_url: args.default_icon_url.clone(),
    };
    crate::config::load_config(config_path, overrides).context("Failed to load configuration")
}

/// Summary of one render run
#[derive(Debug, Serialize)]
struct RenderSummary {
    folders: usize,
    placemarks: usize,
    styles: usize,
    skipped_points: usize,
    skipped_placemarks: usize,
    bytes: usize,
    destination: String,
}

/// Render the document and write it to the requested destination
fn write_document(
    document: &Document,
    report: BuildReport,
    config: &LayeredConfig,
    args: &OutputArgs,
    output: &OutputWriter,
) -> Result<()> {
    let text = document.render_with(&config.render_options());

    let destination = match &args.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.display().to_string()
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
            "stdout".to_string()
        }
    };

    let summary = RenderSummary {
        folders: document.len(),
        placemarks: document.folders().iter().map(|f| f.placemarks().len()).sum(),
        styles: document.folders().iter().map(|f| f.styles().len()).sum(),
        skipped_points: report.skipped_points,
        skipped_placemarks: report.skipped_placemarks,
        bytes: text.len(),
        destination,
    };

    tracing::debug!(?summary, "Render complete");

    if summary.skipped_points > 0 {
        output.warning(format!(
            "Skipped {} invalid point(s) and {} placemark(s)",
            summary.skipped_points, summary.skipped_placemarks
        ));
    }

    output.success(format!(
        "Rendered {} placemark(s) and {} style(s) in {} folder(s) to {}",
        summary.placemarks, summary.styles, summary.folders, summary.destination
    ));
    output.result(&summary)
}
