//! Render command implementation

use super::{load_config, write_document};
use crate::cli::RenderArgs;
use crate::output::OutputWriter;
use crate::scene::{load_scene, SceneBuilder};
use anyhow::{Context, Result};
use std::path::Path;

pub fn execute(args: RenderArgs, config_path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let config = load_config(config_path, &args.output)?;

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    tracing::info!(scene = %args.scene.display(), folders = scene.folders.len(), "Building document");

    let (document, report) = SceneBuilder::new(&config.default_icon_url.value).build(&scene);
    write_document(&document, report, &config, &args.output, output)
}
