//! Config command implementation

use super::load_config;
use crate::cli::ConfigArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use std::path::Path;

pub fn execute(args: ConfigArgs, config_path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let config = load_config(config_path, &args.output)?;
    let map = config.to_inspection_map();

    for (key, (value, source)) in &map {
        output.kv(key, format!("{} ({:?})", value, source));
    }

    output.result(&map)
}
