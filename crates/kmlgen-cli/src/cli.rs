use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// kmlgen - Generate KML documents for geographic visualization
#[derive(Parser, Debug)]
#[command(name = "kmlgen")]
#[command(about = "Generate KML documents from scene descriptions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the run summary in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./kmlgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a TOML or JSON scene file to KML
    Render(RenderArgs),

    /// Render the built-in sample document
    Demo(DemoArgs),

    /// Show the effective configuration and where each value comes from
    Config(ConfigArgs),
}

/// Options shared by every command that renders a document
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decimal digits for coordinates (minimum 6)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Icon used by styles that do not set one
    #[arg(long)]
    pub default_icon_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Scene file (.toml or .json)
    pub scene: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}
