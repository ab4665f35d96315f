use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ngsplit")]
#[command(about = "Analyze a monolithic Angular app and split it into libraries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze module dependencies, cycles, and coupling
    Analyze(AnalyzeArgs),

    /// Convert the app into library packages
    Convert(ConvertArgs),

    /// Generate a starter .ngsplit.toml configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Project path (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Source root relative to the project (overrides config)
    #[arg(long)]
    pub source_root: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Project path (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Destination for the generated library workspace
    #[arg(short, long)]
    pub destination: PathBuf,

    /// Print the staged move plan without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the pre-conversion backup copy
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create .ngsplit.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}
