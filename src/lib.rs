pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod fs;
pub mod model;
pub mod output;
pub mod parser;
pub mod style;

pub use analysis::{
    CouplingMetrics, DependencyGraph, ScanError, SizeSummary, analyze, coupling_metrics,
    find_cycles, scan_modules,
};
pub use cli::Cli;
pub use commands::{cmd_analyze, cmd_convert, cmd_init};
pub use config::{Config, LibraryConfig};
pub use convert::{ConversionPlan, ConvertError, NoopProgress, ProgressSink, convert_to_libraries};
pub use model::{AnalysisReport, Module};
