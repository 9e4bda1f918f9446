use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tco_core::observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "tco", version, about = "Vehicle total cost of ownership calculator")]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lifetime cost summary for each vehicle
    Summary { file: PathBuf },

    /// Year-by-year maintenance projection
    Maintenance {
        file: PathBuf,

        /// Only show the vehicle with this name
        #[arg(long)]
        vehicle: Option<String>,
    },

    /// Cumulative cost trajectory and savings ranking
    Compare { file: PathBuf },

    /// Cost per mile split by component
    PerMile { file: PathBuf },

    /// Ownership cost net of resale value
    Depreciation { file: PathBuf },

    /// Validate and print the effective configuration
    CheckConfig,
}
