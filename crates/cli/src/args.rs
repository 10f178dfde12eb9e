use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "stockwise", version, about = "Reorder-point calculations for stock items")]
pub struct Cli {
    /// Directory holding settings and the audit log.
    #[arg(long, env = "STOCKWISE_DATA_DIR", default_value = ".stockwise", global = true)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the reorder calculation for every item.
    Calculate(ItemsArgs),
    /// Print items that should be reordered, most urgent first.
    Suggest(ItemsArgs),
    /// Print critical/high reorder alerts.
    Alerts(ItemsArgs),
    /// Print counts per urgency.
    Summary(ItemsArgs),
    /// Print recent audit entries, newest first.
    Audit {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show or change persisted settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Args)]
pub struct ItemsArgs {
    /// JSON file containing an array of stock items.
    pub items: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    Show,
    Set {
        #[arg(long)]
        safety_stock_days: Option<f64>,
        #[arg(long)]
        coverage_buffer_days: Option<f64>,
        #[arg(long)]
        low_stock_alerts: Option<bool>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
