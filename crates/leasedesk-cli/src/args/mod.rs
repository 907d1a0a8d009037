// Commands are namespaced per list screen (`tenant list`, `unit add`, ...)
// so every screen exposes the same verbs.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser)]
#[command(name = "leasedesk")]
#[command(about = "Manage tenants, units, leases and payments of a rental backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $LEASEDESK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Evaluate date-dependent figures as of this day instead of today
    #[arg(long, global = true, hide = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
