// Command-line client for the rental backend.
//
// Each list "screen" of the admin UI is a subcommand namespace
// (`tenant`, `unit`, `lease`, `payment`); transient notices become the status
// badge printed with every command result.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{
    Cli, Commands, ConfigCommand, LeaseCommand, LogLevel, OutputFormat, PaymentCommand,
    TenantCommand, UnitCommand,
};
pub use commands::run;
pub use logging::init_logging;
