//! Testing infrastructure for leasedesk integration tests.
//!
//! - `TestWorld`: isolated data directory, mock backend and CLI runner
//! - `fixtures`: a small rental portfolio in backend wire format
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
