use serde::Serialize;
use std::path::PathBuf;

/// Effective configuration; the demo password is never included.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_exists: bool,
    pub base_url: String,
    pub timeout_ms: u64,
    pub health_timeout_ms: u64,
    pub poll_interval_secs: u64,
    pub username: String,
}
