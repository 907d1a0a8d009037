use leasedesk_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, StatusBadge};

pub fn present_config(
    data_dir: &Path,
    config: &Config,
    updated: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_path = Config::path_in(data_dir);
    let result = CommandResultViewModel::new(ConfigViewModel {
        data_dir: data_dir.to_path_buf(),
        config_exists: config_path.exists(),
        config_path,
        base_url: config.api.base_url.clone(),
        timeout_ms: config.api.timeout_ms,
        health_timeout_ms: config.api.health_timeout_ms,
        poll_interval_secs: config.monitor.poll_interval_secs,
        username: config.auth.username.clone(),
    });

    if updated {
        result.with_badge(StatusBadge::success(format!(
            "Backend URL set to {}",
            config.api.base_url
        )))
    } else {
        result
    }
}
