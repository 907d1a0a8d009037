use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self, mode })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.base_url);
        }

        let file_note = if d.config_exists { "" } else { " (not created)" };
        writeln!(f, "data_dir           = {}", d.data_dir.display())?;
        writeln!(f, "config             = {}{}", d.config_path.display(), file_note)?;
        writeln!(f, "api.base_url       = {}", d.base_url)?;
        writeln!(f, "api.timeout_ms     = {}", d.timeout_ms)?;
        writeln!(f, "api.health_timeout = {}", d.health_timeout_ms)?;
        writeln!(f, "monitor.poll_secs  = {}", d.poll_interval_secs)?;
        writeln!(f, "auth.username      = {}", d.username)
    }
}
