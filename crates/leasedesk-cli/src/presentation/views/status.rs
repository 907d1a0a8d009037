use std::fmt;

use leasedesk_runtime::ConnectionState;

use crate::presentation::formatters::{Tone, paint};
use crate::presentation::view_models::{ConnectionViewModel, CreateView, ViewMode};

impl CreateView for ConnectionViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConnectionView { data: self, mode })
    }
}

struct ConnectionView<'a> {
    data: &'a ConnectionViewModel,
    mode: ViewMode,
}

impl fmt::Display for ConnectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            let word = match &self.data.connection {
                ConnectionState::Checking => "checking",
                ConnectionState::Connected => "connected",
                ConnectionState::Disconnected { .. } => "disconnected",
            };
            return writeln!(f, "{}", word);
        }

        writeln!(f, "Backend: {}", self.data.base_url)?;
        match &self.data.connection {
            ConnectionState::Checking => writeln!(f, "Connecting to backend server...")?,
            ConnectionState::Connected => {
                writeln!(f, "Status:  {}", paint("connected", Tone::Success))?
            }
            ConnectionState::Disconnected {
                message, attempts, ..
            } => {
                let mut line = message.clone();
                if *attempts > 1 {
                    line.push_str(&format!(" (Attempt {})", attempts));
                }
                writeln!(f, "Status:  {}", paint(&line, Tone::Danger))?;
            }
        }

        if self.mode == ViewMode::Verbose {
            writeln!(f, "Probes:  {}", self.data.probes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasedesk_runtime::FailureKind;

    fn vm(connection: ConnectionState) -> ConnectionViewModel {
        ConnectionViewModel {
            base_url: "http://localhost:8080/api".to_string(),
            connection,
            probes: 3,
        }
    }

    #[test]
    fn test_connected() {
        let text = vm(ConnectionState::Connected)
            .create_view(ViewMode::Compact)
            .to_string();
        assert_eq!(
            text,
            "Backend: http://localhost:8080/api\nStatus:  connected\n"
        );
    }

    #[test]
    fn test_disconnected_shows_attempt_after_retry() {
        let state = ConnectionState::Disconnected {
            kind: FailureKind::Timeout,
            message: "Request timed out".to_string(),
            attempts: 3,
        };
        let text = vm(state).create_view(ViewMode::Verbose).to_string();
        assert!(text.contains("Status:  Request timed out (Attempt 3)\n"));
        assert!(text.ends_with("Probes:  3\n"));
    }

    #[test]
    fn test_first_failure_has_no_attempt_suffix() {
        let state = ConnectionState::Disconnected {
            kind: FailureKind::Other,
            message: "Server responded with 503".to_string(),
            attempts: 1,
        };
        let text = vm(state).create_view(ViewMode::Compact).to_string();
        assert!(text.ends_with("Status:  Server responded with 503\n"));
    }
}
