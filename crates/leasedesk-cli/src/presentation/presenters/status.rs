use leasedesk_runtime::ConnectionState;

use crate::presentation::view_models::{
    CommandResultViewModel, ConnectionViewModel, Guidance, StatusBadge,
};

pub fn present_connection(
    base_url: &str,
    state: ConnectionState,
    probes: u32,
) -> CommandResultViewModel<ConnectionViewModel> {
    let badge = match &state {
        ConnectionState::Connected => StatusBadge::success("Connected to backend"),
        ConnectionState::Checking => StatusBadge::info("Connecting to backend server..."),
        ConnectionState::Disconnected { .. } => {
            StatusBadge::error("Backend server not responding")
        }
    };
    let connected = state.is_connected();

    let result = CommandResultViewModel::new(ConnectionViewModel {
        base_url: base_url.to_string(),
        connection: state,
        probes,
    })
    .with_badge(badge);

    if connected {
        result
    } else {
        result
            .with_suggestion(
                Guidance::new("Keep polling until the backend is up")
                    .with_command("leasedesk status --wait"),
            )
            .with_suggestion(
                Guidance::new("Point the client at another backend")
                    .with_command("leasedesk config set-url <URL>"),
            )
    }
}
