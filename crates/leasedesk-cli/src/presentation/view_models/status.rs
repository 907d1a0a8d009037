use leasedesk_runtime::ConnectionState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionViewModel {
    pub base_url: String,
    pub connection: ConnectionState,
    /// Probes made by this command
    pub probes: u32,
}
