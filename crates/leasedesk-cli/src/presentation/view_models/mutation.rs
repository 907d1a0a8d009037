use leasedesk_engine::SortDirection;
use leasedesk_types::RecordId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SortToggleViewModel {
    pub screen: &'static str,
    pub key: String,
    pub direction: SortDirection,
}

/// A delete the operator declined at the prompt
#[derive(Debug, Clone, Serialize)]
pub struct CancelledViewModel {
    pub entity: &'static str,
    pub id: RecordId,
}
