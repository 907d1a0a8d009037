use leasedesk_engine::{SortDirection, SortSpec};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortViewModel {
    pub key: String,
    pub direction: SortDirection,
}

impl<K: Display> From<SortSpec<K>> for SortViewModel {
    fn from(spec: SortSpec<K>) -> Self {
        Self {
            key: spec.key.to_string(),
            direction: spec.direction,
        }
    }
}

/// Why a list rendered no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The backend returned nothing and no filter is active
    NoRecords,
    /// Filters excluded every record
    NoResults,
}

/// What a collection view was derived from
#[derive(Debug, Clone, Serialize)]
pub struct ListMeta {
    /// Plural collection name, e.g. "tenants"
    pub entity: &'static str,
    pub total: usize,
    pub shown: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub sort: Option<SortViewModel>,
    pub empty: Option<EmptyState>,
}
