use serde::Serialize;
use serde::de::DeserializeOwned;

/// Numeric identifier assigned by the backend
pub type RecordId = i64;

/// A backend-owned entity exposed as a REST collection.
///
/// The draft is the body sent on create/update: the record minus its id.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Draft: Clone + Serialize;

    /// Collection path segment (`tenants` in `GET /tenants`)
    const COLLECTION: &'static str;

    /// Singular display noun used in user-facing messages
    const NOUN: &'static str;

    fn id(&self) -> RecordId;
}
