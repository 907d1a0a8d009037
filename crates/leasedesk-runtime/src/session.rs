use crate::Result;
use crate::storage::KeyValueStore;
use leasedesk_types::Identity;
use std::sync::Arc;

/// Storage key holding the JSON-serialized identity
pub const SESSION_KEY: &str = "user";

/// At most one logged-in identity, mirrored to durable storage.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    identity: Option<Identity>,
}

impl SessionStore {
    /// Restore the session from storage. Missing, unreadable or malformed
    /// data leaves the store logged out.
    pub fn hydrate(store: Arc<dyn KeyValueStore>) -> Self {
        let identity = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(err) => {
                    tracing::warn!("Discarding malformed stored session: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("Could not read stored session: {}", err);
                None
            }
        };

        Self { store, identity }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn login(&mut self, identity: Identity) -> Result<()> {
        let raw = serde_json::to_string(&identity)?;
        self.store.set(SESSION_KEY, &raw)?;
        self.identity = Some(identity);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.identity = None;
        self.store.remove(SESSION_KEY)
    }
}
