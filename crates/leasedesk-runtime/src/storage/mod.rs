//! Durable key-value storage holding small JSON documents (session, view
//! preferences).

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use crate::Result;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
