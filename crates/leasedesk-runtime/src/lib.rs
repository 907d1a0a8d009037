pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod monitor;
pub mod session;
pub mod storage;
pub mod transport;

pub use auth::authenticate;
pub use client::{LeaseDesk, Mutation, MutationKind, Preferences, RecordOps};
pub use config::{ApiConfig, AuthConfig, Config, MonitorConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use monitor::{ConnectionMonitor, ConnectionState, FailureKind, HealthProbe};
pub use session::{SESSION_KEY, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use transport::ApiClient;
