use super::{Preferences, RecordOps};
use crate::auth::authenticate;
use crate::config::Config;
use crate::monitor::ConnectionMonitor;
use crate::session::SessionStore;
use crate::storage::{FileStore, KeyValueStore};
use crate::transport::ApiClient;
use crate::Result;
use chrono::NaiveDate;
use leasedesk_engine::DashboardStats;
use leasedesk_types::{Identity, Lease, Payment, Tenant, Unit};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Entry point tying configuration, transport and local state together.
pub struct LeaseDesk {
    data_dir: PathBuf,
    config: Config,
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    session: SessionStore,
}

impl LeaseDesk {
    /// Open the data directory: `config.toml` (defaults when absent) plus the
    /// file-backed store under `state/`.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&data_dir));
        Self::with_store(data_dir, config, store)
    }

    pub fn with_store(
        data_dir: PathBuf,
        config: Config,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let api = ApiClient::new(&config.api)?;
        let session = SessionStore::hydrate(store.clone());

        Ok(Self {
            data_dir,
            config,
            api,
            store,
            session,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<Identity> {
        let identity = authenticate(username, password, &self.config.auth)?;
        self.session.login(identity.clone())?;
        tracing::info!("Logged in as {}", identity);
        Ok(identity)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()
    }

    pub fn tenants(&self) -> RecordOps<'_, Tenant> {
        RecordOps::new(&self.api)
    }

    pub fn units(&self) -> RecordOps<'_, Unit> {
        RecordOps::new(&self.api)
    }

    pub fn leases(&self) -> RecordOps<'_, Lease> {
        RecordOps::new(&self.api)
    }

    pub fn payments(&self) -> RecordOps<'_, Payment> {
        RecordOps::new(&self.api)
    }

    pub fn preferences(&self) -> Preferences<'_> {
        Preferences::new(self.store.as_ref())
    }

    pub fn monitor(&self) -> ConnectionMonitor<&ApiClient> {
        ConnectionMonitor::new(&self.api, self.config.monitor.poll_interval())
    }

    /// Fetch all four collections and derive the dashboard figures.
    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardStats> {
        let tenants = self.tenants().list()?;
        let units = self.units().list()?;
        let leases = self.leases().list()?;
        let payments = self.payments().list()?;

        Ok(DashboardStats::compute(
            &tenants, &units, &leases, &payments, today,
        ))
    }
}
