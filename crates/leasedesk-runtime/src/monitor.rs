//! Backend liveness monitoring.
//!
//! The monitor is observational: it never gates other requests. While the
//! backend is not reachable it re-probes on a fixed interval and stops once
//! a probe succeeds.

use crate::Error;
use crate::transport::ApiClient;
use serde::Serialize;
use std::time::Duration;

/// Anything that can answer "is the backend alive right now"
pub trait HealthProbe {
    fn probe(&self) -> crate::Result<()>;

    /// Address shown in the unreachable message
    fn target(&self) -> &str;
}

impl HealthProbe for ApiClient {
    fn probe(&self) -> crate::Result<()> {
        self.health()
    }

    fn target(&self) -> &str {
        self.base_url()
    }
}

impl<P: HealthProbe + ?Sized> HealthProbe for &P {
    fn probe(&self) -> crate::Result<()> {
        (**self).probe()
    }

    fn target(&self) -> &str {
        (**self).target()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Timeout,
    Unreachable,
    Other,
}

impl FailureKind {
    pub fn of(err: &Error) -> Self {
        match err {
            Error::Timeout => FailureKind::Timeout,
            Error::Unreachable { .. } => FailureKind::Unreachable,
            _ => FailureKind::Other,
        }
    }

    pub fn message(&self, target: &str) -> String {
        match self {
            FailureKind::Timeout => {
                "Backend is slow to respond. It may still be starting up.".to_string()
            }
            FailureKind::Unreachable => format!(
                "Cannot connect to backend. Make sure the server is running at {}.",
                target
            ),
            FailureKind::Other => "Backend connection failed. Retrying...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionState {
    Checking,
    Connected,
    Disconnected {
        kind: FailureKind,
        message: String,
        /// Consecutive failed probes
        attempts: u32,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

pub struct ConnectionMonitor<P> {
    probe: P,
    interval: Duration,
    state: ConnectionState,
    failures: u32,
}

impl<P: HealthProbe> ConnectionMonitor<P> {
    pub fn new(probe: P, interval: Duration) -> Self {
        Self {
            probe,
            interval,
            state: ConnectionState::Checking,
            failures: 0,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Run one probe and record the outcome. A success resets the failure count.
    pub fn check(&mut self) -> &ConnectionState {
        self.state = match self.probe.probe() {
            Ok(()) => {
                self.failures = 0;
                ConnectionState::Connected
            }
            Err(err) => {
                self.failures += 1;
                let kind = FailureKind::of(&err);
                tracing::warn!(
                    "Health check failed (attempt {}): {}",
                    self.failures,
                    err
                );
                ConnectionState::Disconnected {
                    kind,
                    message: kind.message(self.probe.target()),
                    attempts: self.failures,
                }
            }
        };
        &self.state
    }

    /// Probe until connected, sleeping `interval` between failed probes.
    ///
    /// `max_attempts` bounds the number of probes; `None` polls forever.
    /// `sleep` is injected so callers decide how waiting happens.
    pub fn run_until_connected<S, F>(
        &mut self,
        max_attempts: Option<u32>,
        mut sleep: S,
        mut on_state: F,
    ) -> ConnectionState
    where
        S: FnMut(Duration),
        F: FnMut(&ConnectionState),
    {
        let mut probes = 0u32;
        loop {
            probes += 1;
            let state = self.check().clone();
            on_state(&state);

            if state.is_connected() || max_attempts.is_some_and(|max| probes >= max) {
                return state;
            }
            sleep(self.interval);
        }
    }
}
