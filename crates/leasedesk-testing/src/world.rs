//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temporary data directory whose `config.toml` points at
//! a private `httpmock` server, so tests never touch a real backend or the
//! operator's own session.

use anyhow::Result;
use assert_cmd::Command;
use httpmock::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Path prefix the mock backend serves under
pub const API_PREFIX: &str = "/api";

/// Isolated CLI environment with its own mock backend.
///
/// # Example
/// ```no_run
/// use leasedesk_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_data();
/// world.login().unwrap();
///
/// let result = world.run(&["tenant", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    server: MockServer,
    today: String,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty backend.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".leasedesk");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let server = MockServer::start();
        let world = Self {
            temp_dir,
            data_dir,
            server,
            today: fixtures::TODAY.to_string(),
        };
        world
            .write_config(&world.api_url())
            .expect("Failed to write config.toml");
        world
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Base URL the CLI is configured with
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.base_url(), API_PREFIX)
    }

    /// Full mock path for a backend collection, e.g. `/api/tenants`
    pub fn api_path(collection: &str) -> String {
        format!("{}/{}", API_PREFIX, collection)
    }

    /// Override the `--today` passed to every command.
    pub fn with_today(mut self, today: &str) -> Self {
        self.today = today.to_string();
        self
    }

    /// Point the CLI at `base_url` instead of the mock backend.
    pub fn with_base_url(self, base_url: &str) -> Self {
        self.write_config(base_url)
            .expect("Failed to write config.toml");
        self
    }

    /// Serve `body` for `GET /api/<collection>`.
    pub fn with_collection(self, collection: &str, body: Value) -> Self {
        let path = Self::api_path(collection);
        self.server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200).json_body(body);
        });
        self
    }

    /// Serve the fixture portfolio plus a healthy `/health`.
    pub fn with_sample_data(self) -> Self {
        self.with_collection("tenants", fixtures::tenants())
            .with_collection("units", fixtures::units())
            .with_collection("leases", fixtures::leases())
            .with_collection("payments", fixtures::payments())
            .with_health(200)
    }

    pub fn with_health(self, status: u16) -> Self {
        let path = Self::api_path("health");
        self.server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(status).json_body(serde_json::json!({"status": "UP"}));
        });
        self
    }

    fn write_config(&self, base_url: &str) -> Result<()> {
        let content = format!(
            "[api]\nbase_url = \"{}\"\ntimeout_ms = 2000\nhealth_timeout_ms = 1000\n\n\
             [monitor]\npoll_interval_secs = 0\n",
            base_url
        );
        std::fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// Configure a CLI command with this environment's data dir, format and day.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format)
            .arg("--today")
            .arg(&self.today)
            .env_remove("LEASEDESK_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Log in with the demo credentials.
    pub fn login(&self) -> Result<CliResult> {
        let result = self.run(&["login", "-u", fixtures::USERNAME, "-p", fixtures::PASSWORD])?;
        if !result.success() {
            anyhow::bail!("login failed: {}", result.stderr());
        }
        Ok(result)
    }

    /// Execute with `--format plain`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "plain")
    }

    /// Execute with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "json")
    }

    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    fn run_with_format(&self, args: &[&str], format: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("leasedesk")
            .map_err(|e| anyhow::anyhow!("Failed to find leasedesk binary: {}", e))?;

        self.configure_command(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
