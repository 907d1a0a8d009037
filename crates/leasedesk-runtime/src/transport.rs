//! Blocking HTTP transport to the REST backend.
//!
//! Every failure is classified into the runtime [`Error`] taxonomy so callers
//! can show a single message without inspecting reqwest details.

use crate::config::ApiConfig;
use crate::{Error, Result};
use leasedesk_types::{Record, RecordId};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    health_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout: config.health_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!("API Request: {} {}", method, path);

        let response = request.send().map_err(|err| {
            let err = Error::from_transport(err, &self.base_url);
            tracing::warn!("API Request failed: {} {}: {}", method, path, err);
            err
        })?;

        let status = response.status();
        tracing::debug!("API Response: {} {}", status.as_u16(), path);
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies may be empty or non-JSON
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message);
        tracing::warn!(
            "API Error Response: {} {} {:?}",
            status.as_u16(),
            path,
            message
        );
        Err(Error::Server {
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        response
            .json::<T>()
            .map_err(|err| Error::from_transport(err, &self.base_url))
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.get(self.url(path));
        let response = self.execute(Method::GET, path, request)?;
        self.decode(response)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.execute(Method::POST, path, request)?;
        self.decode(response)
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.execute(Method::PUT, path, request)?;
        self.decode(response)
    }

    /// The confirmation body, if any, is ignored.
    pub fn delete(&self, path: &str) -> Result<()> {
        let request = self.http.delete(self.url(path));
        self.execute(Method::DELETE, path, request)?;
        Ok(())
    }

    /// Liveness probe against `/health` with the shorter health timeout
    pub fn health(&self) -> Result<()> {
        let request = self
            .http
            .get(self.url("/health"))
            .timeout(self.health_timeout);
        self.execute(Method::GET, "/health", request)?;
        Ok(())
    }

    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        self.get(&format!("/{}", R::COLLECTION))
    }

    pub fn create<R: Record>(&self, draft: &R::Draft) -> Result<R> {
        self.post(&format!("/{}", R::COLLECTION), draft)
    }

    pub fn update<R: Record>(&self, id: RecordId, draft: &R::Draft) -> Result<R> {
        self.put(&format!("/{}/{}", R::COLLECTION, id), draft)
    }

    pub fn remove<R: Record>(&self, id: RecordId) -> Result<()> {
        self.delete(&format!("/{}/{}", R::COLLECTION, id))
    }
}
