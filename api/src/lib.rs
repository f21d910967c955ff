//! Resource-grouped REST wrappers for the job-board backend.
//!
//! # Architecture
//!
//! The crate is a registry of resource wrappers, one module per resource
//! area, mirroring the resource grouping of the backend:
//!
//! | module | resource | operations |
//! |--------|----------|------------|
//! | [`auth`] | authentication | `login`, `logout` |
//! | [`public_jobs`] | public job listing | `index`, `show` |
//! | [`profile`] | private profile | `show`, `update` |
//! | [`jobs`] | private jobs | `index`, `show` |
//! | [`applications`] | private applications | `index`, `show` |
//! | [`comments`] | private comments | `index`, `store` |
//! | [`uploads`] | private file uploads | `index`, `store` |
//!
//! Each wrapper issues exactly one HTTP request and returns
//! `Result<Envelope<T>, ApiError>`. The two sides of that result carry the
//! only distinction the UI layer makes:
//!
//! - `Err(ApiError)` - the request could not be carried out at all
//!   (connect failure, timeout, invalid URL);
//! - `Ok(Envelope)` - the backend answered. `data` is `Some` only when the
//!   status was 200 and the body held a payload; non-success bodies are
//!   read capped and logged, never surfaced as typed errors.
//!
//! There is no retry, no backoff, and no cancellation: one call, one
//! response envelope.

pub mod applications;
pub mod auth;
pub mod comments;
pub mod jobs;
pub mod profile;
pub mod public_jobs;
pub mod uploads;

use std::sync::OnceLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

pub use jobdeck_types::Envelope;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 8;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Errors that prevent a wrapper from producing a response envelope.
///
/// Note that an HTTP error *status* is not an `ApiError`: the backend
/// answered, so the wrapper returns an envelope and the page decides what
/// to render.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Shared HTTP client, built once.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
}

/// Base URL plus optional bearer token; every wrapper takes one of these.
#[derive(Debug, Clone)]
pub struct ApiContext {
    base_url: Url,
    token: Option<String>,
}

impl ApiContext {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Install the token obtained from [`auth::login`].
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) fn get(&self, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        Ok(self.authorize(http_client().get(self.endpoint(path)?)))
    }

    pub(crate) fn post(&self, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        Ok(self.authorize(http_client().post(self.endpoint(path)?)))
    }

    pub(crate) fn put(&self, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        Ok(self.authorize(http_client().put(self.endpoint(path)?)))
    }
}

/// The backend wraps every payload one level deep: `{"data": ...}`.
#[derive(Debug, serde::Deserialize)]
struct Body<T> {
    #[serde(default = "Option::default")]
    data: Option<T>,
}

/// Send a request and fold the response into an [`Envelope`].
///
/// A 200 whose body decodes yields `Some` data; a 200 whose body is
/// missing or malformed yields `None` (the empty condition, not an
/// error); any other status yields `None` with the capped body logged.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Envelope<T>, ApiError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let detail = read_capped_error_body(response).await;
        tracing::warn!(status = status.as_u16(), %detail, "Backend returned an error status");
        return Ok(Envelope::new(status.as_u16(), None));
    }

    let bytes = response.bytes().await?;
    let data = match serde_json::from_slice::<Body<T>>(&bytes) {
        Ok(body) => body.data,
        Err(e) => {
            tracing::warn!(%e, body_bytes = bytes.len(), "Unreadable success body");
            None
        }
    };
    Ok(Envelope::new(status.as_u16(), data))
}

/// Read at most [`MAX_ERROR_BODY_BYTES`] of an error body for logging.
pub(crate) async fn read_capped_error_body(response: reqwest::Response) -> String {
    match response.bytes().await {
        Ok(bytes) if bytes.len() > MAX_ERROR_BODY_BYTES => {
            let text = String::from_utf8_lossy(&bytes[..MAX_ERROR_BODY_BYTES]);
            format!("{text}...(truncated)")
        }
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    /// A job body in the backend's wire shape.
    pub fn job_json(id: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "location": "Dhaka",
            "vacancy": 3,
            "job_type": "full-time",
            "start_salary": 20000,
            "end_salary": 30000,
            "salary_type": "monthly",
            "description": "Design, build, ship.",
            "expired_at": "2024-04-01T00:00:00Z",
            "company_name": "Acme",
            "company_logo": "https://cdn.example/acme.png",
            "company_website": "https://acme.example",
            "company_email_address": "jobs@acme.example",
            "company_short_description": "A mid-size product company."
        })
    }

    pub fn application_json(id: u64, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "status": status,
            "createdAt": "2024-03-01T09:30:00Z",
            "job": job_json(id * 10, "Backend Engineer")
        })
    }
}
