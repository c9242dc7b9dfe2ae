//! HTTP API client for the hospital management backend
//!
//! [`ApiClient::dispatch`] is the single request pipeline: it builds the
//! request from a [`RequestDescriptor`], attaches the bearer token from the
//! injected [`Credentials`] when one is stored, sends it, and turns the
//! response into either the declared type or a typed [`ClientError`].
//! Nothing is retried and expired tokens are not refreshed here.

use crate::api::endpoints::{Operation, RequestDescriptor};
use crate::api::resources::{AppointmentsApi, AuthApi, CheckInsApi, DoctorsApi, PatientsApi};
use crate::api::types::error_message_from_body;
use crate::auth::Credentials;
use crate::config::Config;
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// API client for the hospital management backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a client with the default timeout
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_timeout(
            base_url,
            credentials,
            Duration::from_secs(crate::config::DEFAULT_API_TIMEOUT_SECS),
        )
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::config("API URL cannot be empty"));
        }

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Create from resolved configuration
    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self> {
        Self::with_timeout(config.api_url(), credentials, config.timeout())
    }

    /// Send one request and decode the body as `T`.
    ///
    /// Empty success bodies, and the body of any successful delete, decode
    /// as JSON `null`, so `T = ()` covers them.
    pub async fn dispatch<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        let method = request.method();
        let resource = request.resource();
        let operation = request.operation;
        let url = request.endpoint.url(&self.base_url);

        let mut builder = self.client.request(method.clone(), &url);

        if let Some(token) = self.credentials.get_access_token()? {
            builder = builder.bearer_auth(token);
        }

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        debug!(%method, %url, %resource, %operation, "Dispatching request");

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(%method, %url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            let message = error_message_from_body(&text);
            warn!(
                %method,
                %url,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or("<none>"),
                "Request rejected"
            );
            return Err(ClientError::from_status(status, message));
        }

        // Delete confirmations carry no data the caller uses
        let body = if operation == Operation::Delete || text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };

        Ok(serde_json::from_str(body)?)
    }

    /// Check whether the backend answers at all. Any HTTP response counts,
    /// including an error status from a root path the API does not serve.
    pub async fn health_check(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => {
                debug!(status = response.status().as_u16(), "Health check answered");
                true
            },
            Err(e) => {
                debug!(error = %e, "Health check failed");
                false
            },
        }
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn patients(&self) -> PatientsApi<'_> {
        PatientsApi::new(self)
    }

    pub fn doctors(&self) -> DoctorsApi<'_> {
        DoctorsApi::new(self)
    }

    pub fn appointments(&self) -> AppointmentsApi<'_> {
        AppointmentsApi::new(self)
    }

    pub fn check_ins(&self) -> CheckInsApi<'_> {
        CheckInsApi::new(self)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
