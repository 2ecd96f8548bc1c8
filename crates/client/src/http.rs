//! The shared HTTP client and response plumbing.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for the onboarding backend.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OnboardClient {
    http: reqwest::Client,
    config: ClientConfig,
    /// Correlation id attached to request logs for this client instance.
    correlation_id: Uuid,
}

impl OnboardClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config,
            correlation_id: Uuid::new_v4(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn employee_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.employee_api, path)
    }

    pub(crate) fn module_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.module_api, path)
    }

    pub(crate) fn common_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.common_api, path)
    }

    // ---- request helpers ----

    /// `GET` a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ClientError> {
        self.get_json_with_query::<T, ()>(url, None).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        url: &str,
        query: Option<&Q>,
    ) -> Result<T, ClientError> {
        debug!(correlation_id = %self.correlation_id, %url, "GET");
        let mut request = self.http.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// `GET` a JSON resource, retrying once on any failure. Reference
    /// dropdown lists use this; everything else fails fast.
    pub(crate) async fn get_json_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ClientError> {
        match self.get_json(url).await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(
                    correlation_id = %self.correlation_id,
                    %url,
                    error = %err,
                    "reference read failed, retrying once"
                );
                self.get_json(url).await
            }
        }
    }

    /// `POST` a JSON body, expecting a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(correlation_id = %self.correlation_id, %url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::parse_response(response).await
    }

    /// `POST` a JSON body with query parameters, discarding the response
    /// body.
    pub(crate) async fn post_json_with_query<B: Serialize, Q: Serialize>(
        &self,
        url: &str,
        query: &Q,
        body: &B,
    ) -> Result<(), ClientError> {
        debug!(correlation_id = %self.correlation_id, %url, "POST");
        let response = self
            .http
            .post(url)
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `POST` a JSON body, discarding the response body.
    pub(crate) async fn post_json_unit<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        debug!(correlation_id = %self.correlation_id, %url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::check_status(response).await
    }

    // ---- response helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`ClientError::Api`] with the status and
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
