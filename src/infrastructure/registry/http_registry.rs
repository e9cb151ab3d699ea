//! HTTP implementation of the registry collaborator.
//!
//! Speaks JSON to a search gateway in front of the ABR XML search service;
//! the gateway owns the SOAP/XML wire framing, envelope decoding and field
//! renaming to snake case. This keeps the transport here down to a single
//! POST per operation.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::config::AbrConfig;
use crate::domain::registry::RegistryApi;
use crate::error::AbrError;

/// reqwest-backed registry transport.
pub struct HttpRegistry {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistry {
    /// Builds a transport from the client configuration.
    ///
    /// Honors the configured timeout and, when set, the outbound proxy.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::Transport`] when the underlying HTTP client cannot
    /// be constructed (for example an unusable proxy URL).
    pub fn new(config: &AbrConfig) -> Result<Self, AbrError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if let Some(ref proxy) = config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl RegistryApi for HttpRegistry {
    async fn call(&self, operation: &str, message: Value) -> Result<Value, AbrError> {
        tracing::debug!(operation, endpoint = %self.endpoint, "calling registry");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("operation", operation)])
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(operation, %status, "registry call failed");
            return Err(AbrError::unexpected(format!(
                "registry returned HTTP {status}: {body}"
            )));
        }

        Ok(response.json().await?)
    }
}
