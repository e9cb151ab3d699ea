//! Client configuration loaded from environment variables.
//!
//! Configuration is an explicit value handed to the lookup service at
//! construction; there is no process-wide mutable state, so multiple clients
//! with different credentials coexist safely.
//!
//! ## Variables
//!
//! ```bash
//! # Required for any registry call (web services access GUID)
//! export ABN_LOOKUP_GUID="00000000-0000-0000-0000-000000000000"
//!
//! # Optional
//! export ABR_ENDPOINT="https://abr.business.gov.au/abrxmlsearch/ABRXMLSearch.asmx"
//! export ABR_PROXY="http://proxy.internal:3128"
//! export ABR_TIMEOUT_SECONDS="30"
//! ```
//!
//! A missing GUID does not fail loading; it fails the first lookup with a
//! configuration error, so purely local checksum validation works without any
//! environment at all.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default registry search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://abr.business.gov.au/abrxmlsearch/ABRXMLSearch.asmx";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Lookup client configuration.
#[derive(Debug, Clone)]
pub struct AbrConfig {
    /// Web services access GUID; absent until configured.
    pub guid: Option<String>,
    /// Registry search endpoint.
    pub endpoint: String,
    /// Optional HTTP proxy for outbound registry calls.
    pub proxy: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for AbrConfig {
    fn default() -> Self {
        Self {
            guid: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            proxy: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl AbrConfig {
    /// Creates a configuration with an explicit GUID and defaults elsewhere.
    pub fn with_guid(guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            ..Self::default()
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Note
    ///
    /// Expects the environment to be populated already (e.g. via
    /// `dotenvy::dotenv()` in `main`).
    pub fn from_env() -> Self {
        let guid = env::var("ABN_LOOKUP_GUID").ok().filter(|g| !g.is_empty());
        let endpoint =
            env::var("ABR_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let proxy = env::var("ABR_PROXY").ok().filter(|p| !p.is_empty());

        let timeout_seconds = env::var("ABR_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            guid,
            endpoint,
            proxy,
            timeout_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `endpoint` is not a valid http(s) URL
    /// - `proxy`, when set, is not a valid URL
    /// - `timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.endpoint)
            .with_context(|| format!("ABR_ENDPOINT is not a valid URL: '{}'", self.endpoint))?;

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            anyhow::bail!(
                "ABR_ENDPOINT must use http or https, got '{}'",
                endpoint.scheme()
            );
        }

        if let Some(ref proxy) = self.proxy {
            Url::parse(proxy)
                .with_context(|| format!("ABR_PROXY is not a valid URL: '{proxy}'"))?;
        }

        if self.timeout_seconds == 0 {
            anyhow::bail!("ABR_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns the GUID or a configuration error.
    ///
    /// Checked by the lookup service before any network call is attempted.
    pub fn require_guid(&self) -> Result<&str, crate::error::AbrError> {
        self.guid
            .as_deref()
            .ok_or_else(|| crate::error::AbrError::configuration("no GUID provided"))
    }

    /// Logs a configuration summary without exposing the credential.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Endpoint: {}", self.endpoint);
        match self.guid {
            Some(ref guid) => tracing::info!("  GUID: {}", mask_guid(guid)),
            None => tracing::info!("  GUID: not configured (lookups disabled)"),
        }
        match self.proxy {
            Some(ref proxy) => tracing::info!("  Proxy: {proxy}"),
            None => tracing::info!("  Proxy: none"),
        }
        tracing::info!("  Timeout: {}s", self.timeout_seconds);
    }
}

/// Masks a GUID for logging, keeping only the first block.
///
/// `"12345678-aaaa-bbbb-cccc-ddddeeee0000"` → `"12345678-***"`.
fn mask_guid(guid: &str) -> String {
    match guid.split_once('-') {
        Some((head, _)) => format!("{head}-***"),
        None if guid.len() > 4 => format!("{}***", &guid[..4]),
        None => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<AbrConfig> {
    let config = AbrConfig::from_env();
    config.validate()?;
    Ok(config)
}
