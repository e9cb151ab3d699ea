//! Registry collaborator trait and response mapping.
//!
//! The Australian Business Register is consumed through a deliberately narrow
//! interface: one operation name, one structured message, one structured
//! response. Wire framing (SOAP envelopes, XML, WSDL) is the transport
//! implementation's concern, see [`crate::infrastructure::registry`].
//!
//! # Testing
//!
//! A mock implementation is auto-generated via `mockall` under `cfg(test)`;
//! integration tests use a hand-written stub in `tests/common/mod.rs`.

pub mod payload;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AbrError;

/// Registry operation: single-record search by ABN.
pub const OP_SEARCH_BY_ABN: &str = "SearchByABNv201408";
/// Registry operation: single-record search by ACN (ASIC number).
pub const OP_SEARCH_BY_ASIC: &str = "SearchByASICv201408";
/// Registry operation: advanced name search returning candidate records.
pub const OP_SEARCH_BY_NAME: &str = "ABRSearchByNameAdvanced2012";

/// Narrow interface to the remote business registry.
///
/// Implementations own the transport entirely: timeouts, proxying and wire
/// encoding live behind this trait. The returned value is the decoded
/// response body with the registry's field naming preserved in snake case.
///
/// # Errors
///
/// Returns [`AbrError::Transport`] when the call never produced a decodable
/// response. Registry-level exceptions are *not* an error at this seam; they
/// arrive inside the response body and are surfaced by the envelope
/// unwrapping in [`payload`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Dispatches one named operation with a structured message payload.
    async fn call(&self, operation: &str, message: Value) -> Result<Value, AbrError>;
}

pub use payload::{BusinessEntityPayload, ResponseEnvelope};
