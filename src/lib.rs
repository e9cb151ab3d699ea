//! # ABR Lookup
//!
//! Validation and enrichment of Australian business identifiers (ABN / ACN):
//! checksums are computed locally, enrichment queries the Australian Business
//! Register through a narrow collaborator trait.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Identifier types, checksum validators,
//!   the business entity record and response mapping
//! - **Application Layer** ([`application`]) - Lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP registry transport
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use abr_lookup::prelude::*;
//!
//! # async fn run() -> Result<(), AbrError> {
//! // Local validation needs no configuration at all.
//! assert!(abr_lookup::domain::identifiers::abn::is_valid("99124391073"));
//!
//! // Enrichment needs a registry GUID.
//! let config = AbrConfig::with_guid("your-guid");
//! let registry = Arc::new(HttpRegistry::new(&config)?);
//! let service = LookupService::new(registry, config);
//!
//! let entity = service.search_by_abn("99124391073").await?;
//! println!("{:?}", entity.primary_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via
//! [`config::AbrConfig`]; see the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use config::AbrConfig;
pub use error::AbrError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LookupService, NameSearchOptions};
    pub use crate::config::AbrConfig;
    pub use crate::domain::entities::BusinessEntity;
    pub use crate::domain::identifiers::{Abn, Acn};
    pub use crate::domain::registry::RegistryApi;
    pub use crate::error::AbrError;
    pub use crate::infrastructure::registry::HttpRegistry;
}
