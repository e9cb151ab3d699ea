//! Business logic services.
//!
//! - [`LookupService`] - Registry lookup orchestration (by ABN, by ACN, by name)

pub mod lookup_service;

pub use lookup_service::{LookupService, NameSearchOptions, ALL_STATES};
