//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependency on the transport implementation: the
//! registry is consumed through the narrow [`registry::RegistryApi`] trait,
//! and everything else here is pure and synchronous.
//!
//! # Architecture
//!
//! - [`identifiers`] - ABN/ACN value types and checksum validators
//! - [`entities`] - The enriched business record
//! - [`registry`] - The registry collaborator trait and response mapping

pub mod entities;
pub mod identifiers;
pub mod registry;
