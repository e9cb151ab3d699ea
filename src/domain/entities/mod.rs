//! Core domain entities representing the business data model.
//!
//! - [`BusinessEntity`] - The enriched business record produced by registry lookups

pub mod business_entity;

pub use business_entity::BusinessEntity;
