//! Infrastructure layer: concrete integrations with external systems.

pub mod registry;
