//! Concrete registry transport implementations.

pub mod http_registry;

pub use http_registry::HttpRegistry;
