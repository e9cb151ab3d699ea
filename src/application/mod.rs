//! Application layer containing business logic and service orchestration.

pub mod services;
