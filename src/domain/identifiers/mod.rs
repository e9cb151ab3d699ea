//! Australian business identifier types and their checksum validators.
//!
//! Both identifier types are value objects: construction always succeeds and
//! only normalizes, validity is a derived predicate. The checksum algorithms
//! are the officially published ones:
//!
//! - [`Abn`] - Australian Business Number, 11 digits, modulus-89 weighted checksum
//! - [`Acn`] - Australian Company Number, 9 digits, modulus-10 weighted checksum

pub mod abn;
pub mod acn;

pub use abn::Abn;
pub use acn::Acn;
