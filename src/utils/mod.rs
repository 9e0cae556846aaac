//! Shared utilities:
//!
//! - [`errors`]: Application error kinds and their HTTP mapping
//! - [`jwt`]: JWT token creation and verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
