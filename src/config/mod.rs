//! Configuration modules for the Keygate API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and carried in [`crate::state::AppState`].
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization and migrations
//! - [`jwt`]: JWT signing configuration

pub mod cors;
pub mod database;
pub mod jwt;
