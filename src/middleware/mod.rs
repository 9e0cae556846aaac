//! Middleware and extractors for authentication and authorization.
//!
//! # Authorization Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT signature and expiry and extracts
//!    the claims
//! 3. [`role`] middleware compares the token's role claim against the role
//!    required by the route (exact match)
//! 4. The handler executes only if every check passes

pub mod auth;
pub mod role;
