use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Loads the JWT configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. A token signed with a fallback
    /// secret would be forgeable, so a missing secret is a fatal startup
    /// condition rather than a default.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
