use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;

/// Immutable application state assembled once at startup and cloned into
/// every handler. Configuration is never read from the environment after
/// this point.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
