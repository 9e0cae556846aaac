use keygate::config::cors::CorsConfig;
use keygate::config::jwt::JwtConfig;
use keygate::modules::users::model::UserRole;
use keygate::state::AppState;
use keygate::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes";

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Builds application state around the test pool without touching the
/// environment, so tests do not depend on a .env file.
pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Inserts a user directly, bypassing the registration endpoint.
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
