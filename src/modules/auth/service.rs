use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies the submitted credentials and issues an access token.
    ///
    /// An unknown email and a wrong password produce the same response, so
    /// the endpoint does not leak which addresses are registered.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            email: String,
            password: String,
            role: UserRole,
            created_at: chrono::DateTime<chrono::Utc>,
        }

        let record = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, role, created_at FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &record.password) {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let access_token =
            create_access_token(record.id, &record.email, record.role, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            user: User {
                id: record.id,
                name: record.name,
                email: record.email,
                role: record.role,
                created_at: record.created_at,
            },
        })
    }
}
