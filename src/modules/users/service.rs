use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{RegisterUserDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users ORDER BY created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Registers a new user.
    ///
    /// Uniqueness of the email is enforced by the unique index on
    /// `users.email`, not by a lookup before the insert: two concurrent
    /// registrations of the same address cannot both succeed, the loser
    /// gets a conflict.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create(db: &PgPool, dto: RegisterUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;
        let role = dto.role.unwrap_or_default();

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, role, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already exists".to_string())
            }
            _ => AppError::Database(e.into()),
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        Ok(())
    }
}
