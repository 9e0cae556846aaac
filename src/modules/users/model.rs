//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - User entity as stored in the database, minus the password
//! - [`UserRole`] - The three system roles
//!
//! # Request DTOs
//!
//! - [`RegisterUserDto`] - Register a new user
//! - [`EmailQuery`] - Query parameter for lookup by email

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// System roles.
///
/// Stored in PostgreSQL as the `user_role` enum type and carried in token
/// claims as the lowercase name. Authorization compares roles for exact
/// equality; there is no hierarchy between them.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Administrator,
    Teacher,
    #[default]
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

/// A user account.
///
/// The stored password hash is never part of this struct, so responses echo
/// the account without its credential material.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for registering a new user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    /// Presence is enforced by deserialization; no length policy is imposed.
    pub password: String,
    /// Defaults to `student` when omitted.
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Query parameters for lookup by email.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_as_str_is_lowercase() {
        assert_eq!(UserRole::Administrator.as_str(), "administrator");
        assert_eq!(UserRole::Teacher.as_str(), "teacher");
        assert_eq!(UserRole::Student.as_str(), "student");
    }

    #[test]
    fn role_defaults_to_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn register_dto_deserialize_without_role() {
        let json = r#"{"name":"Alice","email":"alice@x.com","password":"password123"}"#;
        let dto: RegisterUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.name, "Alice");
        assert_eq!(dto.email, "alice@x.com");
        assert!(dto.role.is_none());
    }

    #[test]
    fn register_dto_deserialize_with_role() {
        let json = r#"{"name":"Root","email":"root@x.com","password":"password123","role":"administrator"}"#;
        let dto: RegisterUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.role, Some(UserRole::Administrator));
    }

    #[test]
    fn register_dto_validation() {
        let dto = RegisterUserDto {
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(dto.validate().is_ok());

        let bad_email = RegisterUserDto {
            email: "not-an-email".to_string(),
            ..dto.clone()
        };
        assert!(bad_email.validate().is_err());

        // No length policy on the password.
        let short_password = RegisterUserDto {
            password: "pw123".to_string(),
            ..dto
        };
        assert!(short_password.validate().is_ok());
    }

    #[test]
    fn user_serialization_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            role: UserRole::Student,
            created_at: chrono::Utc::now(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("alice@x.com"));
        assert!(serialized.contains("\"student\""));
        assert!(!serialized.contains("password"));
    }
}
