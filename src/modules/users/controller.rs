use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{EmailQuery, RegisterUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all users (administrator only)
#[utoipa::path(
    get,
    path = "/api/users/all",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_all(&state.db).await?;
    Ok(Json(users))
}

/// Look up a user by email
#[utoipa::path(
    get,
    path = "/api/users/get-by-email",
    params(
        ("email" = String, Query, description = "Email address to look up")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Missing or malformed email", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<User>, AppError> {
    let email = query.email.unwrap_or_default();

    if email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }

    if !email.validate_email() {
        return Err(AppError::validation("Email is not valid"));
    }

    let user = UserService::get_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

    Ok(Json(user))
}

/// Look up a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}/get",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

    Ok(Json(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/add",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered, echoed without password", body = User),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create(&state.db, dto).await?;
    Ok(Json(user))
}

/// Delete a user (administrator only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "No user with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    UserService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
