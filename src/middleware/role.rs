//! Role-based authorization middleware.
//!
//! Role gating is an exact match on the token's role claim: an administrator
//! token does not implicitly pass a teacher-only or student-only check. There
//! is deliberately no hierarchy.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware function that rejects the request unless the authenticated
/// user's role is exactly `required_role`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/all", get(list_handler))
///     .route_layer(middleware::from_fn_with_state(state, require_administrator));
/// ```
pub async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    required_role: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_role(&auth_user, required_role)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for administrator-only routes.
pub async fn require_administrator(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_role(State(state), req, next, UserRole::Administrator).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Check that a user holds exactly the required role.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn handler(auth_user: AuthUser) -> Result<Json<Response>, AppError> {
///     check_role(&auth_user, UserRole::Administrator)?;
///     // Handler logic
/// }
/// ```
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    let user_role = parse_role(&auth_user.0.role)?;

    if user_role != required_role {
        return Err(AppError::Forbidden(format!(
            "Access denied. Required role: {:?}, but user has role: {:?}",
            required_role, user_role
        )));
    }

    Ok(())
}

/// Parse a role claim into a UserRole.
///
/// A token with an unknown role claim did not come from this issuer, so the
/// failure is treated as unauthorized rather than a server error.
fn parse_role(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "administrator" => Ok(UserRole::Administrator),
        "teacher" => Ok(UserRole::Teacher),
        "student" => Ok(UserRole::Student),
        _ => Err(AppError::Unauthorized(format!(
            "Invalid role claim: {}",
            role_str
        ))),
    }
}
