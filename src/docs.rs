use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::model::{EmailQuery, RegisterUserDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_all_users,
        crate::modules::users::controller::get_user_by_email,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterUserDto,
            EmailQuery,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "User account management")
    ),
    info(
        title = "Keygate API",
        version = "0.1.0",
        description = "An identity microservice built with Rust, Axum, and PostgreSQL featuring JWT-based authentication and role-gated user management.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
