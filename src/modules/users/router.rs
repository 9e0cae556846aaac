use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::role::require_administrator;
use crate::modules::users::controller::{
    delete_user, get_all_users, get_user, get_user_by_email, register_user,
};
use crate::state::AppState;

/// Routes under `/api/users`. Listing and deletion require the administrator
/// role; lookup and registration are open.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/all", get(get_all_users))
        .route("/{id}/delete", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state, require_administrator));

    Router::new()
        .route("/get-by-email", get(get_user_by_email))
        .route("/{id}/get", get(get_user))
        .route("/add", post(register_user))
        .merge(admin_routes)
}
