use keygate::middleware::auth::AuthUser;
use keygate::middleware::role::check_role;
use keygate::modules::auth::model::Claims;
use keygate::modules::users::model::UserRole;

fn create_test_auth_user(role: &str) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: "test@example.com".to_string(),
        role: role.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_check_role_exact_match() {
    let auth_user = create_test_auth_user("administrator");
    assert!(check_role(&auth_user, UserRole::Administrator).is_ok());

    let auth_user = create_test_auth_user("teacher");
    assert!(check_role(&auth_user, UserRole::Teacher).is_ok());

    let auth_user = create_test_auth_user("student");
    assert!(check_role(&auth_user, UserRole::Student).is_ok());
}

#[test]
fn test_check_role_no_match() {
    let auth_user = create_test_auth_user("student");
    assert!(check_role(&auth_user, UserRole::Administrator).is_err());

    let auth_user = create_test_auth_user("teacher");
    assert!(check_role(&auth_user, UserRole::Administrator).is_err());
}

#[test]
fn test_no_role_hierarchy() {
    // Gating is a flat exact match: an administrator token is not implicitly
    // granted teacher- or student-gated access.
    let auth_user = create_test_auth_user("administrator");
    assert!(check_role(&auth_user, UserRole::Teacher).is_err());
    assert!(check_role(&auth_user, UserRole::Student).is_err());
}

#[test]
fn test_check_role_unknown_claim() {
    let auth_user = create_test_auth_user("superuser");
    assert!(check_role(&auth_user, UserRole::Administrator).is_err());

    let auth_user = create_test_auth_user("");
    assert!(check_role(&auth_user, UserRole::Student).is_err());
}
