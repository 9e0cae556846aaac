use jsonwebtoken::{EncodingKey, Header, encode};
use keygate::config::jwt::JwtConfig;
use keygate::modules::auth::model::Claims;
use keygate::modules::users::model::UserRole;
use keygate::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, "test@example.com", UserRole::Student, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_round_trip_preserves_claims() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let token = create_access_token(user_id, email, UserRole::Student, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, "student");
}

#[test]
fn test_token_carries_role_claim() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let cases = [
        (UserRole::Administrator, "administrator"),
        (UserRole::Teacher, "teacher"),
        (UserRole::Student, "student"),
    ];

    for (role, expected) in cases {
        let token = create_access_token(user_id, "role@example.com", role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, expected);
    }
}

#[test]
fn test_token_expiry_is_issue_time_plus_ttl() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "test@example.com", UserRole::Student, &jwt_config)
        .unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_expired_token_is_rejected() {
    let jwt_config = get_test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;

    // Hand-craft a token that expired a minute ago. Verification allows no
    // clock-skew leeway, so this must be rejected.
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "expired@example.com".to_string(),
        role: "student".to_string(),
        iat: now - 3600,
        exp: now - 60,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    assert!(verify_token(&token, &jwt_config).is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "test@example.com", UserRole::Student, &jwt_config)
        .unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "invalid.token.here",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err());
    }
}

#[test]
fn test_create_token_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 =
        create_access_token(user_id1, "user1@example.com", UserRole::Student, &jwt_config).unwrap();
    let token2 =
        create_access_token(user_id2, "user2@example.com", UserRole::Student, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
