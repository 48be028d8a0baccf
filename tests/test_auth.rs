use axum::http::StatusCode;
use chrono::Utc;
use football_data_be::{
    auth::{
        AuthClaims, SESSION_COOKIE, clear_session_cookie, decode_jwt, generate_jwt,
        hash_password, session_cookie, verify_password,
    },
    models::{
        User,
        user::{ROLE_ADMIN, ROLE_USER, normalize_roles},
    },
};

fn user(roles: &[&str]) -> User {
    User {
        id: 7,
        email: "admin@example.com".into(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        password: String::new(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("correct horse");
    assert!(hash.starts_with("pbkdf2_sha256$120000$"));
    assert_eq!(hash.split('$').count(), 4);

    assert!(verify_password("correct horse", &hash));
    assert!(!verify_password("wrong horse", &hash));
}

#[test]
fn test_password_hash_is_salted() {
    assert_ne!(hash_password("same"), hash_password("same"));
}

#[test]
fn test_verify_rejects_malformed_hashes() {
    assert!(!verify_password("x", ""));
    assert!(!verify_password("x", "plain-text"));
    assert!(!verify_password("x", "bcrypt$10$abc$def"));
    assert!(!verify_password("x", "pbkdf2_sha256$0$AAAA$AAAA"));
    assert!(!verify_password("x", "pbkdf2_sha256$1000$not base64$AAAA"));
}

#[test]
fn test_jwt_round_trip() {
    let token = generate_jwt(&user(&[ROLE_ADMIN, ROLE_USER]), "secret").unwrap();
    let claims = decode_jwt(&token, "secret").unwrap();

    assert_eq!(claims.sub, "7");
    assert_eq!(claims.email, "admin@example.com");
    assert!(claims.is_admin());
    assert!(claims.exp > Utc::now().timestamp() as usize);
}

#[test]
fn test_jwt_wrong_secret() {
    let token = generate_jwt(&user(&[ROLE_USER]), "secret").unwrap();
    assert!(decode_jwt(&token, "other").is_err());

    let err = AuthClaims::from_token(&token, "other").err().unwrap();
    assert_eq!(err.0, StatusCode::UNAUTHORIZED);

    let AuthClaims(claims) = AuthClaims::from_token(&token, "secret").unwrap();
    assert!(!claims.is_admin());
}

#[test]
fn test_session_cookies() {
    let cookie = session_cookie("abc.def");
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=abc.def;")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Max-Age=86400"));

    assert!(clear_session_cookie().contains("Max-Age=0"));
}

#[test]
fn test_normalize_roles() {
    assert_eq!(normalize_roles(&[]), vec![ROLE_USER.to_string()]);
    assert_eq!(
        normalize_roles(&[ROLE_ADMIN.to_string(), "ROLE_GOD".to_string()]),
        vec![ROLE_ADMIN.to_string(), ROLE_USER.to_string()]
    );
    assert_eq!(
        normalize_roles(&[ROLE_USER.to_string(), ROLE_USER.to_string()]),
        vec![ROLE_USER.to_string()]
    );
}
