use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub roles: Vec<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // user ID
    pub email: String,
    pub roles: Vec<String>,
    pub exp: usize,         // expiration time
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

/// Keeps only known roles; every account carries `ROLE_USER`.
pub fn normalize_roles(roles: &[String]) -> Vec<String> {
    let mut out = vec![ROLE_USER.to_string()];
    if roles.iter().any(|r| r == ROLE_ADMIN) {
        out.insert(0, ROLE_ADMIN.to_string());
    }
    out
}
