use sqlx::PgPool;

use crate::{
    auth::hash_password,
    db::user::{create_user, find_user_by_email, update_user},
    errors::AppError,
    models::{User, user::ROLE_ADMIN},
};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Creates a back-office user, or resets the password (and admin flag) of an existing one.
/// Returns the user and whether it was created.
pub async fn create_or_update_user(
    email: &str,
    password: &str,
    admin: bool,
    postgres: PgPool,
) -> Result<(User, bool), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let roles = if admin {
        vec![ROLE_ADMIN.to_string()]
    } else {
        Vec::new()
    };
    let hash = hash_password(password);

    match find_user_by_email(email, postgres.clone()).await? {
        Some(existing) => {
            let roles = if admin { roles } else { existing.roles.clone() };
            let user = update_user(existing.id, &existing.email, &roles, Some(&hash), postgres).await?;
            tracing::info!("Updated user {}", user.email);
            Ok((user, false))
        }
        None => {
            let user = create_user(email, &roles, &hash, postgres).await?;
            Ok((user, true))
        }
    }
}
