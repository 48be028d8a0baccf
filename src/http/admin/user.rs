use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    auth::{AdminSession, hash_password},
    db::user::{create_user, get_user, list_users, update_user},
    errors::AppError,
    http::admin::{
        AdminError, FlashQuery, admin_error,
        forms::{UserForm, checkbox},
        render,
        templates::{UserFormTemplate, UserIndexTemplate, UserRow},
    },
    jobs::users::MIN_PASSWORD_LEN,
    models::user::ROLE_ADMIN,
    state::AppState,
};

fn roles_from(form: &UserForm) -> Vec<String> {
    if checkbox(&form.admin) {
        vec![ROLE_ADMIN.to_string()]
    } else {
        Vec::new()
    }
}

fn check_password(password: &str, required: bool) -> Result<Option<String>, String> {
    if password.is_empty() {
        return if required {
            Err("Password is required".into())
        } else {
            Ok(None)
        };
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(Some(hash_password(password)))
}

fn form_page(
    title: String,
    action: String,
    form: &UserForm,
    is_new: bool,
    error: String,
) -> Result<Response, AdminError> {
    let page = UserFormTemplate {
        title,
        action,
        email: form.email.trim().to_string(),
        is_admin: checkbox(&form.admin),
        is_new,
        error: Some(error),
    };
    Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response())
}

pub async fn user_index(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AdminError> {
    let users = list_users(state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching users", e))?;

    render(&UserIndexTemplate {
        users: users.into_iter().map(UserRow::from).collect(),
        flash: flash.message(),
    })
}

pub async fn user_new_page(_admin: AdminSession) -> Result<Html<String>, AdminError> {
    render(&UserFormTemplate {
        title: "New user".into(),
        action: "/admin/user/new".into(),
        email: String::new(),
        is_admin: false,
        is_new: true,
        error: None,
    })
}

pub async fn user_new_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response, AdminError> {
    let title = "New user".to_string();
    let action = "/admin/user/new".to_string();

    let hash = match check_password(&form.password, true) {
        Ok(Some(hash)) => hash,
        Ok(None) => return form_page(title, action, &form, true, "Password is required".into()),
        Err(message) => return form_page(title, action, &form, true, message),
    };

    match create_user(&form.email, &roles_from(&form), &hash, state.postgres.clone()).await {
        Ok(_) => Ok(Redirect::to("/admin/user?flash=created").into_response()),
        Err(AppError::BadRequest(message)) => form_page(title, action, &form, true, message),
        Err(e) => Err(admin_error("Error creating user", e)),
    }
}

pub async fn user_edit_page(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AdminError> {
    let user = get_user(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching user", e))?;

    render(&UserFormTemplate {
        title: format!("Edit {}", user.email),
        action: format!("/admin/user/{}/edit", user.id),
        is_admin: user.is_admin(),
        email: user.email,
        is_new: false,
        error: None,
    })
}

pub async fn user_edit_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UserForm>,
) -> Result<Response, AdminError> {
    let title = format!("Edit {}", form.email.trim());
    let action = format!("/admin/user/{}/edit", id);

    let hash = match check_password(&form.password, false) {
        Ok(hash) => hash,
        Err(message) => return form_page(title, action, &form, false, message),
    };

    match update_user(
        id,
        &form.email,
        &roles_from(&form),
        hash.as_deref(),
        state.postgres.clone(),
    )
    .await
    {
        Ok(user) => {
            tracing::info!("User {} saved", user.email);
            Ok(Redirect::to("/admin/user?flash=saved").into_response())
        }
        Err(AppError::BadRequest(message)) => form_page(title, action, &form, false, message),
        Err(e) => Err(admin_error("Error updating user", e)),
    }
}
