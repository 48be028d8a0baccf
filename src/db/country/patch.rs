use sqlx::PgPool;

use crate::errors::AppError;

pub async fn update_country_home(
    id: i32,
    show_on_home: bool,
    home_sort: Option<i32>,
    postgres: PgPool,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE country
            SET show_on_home = $2, home_sort = $3, updated_at = NOW()
            WHERE id = $1",
    )
    .bind(id)
    .bind(show_on_home)
    .bind(home_sort)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update country: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Country {} not found", id)));
    }
    Ok(())
}

pub async fn set_country_slug(id: i32, slug: &str, postgres: PgPool) -> Result<(), AppError> {
    sqlx::query("UPDATE country SET slug = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(slug)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to set country slug: {}", e)))?;
    Ok(())
}
