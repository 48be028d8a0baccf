use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::country::{Country, CountrySummary},
};

const COUNTRY_COLUMNS: &str =
    "id, name, code, flag, slug, show_on_home, home_sort, created_at, updated_at";

pub async fn get_country(id: i32, postgres: PgPool) -> Result<Country, AppError> {
    let sql = format!("SELECT {COUNTRY_COLUMNS} FROM country WHERE id = $1");
    sqlx::query_as::<_, Country>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch country: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))
}

pub async fn find_country_by_code(
    code: &str,
    postgres: PgPool,
) -> Result<Option<Country>, AppError> {
    let sql = format!("SELECT {COUNTRY_COLUMNS} FROM country WHERE code = $1 ORDER BY id LIMIT 1");
    sqlx::query_as::<_, Country>(&sql)
        .bind(code)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch country by code: {}", e)))
}

/// Case-insensitive match on the name.
pub async fn find_country_by_name(
    name: &str,
    postgres: PgPool,
) -> Result<Option<Country>, AppError> {
    let sql = format!(
        "SELECT {COUNTRY_COLUMNS} FROM country WHERE LOWER(name) = LOWER($1) ORDER BY id LIMIT 1"
    );
    sqlx::query_as::<_, Country>(&sql)
        .bind(name.trim())
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch country by name: {}", e)))
}

pub async fn first_country(postgres: PgPool) -> Result<Option<Country>, AppError> {
    let sql = format!("SELECT {COUNTRY_COLUMNS} FROM country ORDER BY id LIMIT 1");
    sqlx::query_as::<_, Country>(&sql)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch first country: {}", e)))
}

pub async fn list_home_countries(postgres: PgPool) -> Result<Vec<CountrySummary>, AppError> {
    sqlx::query_as::<_, CountrySummary>(
        "SELECT id, code, name, slug, flag
            FROM country
            WHERE show_on_home = TRUE
            ORDER BY home_sort ASC NULLS LAST, name ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch home countries: {}", e)))
}

pub async fn list_countries_admin(postgres: PgPool) -> Result<Vec<Country>, AppError> {
    let sql = format!(
        "SELECT {COUNTRY_COLUMNS} FROM country ORDER BY home_sort ASC NULLS LAST, name ASC"
    );
    sqlx::query_as::<_, Country>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch countries: {}", e)))
}

pub async fn countries_missing_slug(postgres: PgPool) -> Result<Vec<Country>, AppError> {
    let sql = format!(
        "SELECT {COUNTRY_COLUMNS} FROM country WHERE slug IS NULL OR slug = '' ORDER BY id"
    );
    sqlx::query_as::<_, Country>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch countries without slug: {}", e))
        })
}

pub async fn count_countries(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM country")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count countries: {}", e)))
}
