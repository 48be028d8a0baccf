use sqlx::PgPool;

use crate::{
    db::{
        country::get::{find_country_by_code, find_country_by_name},
        slug::{SlugTable, slug_source, unique_slug},
    },
    errors::AppError,
    models::country::Country,
};

const COUNTRY_COLUMNS: &str =
    "id, name, code, flag, slug, show_on_home, home_sort, created_at, updated_at";

/// Insert or update a country keyed on its code, or on its name when `match_on_name`.
/// Returns the row and whether it was created. Home settings are left alone.
pub async fn upsert_country(
    code: &str,
    name: &str,
    flag: Option<&str>,
    match_on_name: bool,
    postgres: PgPool,
) -> Result<(Country, bool), AppError> {
    let name = if name.trim().is_empty() { code } else { name.trim() };
    let source = slug_source(name, || "country".to_string());

    let existing = if match_on_name {
        find_country_by_name(name, postgres.clone()).await?
    } else {
        find_country_by_code(code, postgres.clone()).await?
    };

    let Some(country) = existing else {
        let slug = unique_slug(postgres.clone(), SlugTable::Country, &source, None).await?;
        let created = insert_country(name, code, flag, &slug, postgres).await?;
        return Ok((created, true));
    };

    let slug = if country.slug.is_empty() {
        unique_slug(postgres.clone(), SlugTable::Country, &source, Some(country.id)).await?
    } else {
        country.slug.clone()
    };

    let sql = format!(
        "UPDATE country
            SET name = $2, code = $3, flag = $4, slug = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {COUNTRY_COLUMNS}"
    );
    let updated = sqlx::query_as::<_, Country>(&sql)
        .bind(country.id)
        .bind(name)
        .bind(code)
        .bind(flag)
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update country: {}", e)))?;

    Ok((updated, false))
}

/// Country by code, created with `name` when absent.
pub async fn ensure_country(code: &str, name: &str, postgres: PgPool) -> Result<Country, AppError> {
    if let Some(country) = find_country_by_code(code, postgres.clone()).await? {
        return Ok(country);
    }

    let source = slug_source(name, || "country".to_string());
    let slug = unique_slug(postgres.clone(), SlugTable::Country, &source, None).await?;
    let country = insert_country(name, code, None, &slug, postgres).await?;
    tracing::info!("Created country {} ({})", country.name, country.code);
    Ok(country)
}

async fn insert_country(
    name: &str,
    code: &str,
    flag: Option<&str>,
    slug: &str,
    postgres: PgPool,
) -> Result<Country, AppError> {
    let sql = format!(
        "INSERT INTO country (name, code, flag, slug)
            VALUES ($1, $2, $3, $4)
            RETURNING {COUNTRY_COLUMNS}"
    );
    sqlx::query_as::<_, Country>(&sql)
        .bind(name)
        .bind(code)
        .bind(flag)
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create country: {}", e)))
}
