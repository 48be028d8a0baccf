use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::league::{
        HomeLeague, League, LeagueListItem, LeagueWithCountry, PublicHomeLeague, SyncLeague,
    },
};

pub(crate) const LEAGUE_COLUMNS: &str = "id, external_id, country_id, name, type, season_current, \
     logo, slug, show_on_home, home_sort, created_at, updated_at";

pub async fn get_league(id: i32, postgres: PgPool) -> Result<League, AppError> {
    let sql = format!("SELECT {LEAGUE_COLUMNS} FROM league WHERE id = $1");
    sqlx::query_as::<_, League>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch league: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("League {} not found", id)))
}

pub async fn find_league_by_external_id(
    external_id: i32,
    postgres: PgPool,
) -> Result<Option<League>, AppError> {
    let sql = format!("SELECT {LEAGUE_COLUMNS} FROM league WHERE external_id = $1");
    sqlx::query_as::<_, League>(&sql)
        .bind(external_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch league by external id: {}", e))
        })
}

/// A numeric key is an internal id, anything else a slug.
pub async fn find_league_by_key(key: &str, postgres: PgPool) -> Result<Option<League>, AppError> {
    let key = key.trim();
    let (sql, bind_id) = match key.parse::<i32>() {
        Ok(id) => (format!("SELECT {LEAGUE_COLUMNS} FROM league WHERE id = $1"), Some(id)),
        Err(_) => (format!("SELECT {LEAGUE_COLUMNS} FROM league WHERE slug = $1"), None),
    };

    let query = sqlx::query_as::<_, League>(&sql);
    let query = match bind_id {
        Some(id) => query.bind(id),
        None => query.bind(key),
    };

    query
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch league '{}': {}", key, e)))
}

pub async fn list_leagues_for_country(
    code: &str,
    postgres: PgPool,
) -> Result<Vec<LeagueListItem>, AppError> {
    sqlx::query_as::<_, LeagueListItem>(
        "SELECT l.id, l.name, l.slug, l.logo, l.season_current AS season, c.slug AS country_slug
            FROM league l
            JOIN country c ON c.id = l.country_id
            WHERE c.code = $1 AND l.show_on_home = TRUE
            ORDER BY l.home_sort ASC NULLS LAST, l.name ASC",
    )
    .bind(code)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leagues for {}: {}", code, e)))
}

pub async fn list_home_leagues(postgres: PgPool) -> Result<Vec<HomeLeague>, AppError> {
    sqlx::query_as::<_, HomeLeague>(
        "SELECT l.id, l.name, l.slug, l.logo, c.slug AS country_slug
            FROM league l
            JOIN country c ON c.id = l.country_id
            WHERE l.show_on_home = TRUE AND l.logo IS NOT NULL AND l.logo <> ''
            ORDER BY l.name ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch home leagues: {}", e)))
}

pub async fn list_public_home_leagues(
    postgres: PgPool,
) -> Result<Vec<PublicHomeLeague>, AppError> {
    sqlx::query_as::<_, PublicHomeLeague>(
        "SELECT id, slug, name, logo, external_id
            FROM league
            WHERE show_on_home = TRUE
            ORDER BY home_sort ASC NULLS LAST, name ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch public home leagues: {}", e)))
}

pub async fn list_leagues_admin(
    country_code: Option<&str>,
    postgres: PgPool,
) -> Result<Vec<LeagueWithCountry>, AppError> {
    sqlx::query_as::<_, LeagueWithCountry>(
        "SELECT l.id, l.external_id, l.name, l.type, l.season_current, l.logo, l.slug,
                l.show_on_home, l.home_sort,
                c.name AS country_name, c.code AS country_code, c.slug AS country_slug
            FROM league l
            JOIN country c ON c.id = l.country_id
            WHERE ($1::TEXT IS NULL OR c.code = $1)
            ORDER BY c.name ASC, l.home_sort ASC NULLS LAST, l.name ASC",
    )
    .bind(country_code)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leagues: {}", e)))
}

/// Leagues picked by the daily sync. An empty `external_ids` means all of them.
pub async fn list_sync_leagues(
    country_code: Option<&str>,
    external_ids: &[i32],
    postgres: PgPool,
) -> Result<Vec<SyncLeague>, AppError> {
    sqlx::query_as::<_, SyncLeague>(
        "SELECT l.id, l.external_id, l.season_current, l.name, c.code AS country_code
            FROM league l
            JOIN country c ON c.id = l.country_id
            WHERE ($1::TEXT IS NULL OR c.code = $1)
              AND (CARDINALITY($2::INT[]) = 0 OR l.external_id = ANY($2))
            ORDER BY l.name ASC",
    )
    .bind(country_code)
    .bind(external_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leagues to sync: {}", e)))
}

pub async fn leagues_missing_slug(postgres: PgPool) -> Result<Vec<League>, AppError> {
    let sql = format!(
        "SELECT {LEAGUE_COLUMNS} FROM league WHERE slug IS NULL OR slug = '' ORDER BY id"
    );
    sqlx::query_as::<_, League>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch leagues without slug: {}", e))
        })
}

pub async fn count_leagues(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM league")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count leagues: {}", e)))
}
