use sqlx::PgPool;

use crate::{
    errors::AppError,
    util::slug::{
        COUNTRY_SLUG_MAX, LEAGUE_CONFIG_SLUG_MAX, LEAGUE_SLUG_MAX, TEAM_SLUG_MAX,
        generate_unique, slugify,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugTable {
    Country,
    League,
    Team,
    LeagueConfig,
}

impl SlugTable {
    fn table(&self) -> &'static str {
        match self {
            SlugTable::Country => "country",
            SlugTable::League => "league",
            SlugTable::Team => "team",
            SlugTable::LeagueConfig => "league_config",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            SlugTable::Country => COUNTRY_SLUG_MAX,
            SlugTable::League => LEAGUE_SLUG_MAX,
            SlugTable::Team => TEAM_SLUG_MAX,
            SlugTable::LeagueConfig => LEAGUE_CONFIG_SLUG_MAX,
        }
    }
}

pub async fn slug_taken(
    postgres: PgPool,
    table: SlugTable,
    slug: &str,
    exclude_id: Option<i32>,
) -> Result<bool, AppError> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = $1 AND ($2::INT IS NULL OR id <> $2))",
        table.table()
    );

    sqlx::query_scalar::<_, bool>(&sql)
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to check slug '{}': {}", slug, e)))
}

/// Unique slug for `text` in `table`, ignoring the row `exclude_id` when updating.
pub async fn unique_slug(
    postgres: PgPool,
    table: SlugTable,
    text: &str,
    exclude_id: Option<i32>,
) -> Result<String, AppError> {
    generate_unique(text, table.max_len(), |candidate| {
        let postgres = postgres.clone();
        async move { slug_taken(postgres, table, &candidate, exclude_id).await }
    })
    .await
}

/// `text` when it yields a non-empty slug, else `fallback`.
pub fn slug_source(text: &str, fallback: impl FnOnce() -> String) -> String {
    if slugify(text).is_empty() {
        fallback()
    } else {
        text.to_string()
    }
}
