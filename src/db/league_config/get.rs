use sqlx::PgPool;

use crate::{errors::AppError, models::league_config::LeagueConfig};

pub(crate) const LEAGUE_CONFIG_COLUMNS: &str =
    "id, provider_league_id, name, country, seasons_active, enabled, sort_order, slug";

pub async fn list_league_configs(postgres: PgPool) -> Result<Vec<LeagueConfig>, AppError> {
    let sql = format!(
        "SELECT {LEAGUE_CONFIG_COLUMNS} FROM league_config ORDER BY sort_order ASC, name ASC"
    );
    sqlx::query_as::<_, LeagueConfig>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch league configs: {}", e)))
}

pub async fn get_league_config(id: i32, postgres: PgPool) -> Result<LeagueConfig, AppError> {
    let sql = format!("SELECT {LEAGUE_CONFIG_COLUMNS} FROM league_config WHERE id = $1");
    sqlx::query_as::<_, LeagueConfig>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch league config: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("League config {} not found", id)))
}
