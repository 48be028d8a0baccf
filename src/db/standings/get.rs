use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::standings::{StandingRow, assign_ranks},
};

/// League table for a season, built from finished matches that carry both scores.
/// Every team that appears in the season's fixtures is listed, played or not.
pub async fn get_standings(
    league_id: i32,
    season: i32,
    postgres: PgPool,
) -> Result<Vec<StandingRow>, AppError> {
    let mut rows = sqlx::query_as::<_, StandingRow>(
        "WITH participants AS (
                SELECT home_team_id AS team_id FROM matches WHERE league_id = $1 AND season = $2
                UNION
                SELECT away_team_id FROM matches WHERE league_id = $1 AND season = $2
            ),
            src AS (
                SELECT home_team_id AS team_id, home_score AS gf, away_score AS ga
                    FROM matches
                    WHERE league_id = $1 AND season = $2 AND status = 'finished'
                      AND home_score IS NOT NULL AND away_score IS NOT NULL
                UNION ALL
                SELECT away_team_id, away_score, home_score
                    FROM matches
                    WHERE league_id = $1 AND season = $2 AND status = 'finished'
                      AND home_score IS NOT NULL AND away_score IS NOT NULL
            )
            SELECT t.id AS team_id,
                   t.name AS team_name,
                   t.logo,
                   COUNT(src.team_id)::BIGINT AS played,
                   COALESCE(SUM(CASE WHEN src.gf > src.ga THEN 1 ELSE 0 END), 0)::BIGINT AS wins,
                   COALESCE(SUM(CASE WHEN src.gf = src.ga THEN 1 ELSE 0 END), 0)::BIGINT AS draws,
                   COALESCE(SUM(CASE WHEN src.gf < src.ga THEN 1 ELSE 0 END), 0)::BIGINT AS losses,
                   COALESCE(SUM(src.gf), 0)::BIGINT AS gf,
                   COALESCE(SUM(src.ga), 0)::BIGINT AS ga,
                   COALESCE(SUM(src.gf - src.ga), 0)::BIGINT AS gd,
                   COALESCE(SUM(CASE WHEN src.gf > src.ga THEN 3
                                     WHEN src.gf = src.ga THEN 1
                                     ELSE 0 END), 0)::BIGINT AS points
                FROM participants p
                JOIN team t ON t.id = p.team_id
                LEFT JOIN src ON src.team_id = p.team_id
                GROUP BY t.id, t.name, t.logo
                ORDER BY points DESC, gd DESC, gf DESC, team_name ASC",
    )
    .bind(league_id)
    .bind(season)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to compute standings: {}", e)))?;

    assign_ranks(&mut rows);
    Ok(rows)
}
