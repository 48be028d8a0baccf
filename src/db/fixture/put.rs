use sqlx::PgPool;

use crate::{errors::AppError, models::fixture::FixtureUpsert};

/// Insert or update a fixture keyed on its external id. Returns `true` on insert.
///
/// Round, stage, venue and kickoff keep their stored values when the new ones are `None`.
pub async fn upsert_fixture(fixture: &FixtureUpsert, postgres: PgPool) -> Result<bool, AppError> {
    let inserted = sqlx::query_scalar::<_, bool>(
        "INSERT INTO matches (
                external_id, league_id, season, round, stage, venue, date_utc, status,
                home_team_id, away_team_id, home_score, away_score, minute
            )
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7::TIMESTAMPTZ, NOW()), $8,
                    $9, $10, $11, $12, $13)
            ON CONFLICT (external_id) DO UPDATE SET
                league_id = EXCLUDED.league_id,
                season = EXCLUDED.season,
                round = COALESCE(EXCLUDED.round, matches.round),
                stage = COALESCE(EXCLUDED.stage, matches.stage),
                venue = COALESCE(EXCLUDED.venue, matches.venue),
                date_utc = COALESCE($7::TIMESTAMPTZ, matches.date_utc),
                status = EXCLUDED.status,
                home_team_id = EXCLUDED.home_team_id,
                away_team_id = EXCLUDED.away_team_id,
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                minute = EXCLUDED.minute,
                updated_at = NOW()
            RETURNING (xmax = 0) AS inserted",
    )
    .bind(fixture.external_id)
    .bind(fixture.league_id)
    .bind(fixture.season)
    .bind(fixture.round.as_deref())
    .bind(fixture.stage.as_deref())
    .bind(fixture.venue.as_deref())
    .bind(fixture.date_utc)
    .bind(fixture.status.as_str())
    .bind(fixture.home_team_id)
    .bind(fixture.away_team_id)
    .bind(fixture.home_score)
    .bind(fixture.away_score)
    .bind(fixture.minute)
    .fetch_one(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!(
            "Failed to upsert match {}: {}",
            fixture.external_id, e
        ))
    })?;

    Ok(inserted)
}
