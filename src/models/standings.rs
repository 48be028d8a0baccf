use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    #[sqlx(skip)]
    pub rank: u32,
    pub team_id: i32,
    pub team_name: String,
    pub played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub gf: i64,
    pub ga: i64,
    pub gd: i64,
    pub points: i64,
    pub logo: Option<String>,
}

/// Rows arrive ordered by points, goal difference, goals for, then name.
/// Ranks are shared between rows level on the first three.
pub fn assign_ranks(rows: &mut [StandingRow]) {
    let mut previous: Option<(i64, i64, i64)> = None;
    let mut current_rank = 0;

    for (index, row) in rows.iter_mut().enumerate() {
        let key = (row.points, row.gd, row.gf);
        if previous != Some(key) {
            current_rank = (index + 1) as u32;
            previous = Some(key);
        }
        row.rank = current_rank;
    }
}
