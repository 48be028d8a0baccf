use football_data_be::models::standings::{StandingRow, assign_ranks};

fn row(team_id: i32, name: &str, points: i64, gd: i64, gf: i64) -> StandingRow {
    StandingRow {
        rank: 0,
        team_id,
        team_name: name.into(),
        played: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        gf,
        ga: gf - gd,
        gd,
        points,
        logo: None,
    }
}

#[test]
fn test_assign_ranks_sequential() {
    let mut rows = vec![
        row(1, "Paris", 30, 20, 40),
        row(2, "Monaco", 25, 10, 30),
        row(3, "Lille", 20, 5, 25),
    ];
    assign_ranks(&mut rows);
    let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_assign_ranks_shares_ties() {
    let mut rows = vec![
        row(1, "Brest", 30, 10, 30),
        row(2, "Lens", 30, 10, 30),
        row(3, "Lyon", 30, 10, 28),
        row(4, "Nice", 12, 0, 10),
    ];
    assign_ranks(&mut rows);
    let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 1, 3, 4]);
}

#[test]
fn test_assign_ranks_empty_and_no_matches() {
    let mut rows: Vec<StandingRow> = Vec::new();
    assign_ranks(&mut rows);
    assert!(rows.is_empty());

    let mut rows = vec![row(1, "Auxerre", 0, 0, 0), row(2, "Metz", 0, 0, 0)];
    assign_ranks(&mut rows);
    assert!(rows.iter().all(|r| r.rank == 1));
}

#[test]
fn test_standing_row_json_shape() {
    let mut rows = vec![row(9, "Paris", 3, 2, 2)];
    assign_ranks(&mut rows);
    let value = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(value["rank"], 1);
    assert_eq!(value["teamId"], 9);
    assert_eq!(value["teamName"], "Paris");
    assert_eq!(value["points"], 3);
    assert!(value["logo"].is_null());
}
