use chrono::Utc;
use clap::Parser;
use football_data_be::{
    build_state,
    cli::{Cli, Commands, DebugCmd, ImportCmd, RepairCmd, SyncCmd, TestCmd, UserCmd},
    config::AppConfig,
    errors::AppError,
    init_tracing,
    jobs::{
        countries::import_countries,
        debug::{DebugMatchParams, debug_match},
        leagues::import_leagues,
        matches::{ImportMatchesParams, import_matches},
        parse_date,
        repair::{RepairParams, repair_match_scores},
        slugify::fill_missing_slugs,
        smoke::{SmokeTestParams, smoke_test_provider},
        sync::{SyncDailyParams, parse_league_ids, sync_daily},
        teams::import_teams,
        users::create_or_update_user,
    },
    start_server,
};
use std::{process::ExitCode, time::Duration};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli.command.unwrap_or(Commands::Serve)).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` when the command ran but reported a failure.
async fn run(command: Commands) -> Result<bool, AppError> {
    let config = AppConfig::from_env()?;

    if let Commands::Serve = command {
        start_server(config).await?;
        return Ok(true);
    }

    let state = build_state(config).await?;
    let postgres = state.postgres.clone();
    let provider = state.provider.as_ref();

    match command {
        Commands::Serve => {}

        Commands::Import { cmd } => match cmd {
            ImportCmd::Countries => {
                println!("{}", import_countries(postgres, provider).await?);
            }
            ImportCmd::Leagues { country } => {
                println!("{}", import_leagues(&country, postgres, provider).await?);
            }
            ImportCmd::Teams { league, season } => {
                println!("{}", import_teams(league, season, postgres, provider).await?);
            }
            ImportCmd::Matches {
                league,
                season,
                date,
                include_live,
                patch_finished,
            } => {
                let params = ImportMatchesParams {
                    league_external_id: league,
                    season,
                    date,
                    include_live,
                    patch_finished,
                };
                println!("{}", import_matches(&params, postgres, provider).await?);
            }
        },

        Commands::Sync {
            cmd:
                SyncCmd::Daily {
                    country,
                    leagues,
                    date,
                    season,
                    sleep,
                    dry_run,
                },
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Utc::now().date_naive(),
            };
            let params = SyncDailyParams {
                country,
                leagues: leagues.as_deref().map(parse_league_ids).unwrap_or_default(),
                date,
                season,
                sleep: Duration::try_from_secs_f64(sleep.max(0.0)).unwrap_or_default(),
                dry_run,
            };
            let summary = sync_daily(&params, postgres, provider).await?;
            println!("{}", summary);
            return Ok(summary.is_success());
        }

        Commands::Repair {
            cmd:
                RepairCmd::MatchScores {
                    days,
                    league,
                    only_missing,
                    include_live,
                    limit,
                    dry_run,
                    verbose,
                },
        } => {
            let params = RepairParams {
                days,
                league_id: league,
                only_missing,
                include_live,
                limit,
                dry_run,
                verbose,
            };
            println!("{}", repair_match_scores(&params, postgres, provider).await?);
        }

        Commands::Slugify => {
            println!("{}", fill_missing_slugs(postgres).await?);
        }

        Commands::Debug {
            cmd: DebugCmd::Match { fixture, ext, date },
        } => {
            let params = DebugMatchParams {
                fixture_id: fixture,
                external_id: ext,
                date: date.as_deref().map(parse_date).transpose()?,
            };
            let report = debug_match(&params, postgres, provider).await?;
            let pretty = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", pretty);
            return Ok(report.snapshot.is_some());
        }

        Commands::Test {
            cmd:
                TestCmd::Provider {
                    country,
                    league,
                    season,
                    date,
                },
        } => {
            let params = SmokeTestParams {
                country,
                league,
                season,
                date,
            };
            for section in smoke_test_provider(&params, provider).await? {
                println!("{}\n", section);
            }
        }

        Commands::User {
            cmd: UserCmd::Create {
                email,
                password,
                admin,
            },
        } => {
            let (user, created) = create_or_update_user(&email, &password, admin, postgres).await?;
            let verb = if created { "Created" } else { "Updated" };
            println!("{} user {} [{}]", verb, user.email, user.roles.join(", "));
        }
    }

    Ok(true)
}
