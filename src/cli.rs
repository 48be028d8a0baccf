//! Command line definitions. `serve` is the default when no subcommand is given.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(
    name = "football-data",
    about = "Football data API, back office and import jobs"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (JSON API and back office).
    Serve,

    /// Import provider data into the database.
    Import {
        #[clap(subcommand)]
        cmd: ImportCmd,
    },

    /// Scheduled synchronisation.
    Sync {
        #[clap(subcommand)]
        cmd: SyncCmd,
    },

    /// Fix stored data against the provider.
    Repair {
        #[clap(subcommand)]
        cmd: RepairCmd,
    },

    /// Fill empty slugs on countries, leagues and teams.
    Slugify,

    /// Inspect what the provider returns for a stored fixture.
    Debug {
        #[clap(subcommand)]
        cmd: DebugCmd,
    },

    /// Check the provider credentials and payload shapes.
    Test {
        #[clap(subcommand)]
        cmd: TestCmd,
    },

    /// Back-office accounts.
    User {
        #[clap(subcommand)]
        cmd: UserCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum ImportCmd {
    /// Import all provider countries.
    Countries,

    /// Import the leagues of one country.
    Leagues {
        /// ISO2 country code, e.g. FR.
        #[clap(long)]
        country: String,
    },

    /// Import the teams of a league season.
    Teams {
        /// Provider league id.
        #[clap(long)]
        league: i32,

        /// Defaults to the current UTC year.
        #[clap(long)]
        season: Option<i32>,
    },

    /// Import the matches of a league season, optionally for one day.
    Matches {
        /// Provider league id.
        #[clap(long)]
        league: i32,

        #[clap(long)]
        season: Option<i32>,

        /// YYYY-MM-DD (UTC).
        #[clap(long)]
        date: Option<String>,

        /// Also store scores of live matches.
        #[clap(long)]
        include_live: bool,

        /// Refetch finished matches that are missing a score.
        #[clap(long)]
        patch_finished: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SyncCmd {
    /// Import the day's matches for every selected league.
    Daily {
        /// Only leagues of this ISO2 country.
        #[clap(long)]
        country: Option<String>,

        /// Comma separated provider league ids.
        #[clap(long)]
        leagues: Option<String>,

        /// YYYY-MM-DD (UTC), defaults to today.
        #[clap(long)]
        date: Option<String>,

        /// Overrides each league's current season.
        #[clap(long)]
        season: Option<i32>,

        /// Seconds to wait between leagues.
        #[clap(long, default_value_t = 0.25)]
        sleep: f64,

        /// List the leagues without importing.
        #[clap(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum RepairCmd {
    /// Re-check stored scores against the provider.
    MatchScores {
        /// How many days back to scan.
        #[clap(long, default_value_t = 180)]
        days: u64,

        /// Internal league id.
        #[clap(long)]
        league: Option<i32>,

        /// Only rows with a missing score or 0-0.
        #[clap(long)]
        only_missing: bool,

        #[clap(long)]
        include_live: bool,

        #[clap(long)]
        limit: Option<i64>,

        #[clap(long)]
        dry_run: bool,

        /// Log every row.
        #[clap(long, short)]
        verbose: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum DebugCmd {
    /// Print the provider payload for one stored fixture.
    Match {
        /// Internal fixture id.
        #[clap(long)]
        fixture: i32,

        /// Provider fixture id, overrides the stored one.
        #[clap(long)]
        ext: Option<i32>,

        /// YYYY-MM-DD, overrides the stored kickoff day.
        #[clap(long)]
        date: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TestCmd {
    /// Call every provider endpoint once and print samples.
    Provider {
        #[clap(long, default_value = "FR")]
        country: String,

        /// Provider league id, defaults to the first league of the country.
        #[clap(long)]
        league: Option<i32>,

        #[clap(long)]
        season: Option<i32>,

        /// YYYY-MM-DD
        #[clap(long)]
        date: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCmd {
    /// Create a user, or reset the password of an existing one.
    Create {
        #[clap(long)]
        email: String,

        #[clap(long)]
        password: String,

        /// Grant ROLE_ADMIN.
        #[clap(long)]
        admin: bool,
    },
}
