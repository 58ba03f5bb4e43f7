use std::time::Duration;

use anyhow::{Context, bail};

use wrr_scheduler::{Candidate, CellId, Cursor};

use crate::cli::Cli;
use crate::roster::{demo_roster, load_roster};

/// Validated simulator settings.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub ttis: u64,

    /// RB units refilled at the start of every TTI.
    pub rb_budget: u32,

    /// Zero means no pacing.
    pub tti_interval: Duration,

    pub roster: Vec<Candidate>,
    pub start_cursor: Cursor,
    pub cell: CellId,

    pub json_logs: bool,
}

impl SimConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        if cli.ttis == 0 {
            bail!("--ttis must be at least 1");
        }

        let roster = match &cli.roster {
            Some(path) => load_roster(path)
                .with_context(|| format!("loading roster from {}", path.display()))?,
            None => demo_roster(),
        };

        let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";

        Ok(Self {
            ttis: cli.ttis,
            rb_budget: cli.rb_budget,
            tti_interval: Duration::from_millis(cli.tti_interval_ms),
            roster,
            start_cursor: Cursor::new(cli.start_cursor),
            cell: cli.cell,
            json_logs: cli.json_logs || is_production,
        })
    }
}
