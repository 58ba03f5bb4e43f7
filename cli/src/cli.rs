use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "wrr-sim", version, about = "Weighted round robin TTI simulator")]
pub struct Cli {
    /// Number of TTIs to simulate
    #[clap(long, env = "WRR_TTIS", default_value_t = 5)]
    pub ttis: u64,

    /// Resource-block units available in every TTI
    #[clap(long, env = "WRR_RB_BUDGET", default_value_t = 6)]
    pub rb_budget: u32,

    /// Wall-clock spacing between TTIs (0 runs back-to-back)
    #[clap(long, env = "WRR_TTI_INTERVAL_MS", default_value_t = 0)]
    pub tti_interval_ms: u64,

    /// JSON roster file; the built-in demo roster is used when absent
    #[clap(long, env = "WRR_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Cursor the first TTI starts from (any integer)
    #[clap(long, default_value_t = 0, allow_hyphen_values = true)]
    pub start_cursor: i64,

    /// Cell the simulated roster belongs to
    #[clap(long, default_value_t = 0)]
    pub cell: u32,

    /// Emit JSON logs (also enabled by APP_ENV=production)
    #[clap(long)]
    pub json_logs: bool,
}
