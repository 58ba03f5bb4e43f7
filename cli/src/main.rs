mod cli;
mod config;
mod roster;
mod sim;

use clap::Parser;

use cli::Cli;
use common::logger::init_logger;
use config::SimConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = SimConfig::from_cli(Cli::parse())?;

    init_logger("wrr-sim", cfg.json_logs);

    tracing::info!(
        ues = cfg.roster.len(),
        ttis = cfg.ttis,
        rb_budget = cfg.rb_budget,
        cell = cfg.cell,
        "starting simulation"
    );

    let report = sim::run_simulation(&cfg).await;
    sim::print_report(&cfg, &report);

    Ok(())
}
