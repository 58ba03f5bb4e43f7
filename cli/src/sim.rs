//! Multi-TTI simulation driver.
//!
//! Every TTI refills the RB budget, runs one scheduler pass for the
//! configured cell and folds the result into a share tally.

use tracing::info;

use common::logger::{TraceId, child_span, root_span};
use wrr_scheduler::metrics::{Counters, CountersSnapshot};
use wrr_scheduler::{Cursor, RbBudget, SchedulerEngine, ShareTally};

use crate::config::SimConfig;

#[derive(Debug)]
pub struct SimReport {
    pub tally: ShareTally,
    pub counters: CountersSnapshot,
    pub final_cursor: Cursor,
}

pub async fn run_simulation(cfg: &SimConfig) -> SimReport {
    let n = cfg.roster.len();
    let mut engine = SchedulerEngine::new(Counters::default());
    engine.set_cursor(cfg.cell, cfg.start_cursor);

    let mut budget = RbBudget::new(cfg.rb_budget);
    let mut tally = ShareTally::new();

    // tokio intervals reject a zero period; no pacing means back-to-back TTIs.
    let mut ticker = (!cfg.tti_interval.is_zero()).then(|| tokio::time::interval(cfg.tti_interval));

    for tti in 0..cfg.ttis {
        if let Some(t) = ticker.as_mut() {
            t.tick().await;
        }

        let trace_id = TraceId::new();
        let span = root_span("wrr_tti", &trace_id, tti);
        span.record("cell", cfg.cell);

        span.in_scope(|| {
            budget.refill(cfg.rb_budget);
            let start = engine.cursor(cfg.cell).normalized(n);

            let out = engine.on_tti(cfg.cell, &cfg.roster, &mut budget);

            info!(
                start = %start,
                next = %out.next_cursor,
                attempts = out.attempts,
                grants = out.grants,
                remaining_budget = budget.remaining(),
                "tti done"
            );

            tally.record(&out);
        });
    }

    SimReport {
        tally,
        counters: engine.counters().snapshot(),
        final_cursor: engine.cursor(cfg.cell),
    }
}

/// Print per-UE grant shares.
pub fn print_report(cfg: &SimConfig, report: &SimReport) {
    let _span = child_span("report").entered();

    println!("\nTTIs: {}  RB budget/TTI: {}", report.tally.passes(), cfg.rb_budget);
    println!("{:>8} {:>6} {:>9} {:>7} {:>7}", "UE", "weight", "attempts", "grants", "share");

    for (ue_id, t) in report.tally.iter() {
        let weight = cfg
            .roster
            .iter()
            .find(|c| c.id == ue_id)
            .map(|c| c.weight)
            .unwrap_or_default();
        println!(
            "{:>8} {:>6} {:>9} {:>7} {:>6.1}%",
            ue_id,
            weight,
            t.attempts,
            t.grants,
            report.tally.share(ue_id) * 100.0
        );
    }

    println!("next cursor: {}", report.final_cursor);

    info!(
        passes = report.counters.passes,
        starved = report.counters.starved,
        attempts = report.counters.attempts,
        grants = report.counters.grants,
        "simulation finished"
    );
}
