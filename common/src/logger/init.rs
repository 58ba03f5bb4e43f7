use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once. Later calls are no-ops.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. `json` switches to
/// machine-readable output for production deployments.
pub fn init_logger(service_name: &'static str, json: bool) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_target(true) // <-- shows crate/module path
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE);

        if json {
            builder.json().init();
        } else {
            builder.init();
        }

        tracing::info!(service = service_name, json, "logger initialized");
    });
}
