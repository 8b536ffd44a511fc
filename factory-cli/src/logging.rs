use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_FILTER: &str = "warn";

/// Parses the configured directives, falling back to [`FALLBACK_FILTER`].
/// The parse error is handed back so it can be reported once logging is up.
fn build_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    }
}

pub fn init_logging(directives: &str) {
    let (filter, rejected) = build_filter(directives);

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .json()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);

    if let Some(e) = rejected {
        warn!(filter = directives, error = %e, "invalid FACTORY_LOG, using {}", FALLBACK_FILTER);
    }
}
