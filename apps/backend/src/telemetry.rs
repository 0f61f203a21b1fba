use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,tictactoe_backend=info,actix_web=info,sqlx=warn,sea_orm=warn";

/// JSON logs to stdout, one object per event. `RUST_LOG` overrides the
/// default filter.
///
/// Event fields are flattened to the top level and the enclosing `request`
/// span is attached, so `trace_id` and `route` sit on every line logged
/// while serving a request.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
