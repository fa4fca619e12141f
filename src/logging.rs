use std::sync::Once;

use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

/// Initializes global logging to stderr.
///
/// Stdout is reserved for the completion message. The filter defaults to
/// `warn` and can be overridden with `RUST_LOG`. Repeated calls are no-ops.
pub fn init_logging() {
    LOGGING_INIT.call_once(|| {
        let result = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        if let Err(e) = result {
            eprintln!("Warning: logger initialization failed: {}", e);
        }
    });
}

fn default_env_filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    }
}
