//! Telemetry helpers for the `fbchart` binary and embedding applications.
//!
//! Tracing setup stays explicit and opt-in. Library code only emits events;
//! the binary calls [`init_default_tracing`] once at startup.

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "FBCHART_LOG";

/// Initializes a compact stderr `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// The filter comes from `FBCHART_LOG`, then `RUST_LOG`, then `warn`.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
