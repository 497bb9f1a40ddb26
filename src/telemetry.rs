//! Telemetry helpers for hosts embedding `date-axis`.
//!
//! Tick planning emits `tracing` events under the `date_axis` target
//! (interval selection, edge trims, range transitions). Hosts either call
//! one of the init helpers here or wire their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset: planner decisions at `debug`,
/// everything else from the host at `warn`.
pub const DEFAULT_TRACING_FILTER: &str = "warn,date_axis=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_TRACING_FILTER`] when the variable is unset.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_FILTER)
}

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `fallback_filter` applies only when `RUST_LOG` is unset or invalid.
/// Returns `false` when the feature is disabled, the filter does not parse,
/// or a global subscriber was already installed by the host.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
