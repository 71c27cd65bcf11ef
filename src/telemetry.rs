//! Opt-in subscriber setup for the events `nice-axis` emits.
//!
//! Events, by target:
//! - `nice_axis::core::nice_interval`: `trace` for every interval inside the
//!   bracket window, every refinement step and every candidate tick count;
//!   `debug` for the selected interval with `strategy`, `interval` and
//!   `tick_count` fields.
//! - `nice_axis::core::axis_limits`: `debug` when a zero lower limit cannot
//!   be applied.
//! - `nice_axis::api::axis_tuning`: `debug` for applied updates and no-data
//!   axes; `warn` with an `error` field when an uneven tick gap skips a limit
//!   extension.

/// Filter used when `RUST_LOG` is unset: only skipped adjustments are shown.
pub const DEFAULT_FILTER: &str = "nice_axis=warn";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when it is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback filter,
/// e.g. `"nice_axis::core=trace"` to follow the interval search.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILTER, init_tracing_with_filter};

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(DEFAULT_FILTER.starts_with("nice_axis"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn disabled_feature_never_installs_a_subscriber() {
        assert!(!init_tracing_with_filter("nice_axis=trace"));
    }
}
