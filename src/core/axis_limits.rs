use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AxisError, AxisResult};

/// Controls for axis limits snapped to a power-of-ten interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappedLimitsConfig {
    /// Push a limit out by one more interval when it lands on the data bound.
    pub buffer: bool,
    /// Pin the lower limit to zero regardless of the data minimum, unless
    /// the upper limit is not above zero.
    pub force_zero_min: bool,
}

impl Default for SnappedLimitsConfig {
    fn default() -> Self {
        Self {
            buffer: true,
            force_zero_min: false,
        }
    }
}

/// Largest power of ten `10^k` with `span >= 2 * 10^k`.
#[must_use]
pub fn snap_interval(span: f64) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 {
        return None;
    }
    let magnitude = span.log10().floor() as i32;
    let mut interval = 10_f64.powi(magnitude);
    while span - interval < interval {
        interval /= 10.0;
    }
    Some(interval)
}

/// Computes axis limits snapped outward to the range's power-of-ten interval.
///
/// Returns `Ok(None)` for NaN bounds and zero-width ranges; the caller leaves
/// its current limits in place.
pub fn snap_limits(
    data_min: f64,
    data_max: f64,
    config: SnappedLimitsConfig,
) -> AxisResult<Option<(f64, f64)>> {
    if data_min.is_nan() || data_max.is_nan() {
        return Ok(None);
    }
    if !data_min.is_finite() || !data_max.is_finite() {
        return Err(AxisError::InvalidRange(
            "data range bounds must be finite".to_owned(),
        ));
    }
    if data_min > data_max {
        return Err(AxisError::InvalidRange(format!(
            "data min must be <= max (min={data_min}, max={data_max})"
        )));
    }
    let Some(interval) = snap_interval(data_max - data_min) else {
        return Ok(None);
    };

    let mut lo = data_min - data_min.rem_euclid(interval);
    if config.buffer && is_close(lo, data_min) {
        lo -= interval;
    }

    let mut hi = data_max - data_max.rem_euclid(interval) + interval;
    if config.buffer && is_close(hi, data_max) {
        hi += interval;
    }

    // Zero can only be the lower limit while the upper limit stays above it.
    if config.force_zero_min {
        if hi > 0.0 {
            lo = 0.0;
        } else {
            debug!(lo, hi, "limits below zero, ignoring zero lower limit");
        }
    }
    Ok(Some((lo, hi)))
}

fn is_close(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() <= 1e-9 * lhs.abs().max(rhs.abs())
}
