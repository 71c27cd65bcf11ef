use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Proportional whitespace buffers applied around a raw data range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePadding {
    /// Fraction of the data span added below the minimum.
    pub min_buffer_ratio: f64,
    /// Fraction of the data span added above the maximum.
    pub max_buffer_ratio: f64,
    /// When `false`, a non-negative minimum is never padded below zero.
    pub allow_negative_min: bool,
}

impl Default for RangePadding {
    fn default() -> Self {
        Self {
            min_buffer_ratio: 0.025,
            max_buffer_ratio: 0.025,
            allow_negative_min: false,
        }
    }
}

impl RangePadding {
    #[must_use]
    pub fn none() -> Self {
        Self {
            min_buffer_ratio: 0.0,
            max_buffer_ratio: 0.0,
            allow_negative_min: false,
        }
    }

    pub fn validate(self) -> AxisResult<Self> {
        if !self.min_buffer_ratio.is_finite()
            || !self.max_buffer_ratio.is_finite()
            || self.min_buffer_ratio < 0.0
            || self.max_buffer_ratio < 0.0
        {
            return Err(AxisError::InvalidConfig(
                "range buffer ratios must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Pads `[min, max]` with this buffer configuration.
    ///
    /// NaN bounds mean "no data" and are returned unchanged.
    pub fn pad(self, min: f64, max: f64) -> AxisResult<(f64, f64)> {
        pad_range(min, max, self)
    }
}

pub fn pad_range(min: f64, max: f64, padding: RangePadding) -> AxisResult<(f64, f64)> {
    if min.is_nan() || max.is_nan() {
        return Ok((min, max));
    }
    let padding = padding.validate()?;
    if !min.is_finite() || !max.is_finite() {
        return Err(AxisError::InvalidRange(
            "range bounds must be finite".to_owned(),
        ));
    }
    if min > max {
        return Err(AxisError::InvalidRange(format!(
            "range min must be <= max (min={min}, max={max})"
        )));
    }

    let span = max - min;
    let mut padded_min = min - span * padding.min_buffer_ratio;
    if padded_min < 0.0 && min >= 0.0 && !padding.allow_negative_min {
        padded_min = min;
    }
    let padded_max = max + span * padding.max_buffer_ratio;
    Ok((padded_min, padded_max))
}
