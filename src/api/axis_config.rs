use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::TickLabelStyle;
use crate::core::{NiceIntervals, RangePadding, SnappedLimitsConfig, TickSelector, TickStrategy};
use crate::error::{AxisError, AxisResult};
use crate::format::{NumberDisplayMode, NumberFormat};

/// Span at or above which automatic labels switch to compact integers.
pub const COMPACT_INTEGER_MIN_SPAN: f64 = 10.0;

/// Settings for nice-interval tick selection on one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiceTicksConfig {
    /// Tick count the selector aims for, including both ends.
    pub target_tick_count: usize,
    #[serde(flatten)]
    pub padding: RangePadding,
    pub strategy: TickStrategy,
    /// Overrides the strategy's default interval family.
    pub intervals: Option<Vec<f64>>,
}

impl Default for NiceTicksConfig {
    fn default() -> Self {
        Self {
            target_tick_count: 5,
            padding: RangePadding::default(),
            strategy: TickStrategy::MagnitudeBracketing,
            intervals: None,
        }
    }
}

impl NiceTicksConfig {
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = parse_json(input, "nice ticks")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.target_tick_count == 0 {
            return Err(AxisError::InvalidConfig(
                "target tick count must be > 0".to_owned(),
            ));
        }
        self.padding.validate()?;
        self.selector()?;
        Ok(())
    }

    /// Builds the selector described by this configuration.
    pub fn selector(&self) -> AxisResult<TickSelector> {
        let selector = TickSelector::new(self.strategy);
        match &self.intervals {
            Some(intervals) => Ok(selector.with_intervals(NiceIntervals::new(
                intervals.iter().copied(),
            )?)),
            None => Ok(selector),
        }
    }
}

/// Settings for interval-snapped value axes with formatted labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAxisConfig {
    /// Explicit label mode; automatic selection when `None`.
    pub display: Option<NumberDisplayMode>,
    /// Percent labels; take precedence over currency.
    pub percent: bool,
    pub currency: bool,
    /// Halve visible ticks until at most this many remain.
    pub max_tick_count: Option<usize>,
    pub show_trailing_zeroes: bool,
    /// Keep a whitespace interval between data bounds and limits.
    pub limit_buffer: bool,
    pub force_zero_min: bool,
    pub label_style: TickLabelStyle,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            display: None,
            percent: false,
            currency: false,
            max_tick_count: None,
            show_trailing_zeroes: false,
            limit_buffer: true,
            force_zero_min: false,
            label_style: TickLabelStyle::default(),
        }
    }
}

impl ValueAxisConfig {
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = parse_json(input, "value axis")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.max_tick_count == Some(0) {
            return Err(AxisError::InvalidConfig(
                "max tick count must be > 0".to_owned(),
            ));
        }
        self.label_style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn snapped_limits(&self) -> SnappedLimitsConfig {
        SnappedLimitsConfig {
            buffer: self.limit_buffer,
            force_zero_min: self.force_zero_min,
        }
    }

    /// Resolves the label format for a data span.
    ///
    /// Without an explicit mode: percent when requested, compact integers
    /// for spans of at least ten, floats otherwise.
    #[must_use]
    pub fn number_format(&self, data_span: f64) -> NumberFormat {
        let mode = self.display.unwrap_or(if self.percent {
            NumberDisplayMode::Percent
        } else if data_span >= COMPACT_INTEGER_MIN_SPAN {
            NumberDisplayMode::CompactInteger
        } else {
            NumberDisplayMode::Float
        });
        NumberFormat {
            mode,
            currency: self.currency && mode != NumberDisplayMode::Percent,
            show_trailing_zeroes: self.show_trailing_zeroes,
        }
    }
}

/// Settings for extending an axis limit by whole tick gaps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsByTickConfig {
    /// Extra value the axis must reach even if no data is plotted there.
    pub arbitrary_max: Option<f64>,
}

impl LimitsByTickConfig {
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = parse_json(input, "limits-by-tick")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(self) -> AxisResult<Self> {
        if let Some(value) = self.arbitrary_max {
            if !value.is_finite() {
                return Err(AxisError::InvalidConfig(
                    "arbitrary max must be finite".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

fn parse_json<T: DeserializeOwned>(input: &str, name: &str) -> AxisResult<T> {
    serde_json::from_str(input)
        .map_err(|e| AxisError::InvalidConfig(format!("failed to parse {name} config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{NiceTicksConfig, ValueAxisConfig};
    use crate::core::TickStrategy;
    use crate::format::NumberDisplayMode;

    #[test]
    fn nice_ticks_config_parses_flattened_padding() {
        let config = NiceTicksConfig::from_json_str(
            r#"{"target_tick_count": 6, "min_buffer_ratio": 0.1, "strategy": "bidirectional_refinement"}"#,
        )
        .expect("parse");
        assert_eq!(config.target_tick_count, 6);
        assert_eq!(config.padding.min_buffer_ratio, 0.1);
        assert_eq!(config.padding.max_buffer_ratio, 0.025);
        assert_eq!(config.strategy, TickStrategy::BidirectionalRefinement);
    }

    #[test]
    fn zero_target_and_unknown_mode_are_rejected() {
        assert!(NiceTicksConfig::from_json_str(r#"{"target_tick_count": 0}"#).is_err());
        assert!(ValueAxisConfig::from_json_str(r#"{"display": "roman"}"#).is_err());
        assert!(NiceTicksConfig::from_json_str(r#"{"intervals": []}"#).is_err());
    }

    #[test]
    fn percent_takes_precedence_over_currency() {
        let config = ValueAxisConfig {
            percent: true,
            currency: true,
            ..ValueAxisConfig::default()
        };
        let format = config.number_format(500.0);
        assert_eq!(format.mode, NumberDisplayMode::Percent);
        assert!(!format.currency);
    }

    #[test]
    fn automatic_mode_follows_data_span() {
        let config = ValueAxisConfig::default();
        assert_eq!(
            config.number_format(10.0).mode,
            NumberDisplayMode::CompactInteger
        );
        assert_eq!(config.number_format(9.5).mode, NumberDisplayMode::Float);
    }
}
