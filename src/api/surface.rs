use serde::{Deserialize, Serialize};

use super::Axis;
use crate::error::{AxisError, AxisResult};

/// Font directive shared by every tick label of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickLabelStyle {
    pub font_size: f64,
    pub bold: bool,
}

impl Default for TickLabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            bold: true,
        }
    }
}

impl TickLabelStyle {
    pub fn validate(self) -> AxisResult<Self> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "tick label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Contract implemented by any plotting surface whose axes can be tuned.
///
/// Tuning operations only read the data range, limits and ticks, and write
/// back through the setters; nothing else about the surface is touched.
pub trait AxisSurface {
    /// Raw data range plotted on `axis`; NaN bounds mean "no data".
    fn data_range(&self, axis: Axis) -> (f64, f64);

    fn limits(&self, axis: Axis) -> (f64, f64);

    fn ticks(&self, axis: Axis) -> Vec<f64>;

    fn set_limits(&mut self, axis: Axis, limits: (f64, f64));

    fn set_ticks(&mut self, axis: Axis, ticks: &[f64]);

    fn set_tick_labels(&mut self, axis: Axis, labels: &[String], style: TickLabelStyle);
}

/// Order in which an [`AxisUpdate`] writes ticks and limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOrder {
    TicksThenLimits,
    LimitsThenTicks,
}

/// One logical axis update, fully computed before the surface is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisUpdate {
    pub ticks: Vec<f64>,
    pub limits: (f64, f64),
    pub labels: Option<(Vec<String>, TickLabelStyle)>,
    pub order: MutationOrder,
}

impl AxisUpdate {
    #[must_use]
    pub fn new(ticks: Vec<f64>, limits: (f64, f64), order: MutationOrder) -> Self {
        Self {
            ticks,
            limits,
            labels: None,
            order,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>, style: TickLabelStyle) -> Self {
        self.labels = Some((labels, style));
        self
    }

    pub fn apply<S: AxisSurface + ?Sized>(&self, surface: &mut S, axis: Axis) {
        match self.order {
            MutationOrder::TicksThenLimits => {
                surface.set_ticks(axis, &self.ticks);
                surface.set_limits(axis, self.limits);
            }
            MutationOrder::LimitsThenTicks => {
                surface.set_limits(axis, self.limits);
                surface.set_ticks(axis, &self.ticks);
            }
        }
        if let Some((labels, style)) = &self.labels {
            surface.set_tick_labels(axis, labels, *style);
        }
    }
}
