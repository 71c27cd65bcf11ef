use serde::{Deserialize, Serialize};

use super::{Axis, AxisSurface, TickLabelStyle};
use crate::error::{AxisError, AxisResult};

/// Axis state held by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedAxis {
    pub data_range: (f64, f64),
    pub limits: (f64, f64),
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
    pub label_style: Option<TickLabelStyle>,
    /// Number of limit/tick/label writes received.
    pub mutation_count: usize,
}

impl Default for RecordedAxis {
    fn default() -> Self {
        Self {
            data_range: (f64::NAN, f64::NAN),
            limits: (0.0, 1.0),
            ticks: Vec::new(),
            labels: Vec::new(),
            label_style: None,
            mutation_count: 0,
        }
    }
}

/// In-memory surface used by tests and headless tuning.
///
/// It keeps whatever the tuning operations write so callers can inspect the
/// resulting ticks, limits and labels without a plotting backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    horizontal: RecordedAxis,
    vertical: RecordedAxis,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plotted data range from raw values, ignoring NaN samples.
    #[must_use]
    pub fn with_data(mut self, axis: Axis, values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .fold((f64::NAN, f64::NAN), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        self.axis_mut(axis).data_range = (min, max);
        self
    }

    #[must_use]
    pub fn with_data_range(mut self, axis: Axis, min: f64, max: f64) -> Self {
        self.axis_mut(axis).data_range = (min, max);
        self
    }

    #[must_use]
    pub fn with_limits(mut self, axis: Axis, lo: f64, hi: f64) -> Self {
        self.axis_mut(axis).limits = (lo, hi);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, axis: Axis, ticks: &[f64]) -> Self {
        self.axis_mut(axis).ticks = ticks.to_vec();
        self
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> &RecordedAxis {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    #[must_use]
    pub fn labels(&self, axis: Axis) -> &[String] {
        &self.axis(axis).labels
    }

    #[must_use]
    pub fn mutation_count(&self, axis: Axis) -> usize {
        self.axis(axis).mutation_count
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to serialize recorded surface: {e}"))
        })
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut RecordedAxis {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

impl AxisSurface for RecordingSurface {
    fn data_range(&self, axis: Axis) -> (f64, f64) {
        self.axis(axis).data_range
    }

    fn limits(&self, axis: Axis) -> (f64, f64) {
        self.axis(axis).limits
    }

    fn ticks(&self, axis: Axis) -> Vec<f64> {
        self.axis(axis).ticks.clone()
    }

    fn set_limits(&mut self, axis: Axis, limits: (f64, f64)) {
        let state = self.axis_mut(axis);
        state.limits = limits;
        state.mutation_count += 1;
    }

    fn set_ticks(&mut self, axis: Axis, ticks: &[f64]) {
        let state = self.axis_mut(axis);
        state.ticks = ticks.to_vec();
        state.mutation_count += 1;
    }

    fn set_tick_labels(&mut self, axis: Axis, labels: &[String], style: TickLabelStyle) {
        let state = self.axis_mut(axis);
        state.labels = labels.to_vec();
        state.label_style = Some(style);
        state.mutation_count += 1;
    }
}
