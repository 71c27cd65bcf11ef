//! Axis-tuning surface: the axis tag, the surface contract and the tuning
//! operations that compose padding, tick selection and label formatting.

mod axis;
mod axis_config;
mod axis_tuning;
mod recording_surface;
mod surface;

pub use axis::Axis;
pub use axis_config::{
    COMPACT_INTEGER_MIN_SPAN, LimitsByTickConfig, NiceTicksConfig, ValueAxisConfig,
};
pub use axis_tuning::{
    TuneOutcome, axis_limits_by_ticks, make_ticks_nicer, nice_axis_ticks, reduce_axis_ticks,
    tune_value_axis,
};
pub use recording_surface::{RecordedAxis, RecordingSurface};
pub use surface::{AxisSurface, AxisUpdate, MutationOrder, TickLabelStyle};
