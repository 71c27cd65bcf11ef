pub mod axis_limits;
pub mod nice_interval;
pub mod range_padding;
pub mod tick_adjust;

pub use axis_limits::{SnappedLimitsConfig, snap_interval, snap_limits};
pub use nice_interval::{
    FRACTIONAL_NICE_INTERVALS, INTEGER_NICE_INTERVALS, NiceIntervals, TickSelection, TickSelector,
    TickStrategy, generate_ticks, select_ticks,
};
pub use range_padding::{RangePadding, pad_range};
pub use tick_adjust::{TickExtension, extend_limits_by_tick, infer_tick_gap, reduce_visible_ticks};
