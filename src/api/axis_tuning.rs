use tracing::{debug, warn};

use super::{
    Axis, AxisSurface, AxisUpdate, LimitsByTickConfig, MutationOrder, NiceTicksConfig,
    ValueAxisConfig,
};
use crate::core::{
    TickSelection, extend_limits_by_tick, generate_ticks, reduce_visible_ticks, snap_interval,
    snap_limits,
};
use crate::error::{AxisError, AxisResult};
use crate::format::format_values;

/// What a tuning call did to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TuneOutcome {
    /// The axis received the contained update.
    Applied(AxisUpdate),
    /// The axis has no data; nothing was written.
    NoData,
    /// A recoverable condition aborted the adjustment; nothing was written.
    Skipped(AxisError),
}

impl TuneOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    #[must_use]
    pub fn update(&self) -> Option<&AxisUpdate> {
        match self {
            Self::Applied(update) => Some(update),
            Self::NoData | Self::Skipped(_) => None,
        }
    }
}

/// Pads `[data_min, data_max]` and selects nice ticks for it, without a surface.
pub fn nice_axis_ticks(
    data_min: f64,
    data_max: f64,
    config: &NiceTicksConfig,
) -> AxisResult<TickSelection> {
    config.validate()?;
    let selector = config.selector()?;
    let (padded_min, padded_max) = config.padding.pad(data_min, data_max)?;
    selector.select(padded_min, padded_max, config.target_tick_count)
}

/// Replaces the axis ticks with a nice-interval tick set and sets the limits
/// to its first and last tick.
pub fn make_ticks_nicer<S: AxisSurface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    config: &NiceTicksConfig,
) -> AxisResult<TuneOutcome> {
    let (data_min, data_max) = surface.data_range(axis);
    let selection = nice_axis_ticks(data_min, data_max, config)?;
    let Some(limits) = selection.limits() else {
        debug!(%axis, "no data on axis, leaving ticks untouched");
        return Ok(TuneOutcome::NoData);
    };

    debug!(
        %axis,
        interval = selection.interval(),
        tick_count = selection.len(),
        "applying nice ticks"
    );
    let update = AxisUpdate::new(selection.into_ticks(), limits, MutationOrder::TicksThenLimits);
    update.apply(surface, axis);
    Ok(TuneOutcome::Applied(update))
}

/// Snaps the axis limits to a power-of-ten interval, ticks it and writes
/// shared-precision labels.
pub fn tune_value_axis<S: AxisSurface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    config: &ValueAxisConfig,
) -> AxisResult<TuneOutcome> {
    config.validate()?;
    let (data_min, data_max) = surface.data_range(axis);
    if data_min.is_nan() || data_max.is_nan() {
        debug!(%axis, "no data on axis, leaving value axis untouched");
        return Ok(TuneOutcome::NoData);
    }

    let (limits, ticks) = match snap_limits(data_min, data_max, config.snapped_limits())? {
        Some(limits) => {
            let interval = snap_interval(data_max - data_min).ok_or_else(|| {
                AxisError::InvalidRange("data span has no snapping interval".to_owned())
            })?;
            let tolerance = interval * 1e-9;
            let mut ticks = generate_ticks(limits.0, limits.1, interval)?;
            ticks.retain(|tick| *tick >= limits.0 - tolerance && *tick <= limits.1 + tolerance);
            (limits, ticks)
        }
        None => ((data_min, data_max), vec![data_min]),
    };
    let ticks = match config.max_tick_count {
        Some(max_count) => reduce_visible_ticks(&ticks, limits, max_count)?,
        None => ticks,
    };

    let format = config.number_format(data_max - data_min);
    let labels = format_values(&ticks, format);
    debug!(
        %axis,
        mode = ?format.mode,
        tick_count = ticks.len(),
        lo = limits.0,
        hi = limits.1,
        "tuning value axis"
    );
    let update = AxisUpdate::new(ticks, limits, MutationOrder::LimitsThenTicks)
        .with_labels(labels, config.label_style);
    update.apply(surface, axis);
    Ok(TuneOutcome::Applied(update))
}

/// Halves the visible ticks until at most `max_count` remain.
pub fn reduce_axis_ticks<S: AxisSurface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    max_count: usize,
) -> AxisResult<Vec<f64>> {
    let ticks = reduce_visible_ticks(&surface.ticks(axis), surface.limits(axis), max_count)?;
    surface.set_ticks(axis, &ticks);
    Ok(ticks)
}

/// Extends the upper limit by whole tick gaps until it is the first tick at
/// or beyond the data maximum.
///
/// Unevenly spaced ticks are logged and skipped without touching the axis.
pub fn axis_limits_by_ticks<S: AxisSurface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    config: LimitsByTickConfig,
) -> AxisResult<TuneOutcome> {
    let config = config.validate()?;
    let (_, data_max) = surface.data_range(axis);
    if data_max.is_nan() && config.arbitrary_max.is_none() {
        debug!(%axis, "no data on axis, leaving limits untouched");
        return Ok(TuneOutcome::NoData);
    }

    let limits = surface.limits(axis);
    let extension =
        match extend_limits_by_tick(&surface.ticks(axis), limits, data_max, config.arbitrary_max) {
            Ok(extension) => extension,
            Err(err @ AxisError::AmbiguousTickGap { .. }) => {
                warn!(%axis, error = %err, "skipping axis limit extension");
                return Ok(TuneOutcome::Skipped(err));
            }
            Err(err) => return Err(err),
        };

    debug!(
        %axis,
        gap = extension.gap,
        upper_limit = extension.upper_limit,
        "extending axis limit by tick"
    );
    let update = AxisUpdate::new(
        extension.ticks,
        (limits.0, extension.upper_limit),
        MutationOrder::LimitsThenTicks,
    );
    update.apply(surface, axis);
    Ok(TuneOutcome::Applied(update))
}
