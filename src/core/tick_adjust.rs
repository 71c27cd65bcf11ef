use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::nice_interval::MAX_GENERATED_TICKS;
use crate::error::{AxisError, AxisResult};

/// Decimal places kept when comparing gaps between existing ticks.
const TICK_GAP_DECIMALS: u32 = 9;

/// Result of extending an axis by whole tick gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TickExtension {
    pub gap: f64,
    pub upper_limit: f64,
    pub ticks: Vec<f64>,
}

/// Keeps ticks inside `limits`, then halves them (odd positions) until at
/// most `max_count` remain.
pub fn reduce_visible_ticks(
    ticks: &[f64],
    limits: (f64, f64),
    max_count: usize,
) -> AxisResult<Vec<f64>> {
    if max_count == 0 {
        return Err(AxisError::InvalidConfig(
            "max tick count must be > 0".to_owned(),
        ));
    }
    let (lo, hi) = (limits.0.min(limits.1), limits.0.max(limits.1));
    let mut visible: Vec<f64> = ticks
        .iter()
        .copied()
        .filter(|tick| *tick >= lo && *tick <= hi)
        .collect();
    while visible.len() > max_count {
        visible = visible
            .into_iter()
            .enumerate()
            .filter_map(|(index, tick)| (index % 2 == 1).then_some(tick))
            .collect();
    }
    Ok(visible)
}

/// Infers the single gap shared by consecutive ticks.
pub fn infer_tick_gap(ticks: &[f64]) -> AxisResult<f64> {
    if ticks.len() < 2 {
        return Err(AxisError::AmbiguousTickGap { distinct: 0 });
    }

    let mut gaps = Vec::with_capacity(ticks.len() - 1);
    for pair in ticks.windows(2) {
        let gap = Decimal::from_f64_retain(pair[1] - pair[0]).ok_or_else(|| {
            AxisError::InvalidRange("tick positions must be finite".to_owned())
        })?;
        gaps.push(gap.round_dp(TICK_GAP_DECIMALS).normalize());
    }
    gaps.sort();
    gaps.dedup();

    if gaps.len() != 1 {
        return Err(AxisError::AmbiguousTickGap {
            distinct: gaps.len(),
        });
    }
    let gap = gaps[0].to_f64().ok_or_else(|| {
        AxisError::InvalidRange("tick gap cannot be represented as f64".to_owned())
    })?;
    if gap <= 0.0 {
        return Err(AxisError::InvalidRange(
            "ticks must be strictly increasing".to_owned(),
        ));
    }
    Ok(gap)
}

/// Extends or shrinks the visible ticks by whole gaps so the last tick is the
/// first multiple at or above `data_max` (or `arbitrary_max` when larger).
///
/// The lower limit is kept; the new upper limit is the last tick.
pub fn extend_limits_by_tick(
    ticks: &[f64],
    limits: (f64, f64),
    data_max: f64,
    arbitrary_max: Option<f64>,
) -> AxisResult<TickExtension> {
    let gap = infer_tick_gap(ticks)?;
    let target = arbitrary_max.map_or(data_max, |value| value.max(data_max));
    if !target.is_finite() {
        return Err(AxisError::InvalidRange(
            "data max must be finite".to_owned(),
        ));
    }

    let (lo, hi) = limits;
    let mut visible: Vec<f64> = ticks
        .iter()
        .copied()
        .filter(|tick| *tick >= lo && *tick <= hi)
        .collect();
    let Some(mut last) = visible.last().copied() else {
        return Err(AxisError::InvalidRange(
            "no ticks inside the current axis limits".to_owned(),
        ));
    };

    loop {
        if last < target {
            if visible.len() >= MAX_GENERATED_TICKS {
                return Err(AxisError::InvalidRange(format!(
                    "tick gap {gap} is too fine to reach {target}"
                )));
            }
            last += gap;
            visible.push(last);
        } else if last - gap > target && visible.len() > 1 {
            visible.pop();
            last = visible[visible.len() - 1];
        } else {
            break;
        }
    }

    Ok(TickExtension {
        gap,
        upper_limit: last,
        ticks: visible,
    })
}
