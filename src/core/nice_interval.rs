use std::str::FromStr;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{AxisError, AxisResult};

/// Integer-shaped nice multiples searched by [`TickStrategy::MagnitudeBracketing`].
pub const INTEGER_NICE_INTERVALS: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0];

/// Fractional nice multiples searched by [`TickStrategy::BidirectionalRefinement`].
pub const FRACTIONAL_NICE_INTERVALS: [f64; 4] = [0.1, 0.2, 0.25, 0.5];

/// Upper bound on ticks produced for a single interval.
pub const MAX_GENERATED_TICKS: usize = 100_000;

pub(crate) type IntervalSet = SmallVec<[f64; 8]>;

/// Search used to pick the nice interval for a padded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TickStrategy {
    /// Compare every power-of-ten rescaling of the integer interval set that
    /// falls inside `(ideal / 2, ideal * 2)`.
    #[default]
    MagnitudeBracketing,
    /// Hill-climb the fractional interval set by powers of ten, keeping the
    /// two intervals closest to the ideal step.
    BidirectionalRefinement,
}

impl TickStrategy {
    #[must_use]
    pub fn default_intervals(self) -> NiceIntervals {
        match self {
            Self::MagnitudeBracketing => NiceIntervals::integer(),
            Self::BidirectionalRefinement => NiceIntervals::fractional(),
        }
    }
}

impl FromStr for TickStrategy {
    type Err = AxisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "magnitude" | "magnitude_bracketing" | "magnitude-bracketing" => {
                Ok(Self::MagnitudeBracketing)
            }
            "bidirectional" | "bidirectional_refinement" | "bidirectional-refinement" => {
                Ok(Self::BidirectionalRefinement)
            }
            other => Err(AxisError::InvalidConfig(format!(
                "unknown tick strategy `{other}`"
            ))),
        }
    }
}

/// Base set of nice multiples, implicitly scaled by powers of ten.
#[derive(Debug, Clone, PartialEq)]
pub struct NiceIntervals {
    base: IntervalSet,
}

impl NiceIntervals {
    /// Builds a sorted, deduplicated interval set.
    pub fn new(base: impl IntoIterator<Item = f64>) -> AxisResult<Self> {
        let mut base: IntervalSet = base.into_iter().collect();
        if base.is_empty() {
            return Err(AxisError::InvalidConfig(
                "nice interval set must not be empty".to_owned(),
            ));
        }
        if base.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return Err(AxisError::InvalidConfig(
                "nice intervals must be finite and > 0".to_owned(),
            ));
        }
        base.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
        base.dedup();
        Ok(Self { base })
    }

    #[must_use]
    pub fn integer() -> Self {
        Self {
            base: IntervalSet::from_slice(&INTEGER_NICE_INTERVALS),
        }
    }

    #[must_use]
    pub fn fractional() -> Self {
        Self {
            base: IntervalSet::from_slice(&FRACTIONAL_NICE_INTERVALS),
        }
    }

    #[must_use]
    pub fn base(&self) -> &[f64] {
        &self.base
    }

    /// Returns the base set multiplied by `10^exponent`.
    fn scaled(&self, exponent: i32) -> IntervalSet {
        self.base
            .iter()
            .map(|value| scale_by_power_of_ten(*value, exponent))
            .collect()
    }
}

/// Ticks chosen for one axis together with the interval that produced them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickSelection {
    ticks: Vec<f64>,
    interval: Option<f64>,
}

impl TickSelection {
    /// Selection returned for "no data" ranges; callers leave the axis untouched.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn into_ticks(self) -> Vec<f64> {
        self.ticks
    }

    /// Step between consecutive ticks; `None` for empty or single-point selections.
    #[must_use]
    pub fn interval(&self) -> Option<f64> {
        self.interval
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Axis limits matching the selection: `(first tick, last tick)`.
    #[must_use]
    pub fn limits(&self) -> Option<(f64, f64)> {
        match (self.ticks.first(), self.ticks.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }
}

/// Nice-interval tick selector for one strategy and interval family.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSelector {
    strategy: TickStrategy,
    intervals: NiceIntervals,
}

impl Default for TickSelector {
    fn default() -> Self {
        Self::new(TickStrategy::default())
    }
}

impl TickSelector {
    #[must_use]
    pub fn new(strategy: TickStrategy) -> Self {
        Self {
            strategy,
            intervals: strategy.default_intervals(),
        }
    }

    /// Replaces the strategy's default interval family.
    #[must_use]
    pub fn with_intervals(mut self, intervals: NiceIntervals) -> Self {
        self.intervals = intervals;
        self
    }

    #[must_use]
    pub fn strategy(&self) -> TickStrategy {
        self.strategy
    }

    #[must_use]
    pub fn intervals(&self) -> &NiceIntervals {
        &self.intervals
    }

    /// Selects the tick set whose length is closest to `target_count`.
    ///
    /// Ties prefer the larger interval. NaN bounds yield an empty selection.
    pub fn select(
        &self,
        padded_min: f64,
        padded_max: f64,
        target_count: usize,
    ) -> AxisResult<TickSelection> {
        let Some((lo, hi)) = checked_range(padded_min, padded_max, target_count)? else {
            return Ok(TickSelection::empty());
        };
        if lo == hi {
            return Ok(TickSelection {
                ticks: vec![lo],
                interval: None,
            });
        }

        let candidates = self.candidates_for(lo, hi, target_count);
        let mut generated: IndexMap<OrderedFloat<f64>, Vec<f64>> =
            IndexMap::with_capacity(candidates.len());
        for interval in candidates {
            let ticks = generate_ticks(lo, hi, interval)?;
            trace!(
                interval,
                tick_count = ticks.len(),
                target_count,
                "nice interval candidate"
            );
            generated.insert(OrderedFloat(interval), ticks);
        }

        let mut chosen: Option<(usize, OrderedFloat<f64>)> = None;
        for (interval, ticks) in &generated {
            let closeness = ticks.len().abs_diff(target_count);
            let better = match chosen {
                None => true,
                Some((best_closeness, best_interval)) => {
                    closeness < best_closeness
                        || (closeness == best_closeness && *interval > best_interval)
                }
            };
            if better {
                chosen = Some((closeness, *interval));
            }
        }

        let Some((_, interval)) = chosen else {
            return Err(AxisError::InvalidRange(
                "no nice interval could be selected for range".to_owned(),
            ));
        };
        let ticks = generated.swap_remove(&interval).unwrap_or_default();
        debug!(
            strategy = ?self.strategy,
            interval = interval.0,
            tick_count = ticks.len(),
            target_count,
            "selected nice interval"
        );
        Ok(TickSelection {
            ticks,
            interval: Some(interval.0),
        })
    }

    /// Candidate intervals the strategy would compare for this range.
    pub fn candidates(
        &self,
        padded_min: f64,
        padded_max: f64,
        target_count: usize,
    ) -> AxisResult<Vec<f64>> {
        let Some((lo, hi)) = checked_range(padded_min, padded_max, target_count)? else {
            return Ok(Vec::new());
        };
        if lo == hi {
            return Ok(Vec::new());
        }
        Ok(self.candidates_for(lo, hi, target_count).into_vec())
    }

    fn candidates_for(&self, lo: f64, hi: f64, target_count: usize) -> IntervalSet {
        let ideal_step = (hi - lo) / target_count as f64;
        match self.strategy {
            TickStrategy::MagnitudeBracketing => bracket_candidates(&self.intervals, ideal_step),
            TickStrategy::BidirectionalRefinement => {
                refine_candidates(&self.intervals, ideal_step)
            }
        }
    }
}

/// Selects ticks with the strategy's default interval family.
pub fn select_ticks(
    padded_min: f64,
    padded_max: f64,
    target_count: usize,
    strategy: TickStrategy,
) -> AxisResult<TickSelection> {
    TickSelector::new(strategy).select(padded_min, padded_max, target_count)
}

/// Builds the minimal evenly spaced tick set covering `[lo, hi]` with step `interval`.
///
/// The first tick is anchored at `floor(lo / interval) * interval`, ticks are
/// appended until one reaches `hi`, then leading ticks whose successor is still
/// below `lo` are dropped (never below two ticks).
pub fn generate_ticks(lo: f64, hi: f64, interval: f64) -> AxisResult<Vec<f64>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(AxisError::InvalidConfig(
            "tick interval must be finite and > 0".to_owned(),
        ));
    }
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(AxisError::InvalidRange(
            "tick range must be finite with lo <= hi".to_owned(),
        ));
    }
    let estimated = ((hi - lo) / interval).ceil() + 2.0;
    if !estimated.is_finite() || estimated > MAX_GENERATED_TICKS as f64 {
        return Err(AxisError::InvalidRange(format!(
            "interval {interval} is too fine for range [{lo}, {hi}]"
        )));
    }

    let first_index = (lo / interval).floor();
    let mut ticks = vec![first_index * interval];
    let mut offset = 1.0;
    while ticks.last().is_some_and(|last| *last < hi) {
        ticks.push((first_index + offset) * interval);
        offset += 1.0;
    }

    let mut leading = 0;
    while ticks.len() - leading > 2 && ticks[leading + 1] < lo {
        leading += 1;
    }
    ticks.drain(..leading);
    Ok(ticks)
}

fn checked_range(
    padded_min: f64,
    padded_max: f64,
    target_count: usize,
) -> AxisResult<Option<(f64, f64)>> {
    if target_count == 0 {
        return Err(AxisError::InvalidConfig(
            "target tick count must be > 0".to_owned(),
        ));
    }
    if padded_min.is_nan() || padded_max.is_nan() {
        return Ok(None);
    }
    if !padded_min.is_finite() || !padded_max.is_finite() {
        return Err(AxisError::InvalidRange(
            "padded range bounds must be finite".to_owned(),
        ));
    }
    Ok(Some((padded_min.min(padded_max), padded_min.max(padded_max))))
}

/// Magnitude bracketing: every power-of-ten rescaling of the interval set
/// that lands inside the `(ideal / 2, ideal * 2)` window.
///
/// Each base interval has at most one exponent inside a window this narrow,
/// so the window is collected per interval instead of rescaling the whole
/// set step by step. An empty window falls back to the single rescaled
/// interval nearest the ideal step in log space.
fn bracket_candidates(intervals: &NiceIntervals, ideal_step: f64) -> IntervalSet {
    let lower = ideal_step / 2.0;
    let upper = ideal_step * 2.0;
    let mut window = IntervalSet::new();
    let mut nearby = IntervalSet::new();

    for base in intervals.base() {
        let anchor = (ideal_step / base).log10().floor();
        if !anchor.is_finite() {
            continue;
        }
        let anchor = anchor as i32;
        for exponent in anchor - 1..=anchor + 2 {
            let interval = scale_by_power_of_ten(*base, exponent);
            nearby.push(interval);
            if lower < interval && interval < upper {
                trace!(base = *base, exponent, interval, "interval inside bracket window");
                window.push(interval);
            }
        }
    }

    if window.is_empty() {
        return nearest_in_log_space(&nearby, ideal_step);
    }
    window.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
    window.dedup_by(|next, kept| (*next - *kept).abs() <= kept.abs() * 1e-12);
    window
}

/// Bidirectional refinement: keep the two intervals closest to the ideal step
/// and move the whole set by ten while that strictly improves their scores.
fn refine_candidates(intervals: &NiceIntervals, ideal_step: f64) -> IntervalSet {
    let mut exponent = 0_i32;
    let mut visited: SmallVec<[i32; 16]> = SmallVec::new();
    visited.push(exponent);
    let (mut best, mut best_score) = two_closest(&intervals.scaled(exponent), ideal_step);

    loop {
        let mut adopted = false;
        for next in [exponent + 1, exponent - 1] {
            if visited.contains(&next) {
                continue;
            }
            let (pair, score) = two_closest(&intervals.scaled(next), ideal_step);
            if score < best_score {
                trace!(exponent, next, score, "refined nice intervals");
                visited.push(next);
                exponent = next;
                best = pair;
                best_score = score;
                adopted = true;
                break;
            }
        }
        if !adopted {
            return best;
        }
    }
}

fn two_closest(scaled: &[f64], ideal_step: f64) -> (IntervalSet, f64) {
    let mut scored: SmallVec<[(f64, f64); 8]> = scaled
        .iter()
        .map(|interval| ((ideal_step - interval).abs(), *interval))
        .collect();
    scored.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));
    scored.truncate(2);
    let score = scored.iter().map(|(score, _)| score).sum::<f64>();
    let pair = scored.iter().map(|(_, interval)| *interval).collect();
    let score = if score.is_nan() { f64::INFINITY } else { score };
    (pair, score)
}

fn nearest_in_log_space(scaled: &[f64], ideal_step: f64) -> IntervalSet {
    let distance = |interval: f64| (interval.ln() - ideal_step.ln()).abs();
    scaled
        .iter()
        .copied()
        .filter(|interval| interval.is_finite() && *interval > 0.0)
        .min_by(|lhs, rhs| distance(*lhs).total_cmp(&distance(*rhs)))
        .into_iter()
        .collect()
}

fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10_f64.powi(exponent)
    } else {
        value / 10_f64.powi(-exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        NiceIntervals, TickSelector, TickStrategy, bracket_candidates, generate_ticks,
        refine_candidates, select_ticks,
    };

    #[test]
    fn bracketing_selects_twenty_five_for_buffered_percent_range() {
        let selection =
            select_ticks(-2.5, 97.0, 5, TickStrategy::MagnitudeBracketing).expect("ticks");
        assert_eq!(selection.interval(), Some(25.0));
        assert_eq!(selection.ticks(), &[-25.0, 0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(selection.limits(), Some((-25.0, 100.0)));
    }

    #[test]
    fn bracketing_window_holds_every_rescaled_interval() {
        let candidates = bracket_candidates(&NiceIntervals::integer(), 19.9);
        assert_eq!(candidates.as_slice(), &[10.0, 20.0, 25.0]);
    }

    #[test]
    fn bracketing_scales_up_for_large_steps() {
        let candidates = bracket_candidates(&NiceIntervals::integer(), 1_000.0);
        assert_eq!(candidates.as_slice(), &[1_000.0]);

        let candidates = bracket_candidates(&NiceIntervals::integer(), 1_460_000.0);
        assert_eq!(candidates.as_slice(), &[1_000_000.0, 2_000_000.0, 2_500_000.0]);
    }

    #[test]
    fn bracketing_scales_down_for_small_steps() {
        let candidates = bracket_candidates(&NiceIntervals::integer(), 0.003);
        assert_eq!(candidates.as_slice(), &[0.002, 0.0025, 0.005]);
    }

    #[test]
    fn bracketing_merges_duplicate_rescalings() {
        let sparse = NiceIntervals::new([1.0, 100.0]).expect("valid set");
        let candidates = bracket_candidates(&sparse, 10.0);
        assert_eq!(candidates.as_slice(), &[10.0]);
    }

    #[test]
    fn bracketing_falls_back_to_nearest_interval_in_log_space() {
        let single = NiceIntervals::new([1.0]).expect("valid set");
        let candidates = bracket_candidates(&single, 3.5);
        assert_eq!(candidates.as_slice(), &[10.0]);
    }

    #[test]
    fn bracketing_prefers_coarser_family_member_on_large_ranges() {
        let selection =
            select_ticks(0.0, 7.3e6, 5, TickStrategy::MagnitudeBracketing).expect("ticks");
        assert_eq!(selection.interval(), Some(2e6));
        assert_eq!(selection.ticks(), &[0.0, 2e6, 4e6, 6e6, 8e6]);
    }

    #[test]
    fn refinement_keeps_two_closest_intervals() {
        let candidates = refine_candidates(&NiceIntervals::fractional(), 19.9);
        assert_eq!(candidates.as_slice(), &[20.0, 25.0]);
    }

    #[test]
    fn refinement_moves_down_for_fine_ranges() {
        let candidates = refine_candidates(&NiceIntervals::fractional(), 0.0021);
        assert!((candidates[0] - 0.002).abs() <= 1e-12);
    }

    #[test]
    fn refinement_selects_twenty_five_for_buffered_percent_range() {
        let selection =
            select_ticks(-2.5, 97.0, 5, TickStrategy::BidirectionalRefinement).expect("ticks");
        assert_eq!(selection.interval(), Some(25.0));
        assert_eq!(selection.len(), 6);
    }

    #[test]
    fn generator_anchors_below_and_extends_past_range() {
        let ticks = generate_ticks(3.0, 41.0, 10.0).expect("ticks");
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn generator_keeps_exact_bounds() {
        let ticks = generate_ticks(0.0, 100.0, 25.0).expect("ticks");
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn generator_rejects_non_positive_interval() {
        assert!(generate_ticks(0.0, 1.0, 0.0).is_err());
        assert!(generate_ticks(0.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn generator_rejects_runaway_tick_counts() {
        assert!(generate_ticks(0.0, 1e12, 1.0).is_err());
    }

    #[test]
    fn nan_range_is_a_no_op() {
        let selection =
            select_ticks(f64::NAN, f64::NAN, 5, TickStrategy::MagnitudeBracketing).expect("no-op");
        assert!(selection.is_empty());
        assert_eq!(selection.limits(), None);
    }

    #[test]
    fn zero_target_count_is_rejected() {
        assert!(select_ticks(0.0, 10.0, 0, TickStrategy::MagnitudeBracketing).is_err());
    }

    #[test]
    fn single_point_range_yields_single_tick() {
        let selection =
            select_ticks(4.0, 4.0, 5, TickStrategy::BidirectionalRefinement).expect("ticks");
        assert_eq!(selection.ticks(), &[4.0]);
        assert_eq!(selection.interval(), None);
        assert_eq!(selection.limits(), Some((4.0, 4.0)));
    }

    #[test]
    fn custom_interval_family_is_respected() {
        let selector = TickSelector::new(TickStrategy::MagnitudeBracketing)
            .with_intervals(NiceIntervals::new([1.0, 3.0, 6.0]).expect("valid set"));
        let selection = selector.select(0.0, 60.0, 5).expect("ticks");
        assert_eq!(selection.interval(), Some(10.0));
        assert_eq!(selection.len(), 7);
    }

    #[test]
    fn strategy_parses_from_names() {
        assert_eq!(
            "magnitude".parse::<TickStrategy>().expect("parse"),
            TickStrategy::MagnitudeBracketing
        );
        assert_eq!(
            "Bidirectional-Refinement"
                .parse::<TickStrategy>()
                .expect("parse"),
            TickStrategy::BidirectionalRefinement
        );
        assert!("spiral".parse::<TickStrategy>().is_err());
    }
}
