use approx::assert_relative_eq;
use nice_axis::api::{NiceTicksConfig, nice_axis_ticks};
use nice_axis::core::{
    NiceIntervals, RangePadding, TickSelector, TickStrategy, generate_ticks, pad_range,
    select_ticks,
};

#[test]
fn buffered_percent_range_selects_interval_twenty_five() {
    let selection = select_ticks(-2.5, 97.0, 5, TickStrategy::MagnitudeBracketing).expect("ticks");
    assert_eq!(selection.ticks(), &[-25.0, 0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(selection.interval(), Some(25.0));
    assert_eq!(selection.limits(), Some((-25.0, 100.0)));
}

#[test]
fn both_strategies_agree_on_round_ranges() {
    for strategy in [
        TickStrategy::MagnitudeBracketing,
        TickStrategy::BidirectionalRefinement,
    ] {
        let selection = select_ticks(0.0, 100.0, 5, strategy).expect("ticks");
        assert_eq!(selection.ticks(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
    }
}

#[test]
fn padding_then_selection_covers_data() {
    let padded = pad_range(12.0, 88.0, RangePadding::default()).expect("pad");
    let selection = select_ticks(padded.0, padded.1, 5, TickStrategy::MagnitudeBracketing)
        .expect("ticks");
    let (lo, hi) = selection.limits().expect("limits");
    assert!(lo <= padded.0);
    assert!(hi >= padded.1);
}

#[test]
fn zero_based_data_is_not_padded_negative() {
    let config = NiceTicksConfig {
        padding: RangePadding {
            min_buffer_ratio: 0.1,
            max_buffer_ratio: 0.1,
            allow_negative_min: false,
        },
        ..NiceTicksConfig::default()
    };
    let selection = nice_axis_ticks(0.0, 100.0, &config).expect("ticks");
    assert_eq!(selection.ticks()[0], 0.0);
}

#[test]
fn fractional_ranges_get_fractional_intervals() {
    let selection =
        select_ticks(0.012, 0.087, 4, TickStrategy::BidirectionalRefinement).expect("ticks");
    let interval = selection.interval().expect("interval");
    assert_relative_eq!(interval, 0.025, max_relative = 1e-12);
    assert_eq!(selection.len(), 5);
    assert!(selection.ticks()[0] <= 0.012);
    assert!(*selection.ticks().last().expect("last") >= 0.087);
}

#[test]
fn large_ranges_scale_intervals_up() {
    let selection = select_ticks(0.0, 4_800_000.0, 5, TickStrategy::MagnitudeBracketing)
        .expect("ticks");
    assert_eq!(selection.interval(), Some(1_000_000.0));
    assert_eq!(selection.len(), 6);
}

#[test]
fn nan_range_leaves_no_ticks() {
    for strategy in [
        TickStrategy::MagnitudeBracketing,
        TickStrategy::BidirectionalRefinement,
    ] {
        let selection = select_ticks(f64::NAN, f64::NAN, 5, strategy).expect("no-op");
        assert!(selection.is_empty());
    }
}

#[test]
fn infinite_bounds_are_rejected() {
    assert!(select_ticks(0.0, f64::INFINITY, 5, TickStrategy::MagnitudeBracketing).is_err());
}

#[test]
fn candidates_report_bracketing_window() {
    let selector = TickSelector::new(TickStrategy::MagnitudeBracketing);
    let candidates = selector.candidates(-2.5, 97.0, 5).expect("candidates");
    assert_eq!(candidates, vec![10.0, 20.0, 25.0]);
}

#[test]
fn invalid_interval_families_are_rejected() {
    assert!(NiceIntervals::new(Vec::new()).is_err());
    assert!(NiceIntervals::new([1.0, 0.0]).is_err());
    assert!(NiceIntervals::new([1.0, f64::NAN]).is_err());
}

#[test]
fn generator_anchors_first_tick_on_step_below_range() {
    let ticks = generate_ticks(-0.5, 9.5, 5.0).expect("ticks");
    assert_eq!(ticks, vec![-5.0, 0.0, 5.0, 10.0]);
}

#[test]
fn large_ranges_pick_the_closest_count_across_rescaled_families() {
    let selection = select_ticks(0.0, 7.3e6, 5, TickStrategy::MagnitudeBracketing)
        .expect("ticks");
    assert_eq!(selection.interval(), Some(2_000_000.0));
    assert_eq!(selection.len(), 5);

    let selector = TickSelector::new(TickStrategy::MagnitudeBracketing);
    let candidates = selector.candidates(0.0, 7.3e6, 5).expect("candidates");
    assert_eq!(candidates, vec![1_000_000.0, 2_000_000.0, 2_500_000.0]);
}
