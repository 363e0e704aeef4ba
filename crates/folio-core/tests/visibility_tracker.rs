//! Integration tests for the visibility tracker contract.

use std::sync::Arc;

use folio_core::geometry::{Rect, Size};
use folio_core::viewport::{ManualReporter, ScrollViewport};
use folio_core::{ElementId, RevealMode, TrackerOptions, TrackerState, VisibilityTracker};

fn setup() -> (Arc<ManualReporter>, ElementId) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    let reporter = Arc::new(ManualReporter::new());
    let element = reporter.create_element();
    (reporter, element)
}

fn bound_tracker(
    reporter: &Arc<ManualReporter>,
    element: ElementId,
    options: TrackerOptions,
) -> VisibilityTracker {
    let tracker = VisibilityTracker::create(reporter.clone(), options);
    tracker.handle().bind(element);
    tracker
}

#[test]
fn latch_is_monotonic_over_any_event_sequence() {
    let sequences: [&[f32]; 4] = [
        &[0.0, 0.5, 0.0, 0.0],
        &[0.2, 0.05, 0.0],
        &[0.05, 0.09, 0.1, 0.0, 1.0, 0.0],
        &[1.0, 1.0, 0.0, 0.3, 0.0],
    ];

    for sequence in sequences {
        let (reporter, element) = setup();
        let tracker = bound_tracker(&reporter, element, TrackerOptions::default());
        let mut latched = false;
        for &ratio in sequence {
            reporter.deliver(element, ratio);
            if latched {
                assert!(tracker.revealed(), "reverted after latch in {sequence:?}");
            }
            latched |= tracker.revealed();
        }
        assert!(latched, "sequence {sequence:?} never latched");
    }
}

#[test]
fn reveals_on_first_event_meeting_threshold() {
    let (reporter, element) = setup();
    let options = TrackerOptions::new().with_threshold(0.5);
    let tracker = bound_tracker(&reporter, element, options);

    for ratio in [0.1, 0.3, 0.49] {
        reporter.deliver(element, ratio);
        assert!(!tracker.revealed(), "revealed below threshold at {ratio}");
    }

    reporter.deliver(element, 0.5);
    assert!(tracker.revealed());
    assert_eq!(tracker.state(), TrackerState::Revealed);
}

#[test]
fn no_observation_before_binding() {
    let (reporter, element) = setup();
    let tracker = VisibilityTracker::create(reporter.clone(), TrackerOptions::default());

    assert_eq!(reporter.deliver(element, 1.0), 0);
    assert_eq!(reporter.subscription_count(), 0);
    assert!(!tracker.revealed());
    assert_eq!(tracker.state(), TrackerState::Unbound);

    // Binding later picks up from here, not from earlier events
    tracker.handle().bind(element);
    assert!(!tracker.revealed());
    reporter.deliver(element, 1.0);
    assert!(tracker.revealed());
}

#[test]
fn teardown_is_idempotent_latched_or_not() {
    let (reporter, element) = setup();

    let unlatched = bound_tracker(&reporter, element, TrackerOptions::default());
    unlatched.teardown();
    unlatched.teardown();
    reporter.deliver(element, 1.0);
    assert!(!unlatched.revealed());

    let latched = bound_tracker(&reporter, element, TrackerOptions::default());
    reporter.deliver(element, 1.0);
    assert!(latched.revealed());
    latched.teardown();
    latched.teardown();
    reporter.deliver(element, 0.0);
    assert!(latched.revealed());

    assert_eq!(reporter.subscription_count(), 0);
    drop(unlatched);
    drop(latched);
}

#[test]
fn trackers_are_independent() {
    let (reporter, first) = setup();
    let second = reporter.create_element();

    let a = bound_tracker(&reporter, first, TrackerOptions::default());
    let b = bound_tracker(&reporter, second, TrackerOptions::default());

    reporter.deliver(first, 0.9);
    assert!(a.revealed());
    assert!(!b.revealed());

    drop(a);
    reporter.deliver(second, 0.9);
    assert!(b.revealed());
}

#[test]
fn default_threshold_scenario() {
    let (reporter, element) = setup();
    let revealed = bound_tracker(&reporter, element, TrackerOptions::default());
    reporter.deliver(element, 0.15);
    assert!(revealed.revealed());

    let (reporter, element) = setup();
    let hidden = bound_tracker(&reporter, element, TrackerOptions::default());
    reporter.deliver(element, 0.05);
    assert!(!hidden.revealed());
}

#[test]
fn scroll_viewport_reveals_once() {
    let viewport = Arc::new(ScrollViewport::new(Size::new(400.0, 300.0)));
    let above_fold = viewport.add_element(Rect::new(0.0, 50.0, 400.0, 100.0));
    let below_fold = viewport.add_element(Rect::new(0.0, 700.0, 400.0, 200.0));

    let top = VisibilityTracker::create(viewport.clone(), TrackerOptions::default());
    let bottom = VisibilityTracker::create(viewport.clone(), TrackerOptions::default());
    top.handle().bind(above_fold);
    bottom.handle().bind(below_fold);

    // Initial notification reveals the element already in view
    assert!(top.revealed());
    assert!(!bottom.revealed());
    assert_eq!(viewport.subscription_count(), 1);

    // 10px of 200 is 5%: not enough
    viewport.scroll_to(0.0, 410.0);
    assert!(!bottom.revealed());

    // 40px of 200 is 20%
    viewport.scroll_to(0.0, 440.0);
    assert!(bottom.revealed());
    assert_eq!(viewport.subscription_count(), 0);

    viewport.scroll_to(0.0, 0.0);
    assert!(top.revealed());
    assert!(bottom.revealed());
}

#[test]
fn continuous_mode_tracks_both_directions() {
    let viewport = Arc::new(ScrollViewport::new(Size::new(400.0, 300.0)));
    let element = viewport.add_element(Rect::new(0.0, 600.0, 400.0, 100.0));

    let options = TrackerOptions::new().with_mode(RevealMode::Continuous);
    let tracker = VisibilityTracker::create(viewport.clone(), options);
    tracker.handle().bind(element);

    viewport.scroll_to(0.0, 400.0);
    assert!(tracker.revealed());
    viewport.scroll_to(0.0, 0.0);
    assert!(!tracker.revealed());
    assert_eq!(tracker.state(), TrackerState::Observing);
}
