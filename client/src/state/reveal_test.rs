use super::*;

#[test]
fn observe_registers_once() {
    let mut tracker = RevealTracker::new(0.1);
    assert!(tracker.observe());
    assert!(!tracker.observe());
    assert_eq!(tracker.phase(), RevealPhase::Observing);
}

#[test]
fn reports_before_observe_are_ignored() {
    let mut tracker = RevealTracker::new(0.1);
    assert_eq!(tracker.on_intersection(true), RevealStep::Ignore);
    assert_eq!(tracker.phase(), RevealPhase::Unobserved);
}

#[test]
fn non_intersecting_report_keeps_observing() {
    let mut tracker = RevealTracker::new(CONTACT_REVEAL_THRESHOLD);
    tracker.observe();

    assert_eq!(tracker.on_intersection(false), RevealStep::Ignore);
    assert_eq!(tracker.phase(), RevealPhase::Observing);
}

#[test]
fn crossing_reported_below_threshold_still_reveals() {
    // e.g. a crossing reported at ratio 0.0999 against 0.1.
    let mut tracker = RevealTracker::new(CONTACT_REVEAL_THRESHOLD);
    tracker.observe();

    assert_eq!(tracker.on_intersection(true), RevealStep::Reveal);
    assert!(tracker.is_revealed());
}

#[test]
fn toggling_intersection_never_reveals_twice() {
    let mut tracker = RevealTracker::new(0.1);
    tracker.observe();

    let reveals = [true, false, true, false, true]
        .into_iter()
        .filter(|hit| tracker.on_intersection(*hit) == RevealStep::Reveal)
        .count();

    assert_eq!(reveals, 1);
    assert!(tracker.is_revealed());
}

#[test]
fn zero_threshold_reveals_on_any_intersection() {
    let mut tracker = RevealTracker::new(0.0);
    tracker.observe();
    assert_eq!(tracker.on_intersection(true), RevealStep::Reveal);
}

#[test]
fn threshold_is_clamped() {
    assert!((RevealTracker::new(3.0).threshold() - 1.0).abs() < f64::EPSILON);
    assert!(RevealTracker::new(-1.0).threshold().abs() < f64::EPSILON);
    assert!(RevealTracker::new(f64::NAN).threshold().abs() < f64::EPSILON);
}

#[test]
fn release_while_observing_requires_disconnect() {
    let mut tracker = RevealTracker::new(0.1);
    tracker.observe();
    assert!(tracker.release());
    assert_eq!(tracker.phase(), RevealPhase::Released);
    assert_eq!(tracker.on_intersection(true), RevealStep::Ignore);
    assert!(!tracker.observe());
}

#[test]
fn release_after_reveal_keeps_revealed() {
    let mut tracker = RevealTracker::new(0.1);
    tracker.observe();
    tracker.on_intersection(true);
    assert!(!tracker.release());
    assert!(tracker.is_revealed());
}

#[test]
fn release_before_observe_has_nothing_to_disconnect() {
    let mut tracker = RevealTracker::new(0.1);
    assert!(!tracker.release());
    assert!(!tracker.observe());
}

#[test]
fn card_entrance_staggers_by_index() {
    let delays = (0..3).map(|i| card_entrance(i).delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![0, 200, 400]);
    assert_eq!(card_entrance(1).offset_px, 50);
    assert_eq!(card_entrance(usize::MAX).delay_ms, u32::MAX);
}

#[test]
fn entrance_style_hidden_and_revealed() {
    let entrance = card_entrance(1);
    assert_eq!(
        entrance.style(false),
        "opacity: 0; transform: translateY(50px); transition: opacity 600ms ease-out 200ms, transform 600ms ease-out 200ms;"
    );
    assert!(entrance.style(true).starts_with("opacity: 1; transform: translateY(0px);"));
    assert!(HEADER_ENTRANCE.style(false).contains("translateY(20px)"));
}
