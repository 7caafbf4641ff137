use super::*;
use crate::animation::{AnimationSpec, Easing, SpringSpec};
use proptest::prelude::*;

const FRAME: u64 = 16_666_667; // ~60 FPS

fn run_until_idle(track: &mut AnimatedFloat, start: u64, max_frames: usize) -> (Vec<f32>, u64) {
    let mut samples = Vec::new();
    let mut time = start;
    for _ in 0..max_frames {
        let status = track.advance(time);
        samples.push(track.value());
        if status != TrackStatus::Running {
            break;
        }
        time += FRAME;
    }
    (samples, time)
}

#[test]
fn tween_interpolates_over_time_and_lands_on_target() {
    let mut track = AnimatedFloat::new(0.0);
    track.animate_to(1.0, AnimationSpec::tween(200, Easing::FastOutSlowIn));

    let (samples, _) = run_until_idle(&mut track, 0, 64);

    assert_eq!(samples[0], 0.0, "first frame only records the start time");
    assert!(samples.iter().any(|v| *v > 0.0 && *v < 1.0));
    assert_eq!(*samples.last().expect("at least one frame"), 1.0);
    assert!(!track.is_running());
}

#[test]
fn tween_honours_delay() {
    let mut track = AnimatedFloat::new(0.0);
    track.animate_to(1.0, AnimationSpec::linear(100).with_delay(50));

    assert_eq!(track.advance(0), TrackStatus::Running);
    assert_eq!(track.advance(40_000_000), TrackStatus::Running);
    assert_eq!(track.value(), 0.0);
    track.advance(100_000_000);
    assert!((track.value() - 0.5).abs() < 1e-3);
    assert_eq!(track.advance(150_000_000), TrackStatus::Finished);
    assert_eq!(track.value(), 1.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut track = AnimatedFloat::new(0.0);
    track.animate_to(1.0, AnimationSpec::linear(100));
    track.advance(0);
    track.advance(50_000_000);
    let midway = track.value();
    assert!((midway - 0.5).abs() < 1e-3);

    track.animate_to(0.0, AnimationSpec::linear(100));
    track.advance(60_000_000);
    assert_eq!(track.value(), midway, "no snap when reversing");
    track.advance(110_000_000);
    assert!(track.value() < midway);
}

#[test]
fn overshooting_spring_crosses_target_then_settles() {
    let mut track = AnimatedFloat::new(72.0);
    track.animate_to(0.0, SpringSpec::gentle_overshoot());

    let (samples, _) = run_until_idle(&mut track, 0, 600);

    assert!(samples.iter().any(|v| *v < 0.0), "under-damped spring overshoots");
    assert_eq!(*samples.last().expect("frames recorded"), 0.0);
    assert!(!track.is_running());
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let mut track = AnimatedFloat::new(1.0);
    track.animate_to(0.0, SpringSpec::default());

    let (samples, _) = run_until_idle(&mut track, 0, 600);

    assert!(samples.iter().all(|v| *v >= -1e-4));
    assert_eq!(*samples.last().expect("frames recorded"), 0.0);
}

#[test]
fn stop_freezes_value_and_reports_running_state() {
    let mut track = AnimatedFloat::new(0.0);
    track.animate_to(10.0, AnimationSpec::linear(100));
    track.advance(0);
    track.advance(30_000_000);
    let frozen = track.value();

    assert!(track.stop());
    assert!(!track.stop());
    assert_eq!(track.advance(90_000_000), TrackStatus::Idle);
    assert_eq!(track.value(), frozen);
}

#[test]
fn snap_cancels_and_jumps() {
    let mut track = AnimatedFloat::new(0.0);
    track.animate_to(10.0, SpringSpec::default());
    track.snap_to(3.0);
    assert_eq!(track.value(), 3.0);
    assert_eq!(track.target(), 3.0);
    assert_eq!(track.advance(0), TrackStatus::Idle);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn gentle_overshoot_is_under_damped() {
    assert!(SpringSpec::gentle_overshoot().damping_ratio < 1.0);
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
}

proptest! {
    #[test]
    fn easing_stays_monotonic_and_bounded(a in 0.0f32..1.0, b in 0.0f32..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for easing in [
            Easing::EaseOut,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
            Easing::FastOutLinearIn,
        ] {
            let y_lo = easing.transform(lo);
            let y_hi = easing.transform(hi);
            prop_assert!((-1e-3..=1.0 + 1e-3).contains(&y_lo));
            prop_assert!(y_hi + 1e-3 >= y_lo, "{:?} not monotonic", easing);
        }
    }
}
