// Host-side tests for the rolling-window shake detector.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod shake {
        include!("../src/core/shake.rs");
    }
}

use engine::constants::{MINIMUM_SHAKEN_ENERGY, MINIMUM_SHAKEN_FRAMES};
use engine::shake::ShakeDetector;
use glam::Vec3;

#[test]
fn quiet_window_slides_without_firing() {
    let mut det = ShakeDetector::new();
    for i in 0..MINIMUM_SHAKEN_FRAMES {
        assert!(!det.record(0.0), "fired on quiet sample {i}");
    }
    // Full but below threshold: the oldest sample was dropped.
    assert_eq!(det.window_len(), MINIMUM_SHAKEN_FRAMES - 1);
    for _ in 0..50 {
        assert!(!det.record(MINIMUM_SHAKEN_ENERGY * 0.5));
    }
    assert_eq!(det.window_len(), MINIMUM_SHAKEN_FRAMES - 1);
}

#[test]
fn energetic_window_fires_once_and_empties() {
    let mut det = ShakeDetector::new();
    let hot = MINIMUM_SHAKEN_ENERGY * 2.0;
    for i in 0..MINIMUM_SHAKEN_FRAMES - 1 {
        assert!(!det.record(hot), "fired before the window filled, at {i}");
    }
    assert!(det.record(hot), "full energetic window must fire");
    assert_eq!(det.window_len(), 0, "firing clears the window");
    // The detector must refill before it can fire again.
    assert!(!det.record(hot));
}

#[test]
fn one_hot_sample_can_tip_a_near_threshold_window() {
    let mut det = ShakeDetector::new();
    // Just under the per-sample mean: the full window stays quiet.
    for _ in 0..MINIMUM_SHAKEN_FRAMES {
        assert!(!det.record(MINIMUM_SHAKEN_ENERGY * 0.95));
    }
    // The same window with one doubled sample tips the sum over.
    let mut det = ShakeDetector::new();
    for _ in 0..MINIMUM_SHAKEN_FRAMES - 1 {
        det.record(MINIMUM_SHAKEN_ENERGY * 0.95);
    }
    assert!(det.record(MINIMUM_SHAKEN_ENERGY * 2.0));
}

#[test]
fn non_finite_samples_are_dropped() {
    let mut det = ShakeDetector::new();
    det.record(0.1);
    assert!(!det.record(f32::NAN));
    assert!(!det.record(f32::INFINITY));
    assert_eq!(det.window_len(), 1, "bad samples never enter the window");
}

#[test]
fn oscillating_camera_position_fires_on_the_window_boundary() {
    let mut det = ShakeDetector::new();
    let mut fired_at = None;
    for i in 0..MINIMUM_SHAKEN_FRAMES {
        let x = if i % 2 == 0 { 1.0 } else { -1.0 };
        if det.sample(Vec3::new(x, 0.0, 0.0)) {
            fired_at = Some(i);
            break;
        }
    }
    assert_eq!(
        fired_at,
        Some(MINIMUM_SHAKEN_FRAMES - 1),
        "violent oscillation fires as soon as the window fills"
    );
}

#[test]
fn stationary_camera_never_fires() {
    let mut det = ShakeDetector::new();
    for _ in 0..10 * MINIMUM_SHAKEN_FRAMES {
        assert!(!det.sample(Vec3::new(0.1, 1.5, -0.2)));
    }
}

#[test]
fn smooth_drift_never_fires() {
    // Constant velocity means zero acceleration after the first step.
    let mut det = ShakeDetector::new();
    let mut fired = false;
    for i in 0..10 * MINIMUM_SHAKEN_FRAMES {
        fired |= det.sample(Vec3::new(i as f32 * 0.001, 0.0, 0.0));
    }
    assert!(!fired, "walking forward must not read as a shake");
}
