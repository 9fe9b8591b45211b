use glam::Vec3;

use super::constants::{MINIMUM_SHAKEN_ENERGY, MINIMUM_SHAKEN_FRAMES};

/// Detects a device shake from per-frame camera positions.
///
/// Each frame records the magnitude of the change in frame-to-frame velocity
/// (a discrete acceleration). Once the rolling window holds
/// `MINIMUM_SHAKEN_FRAMES` samples, their sum is compared against the energy
/// threshold: above it the window empties and a shake fires; below it the
/// oldest sample is dropped. The detector is frame-rate dependent on purpose
/// (tied to render cadence, not wall-clock time).
#[derive(Default)]
pub struct ShakeDetector {
    samples: Vec<f32>,
    position: Vec3,
    velocity: Vec3,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the camera position for this frame. Returns true when a shake fires.
    pub fn sample(&mut self, camera_position: Vec3) -> bool {
        let velocity = camera_position - self.position;
        let accel = (velocity - self.velocity).length();
        self.position = camera_position;
        self.velocity = velocity;
        self.record(accel)
    }

    /// Push one acceleration magnitude into the rolling window.
    pub fn record(&mut self, accel: f32) -> bool {
        if !accel.is_finite() {
            // Malformed pose data: skip the sample, keep the session alive.
            log::warn!("shake: dropping non-finite motion sample");
            return false;
        }
        self.samples.push(accel);
        if self.samples.len() < MINIMUM_SHAKEN_FRAMES {
            return false;
        }
        let energy: f32 = self.samples.iter().sum();
        if energy > MINIMUM_SHAKEN_ENERGY * MINIMUM_SHAKEN_FRAMES as f32 {
            // Clear everything so one shake does not fire repeatedly.
            self.samples.clear();
            true
        } else {
            self.samples.remove(0);
            false
        }
    }

    pub fn window_len(&self) -> usize {
        self.samples.len()
    }
}
