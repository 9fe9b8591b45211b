use smallvec::SmallVec;

use super::card::{Card, LinkSegment};
use super::constants::{
    ROTATION_FRAMES, ROTATION_FULL_KNEE, ROTATION_MID_KNEE, ROTATION_RATE_FULL, ROTATION_RATE_MID,
};
use super::constants::FLIGHT_FRAMES;
use super::math::rotate_y;

/// Live link segments; small per-card link counts make this a stack allocation
/// in practice.
pub type Segments = SmallVec<[LinkSegment; 8]>;

/// Frame-budgeted interpolation driver with two independent countdowns.
///
/// Flight moves cards (and segment free endpoints) toward precomputed targets
/// by adding per-frame velocities; rotation applies an easing-out Y spin to
/// the whole ring after a shake. Both countdowns may decrement in the same
/// tick. Gesture handlers must check `flight_active` before acting; an active
/// rotation does not block gestures.
#[derive(Default)]
pub struct AnimationScheduler {
    flight_count: u32,
    rotation_count: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flight_active(&self) -> bool {
        self.flight_count > 0
    }

    pub fn rotation_active(&self) -> bool {
        self.rotation_count > 0
    }

    /// Arm a flight for the next `FLIGHT_FRAMES` ticks. Velocities left over
    /// from a finished flight are stale, not zeroed; installing new targets
    /// overwrites them.
    pub fn start_flight(&mut self) {
        self.flight_count = FLIGHT_FRAMES;
    }

    /// Extend the shake rotation; additive when one is already running.
    pub fn extend_rotation(&mut self) {
        self.rotation_count += ROTATION_FRAMES;
    }

    /// Advance both countdowns by one frame. Returns true if any geometry moved.
    pub fn tick(&mut self, cards: &mut [Card], lines: &mut Segments) -> bool {
        let mut moved = false;

        if self.flight_count > 0 {
            for card in cards.iter_mut() {
                card.position += card.velocity;
                card.yaw += card.yaw_velocity;
            }
            if !lines.is_empty() {
                let rebuilt: Segments = lines
                    .iter()
                    .map(|seg| LinkSegment {
                        start: seg.start,
                        end: seg.end + seg.velocity,
                        velocity: seg.velocity,
                    })
                    .collect();
                *lines = rebuilt;
            }
            self.flight_count -= 1;
            moved = true;
        }

        if self.rotation_count > 0 {
            rotate_cards_y(cards, lines, rotation_step(self.rotation_count));
            self.rotation_count -= 1;
            moved = true;
        }

        moved
    }
}

/// Per-tick rotation angle for the shake flourish given the remaining frame
/// count: full rate, then medium, then a linear tail. The literal values are
/// part of the behavioral contract.
pub fn rotation_step(remaining: u32) -> f32 {
    let frames = ROTATION_FRAMES as f32;
    let left = remaining as f32;
    if left > frames * ROTATION_FULL_KNEE {
        ROTATION_RATE_FULL
    } else if left > frames * ROTATION_MID_KNEE {
        ROTATION_RATE_MID
    } else {
        ROTATION_RATE_MID.min(left / frames)
    }
}

/// Rotate every card about the world Y axis and rebuild any live segments.
/// Segment velocities are carried over unrotated.
pub fn rotate_cards_y(cards: &mut [Card], lines: &mut Segments, rad: f32) {
    for card in cards.iter_mut() {
        card.position = rotate_y(card.position, rad);
        card.yaw -= rad;
    }
    if lines.is_empty() {
        return;
    }
    let rebuilt: Segments = lines
        .iter()
        .map(|seg| LinkSegment {
            start: rotate_y(seg.start, rad),
            end: rotate_y(seg.end, rad),
            velocity: seg.velocity,
        })
        .collect();
    *lines = rebuilt;
}

/// Shift every card (and both endpoints of any live segments) vertically.
pub fn translate_cards_y(cards: &mut [Card], lines: &mut Segments, dy: f32) {
    for card in cards.iter_mut() {
        card.position.y += dy;
    }
    if lines.is_empty() {
        return;
    }
    let rebuilt: Segments = lines
        .iter()
        .map(|seg| {
            let mut seg = seg.clone();
            seg.start.y += dy;
            seg.end.y += dy;
            seg
        })
        .collect();
    *lines = rebuilt;
}
