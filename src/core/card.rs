use glam::Vec3;

/// One wiki page shown as a textured card on the ring.
///
/// Cards are created once per fetched page and live for the whole session;
/// position/yaw are mutated every frame while an animation is active.
#[derive(Clone, Debug)]
pub struct Card {
    /// Page title, stored lower-cased. Unique per project.
    pub title: String,
    pub position: Vec3,
    /// Rotation about the world Y axis, radians.
    pub yaw: f32,
    /// Per-frame position delta; zero when idle, stale after a flight ends.
    pub velocity: Vec3,
    /// Per-frame yaw delta; same lifecycle as `velocity`.
    pub yaw_velocity: f32,
}

impl Card {
    pub fn new(title: &str, position: Vec3, yaw: f32) -> Self {
        Self {
            title: title.to_lowercase(),
            position,
            yaw,
            velocity: Vec3::ZERO,
            yaw_velocity: 0.0,
        }
    }
}

/// Line segment joining the selected card to one linked card.
///
/// Segments are replaced wholesale whenever geometry changes; `velocity`
/// applies to `end` only so the free endpoint tracks its linked card through
/// a flight.
#[derive(Clone, Debug)]
pub struct LinkSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub velocity: Vec3,
}
