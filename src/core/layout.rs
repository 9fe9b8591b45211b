use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::TAU;

use super::card::Card;
use super::constants::FLIGHT_FRAMES;
use super::math::{rotate_about_axis, rotate_y};

/// Target state for one card repositioned by a link-split, with the per-frame
/// velocities that carry it there over `FLIGHT_FRAMES`.
#[derive(Clone, Debug)]
pub struct CardTarget {
    /// Index of the card in the session's card list.
    pub index: usize,
    pub position: Vec3,
    pub yaw: f32,
    pub velocity: Vec3,
    pub yaw_velocity: f32,
    /// True if this card is in the selected card's resolved link set.
    pub linked: bool,
}

/// Ring slot for card `index` of `total`: evenly spaced around a vertical
/// circle of the given radius, facing outward.
pub fn ring_position(index: usize, total: usize, base_height: f32, radius: f32) -> (Vec3, f32) {
    let theta = index as f32 * (TAU / total.max(1) as f32);
    let position = Vec3::new(theta.sin() * radius, base_height, theta.cos() * radius);
    (position, theta)
}

/// Compute the two-band link-split layout for a selected card.
///
/// Linked cards converge into a narrow preview band around the selected
/// card's radial direction; everything else is spread over the remaining arc.
/// `total` is the project's fixed page count (the denominator of the spacing
/// formulas), which can exceed `cards.len()` when some fetches failed.
///
/// Returns one target per non-selected card, or an empty vec when the
/// selected card has no linked cards on the ring (no flight should start).
pub fn compute_link_split(
    cards: &[Card],
    selected: usize,
    linked: &FnvHashSet<String>,
    total: usize,
    radius: f32,
    preview_rad: f32,
) -> Vec<CardTarget> {
    let linked_count = cards
        .iter()
        .enumerate()
        .filter(|(i, c)| *i != selected && linked.contains(&c.title))
        .count();
    if linked_count == 0 {
        return Vec::new();
    }

    let selected_pos = cards[selected].position;
    let selected_yaw = cards[selected].yaw;

    // The preview band pivots about the selected card's radial direction.
    let axis = selected_pos.normalize_or_zero();
    // Linked cards sit this far from the axis, lifted out of the ring plane
    // before rotation: radius * sin(preview/2).
    let lifted = selected_pos + Vec3::new(0.0, radius * (preview_rad * 0.5).sin(), 0.0);
    let unit_link = TAU / linked_count as f32;

    let unit_other = (TAU - preview_rad) / (total - linked_count) as f32;
    let offset = preview_rad * 0.5 + unit_other;

    let frames = FLIGHT_FRAMES as f32;
    let mut targets = Vec::with_capacity(cards.len().saturating_sub(1));
    let mut link_n = 0usize;
    let mut other_n = 0usize;

    for (i, card) in cards.iter().enumerate() {
        if i == selected {
            continue;
        }
        let (position, yaw, is_linked) = if linked.contains(&card.title) {
            let target = rotate_about_axis(lifted, axis, unit_link * link_n as f32);
            link_n += 1;
            (target, selected_yaw, true)
        } else {
            let angle = offset + unit_other * other_n as f32;
            other_n += 1;
            (rotate_y(selected_pos, angle), selected_yaw - angle, false)
        };
        targets.push(CardTarget {
            index: i,
            position,
            yaw,
            velocity: (position - card.position) / frames,
            yaw_velocity: (yaw - card.yaw) / frames,
            linked: is_linked,
        });
    }
    targets
}
