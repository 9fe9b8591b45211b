// Host-side tests for the ring and link-split layout math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod math {
        include!("../src/core/math.rs");
    }
    pub mod card {
        include!("../src/core/card.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use engine::card::Card;
use engine::constants::{DISTANCE, FLIGHT_FRAMES, PREVIEW_RAD};
use engine::layout::{compute_link_split, ring_position};
use engine::math::{rotate_about_axis, rotate_y};
use fnv::FnvHashSet;
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

const EPS: f32 = 1e-4;

fn ring_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            let (pos, yaw) = ring_position(i, n, 0.0, DISTANCE);
            Card::new(&format!("page{i}"), pos, yaw)
        })
        .collect()
}

fn titles(names: &[&str]) -> FnvHashSet<String> {
    names.iter().map(|s| s.to_lowercase()).collect()
}

#[test]
fn rodrigues_matches_quaternion_rotation() {
    let axes = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 2.0, -0.5).normalize(),
        Vec3::new(-0.3, 0.1, 0.9).normalize(),
    ];
    let p = Vec3::new(0.4, -0.7, 1.3);
    for axis in axes {
        for k in 0..16 {
            let angle = k as f32 * TAU / 16.0;
            let got = rotate_about_axis(p, axis, angle);
            let want = Quat::from_axis_angle(axis, angle) * p;
            assert!(
                (got - want).length() < EPS,
                "axis {axis:?} angle {angle}: {got:?} vs {want:?}"
            );
        }
    }
}

#[test]
fn rotate_y_is_negative_axis_rotation() {
    // The planar formula spins clockwise looking down +Y, i.e. rotation by
    // -angle about the Y axis.
    let p = Vec3::new(0.6, 0.2, -0.3);
    for k in 0..12 {
        let angle = k as f32 * TAU / 12.0;
        let got = rotate_y(p, angle);
        let want = rotate_about_axis(p, Vec3::Y, -angle);
        assert!((got - want).length() < EPS, "angle {angle}");
    }
}

#[test]
fn ring_positions_equidistant_and_evenly_spaced() {
    for n in [1usize, 2, 3, 8, 17] {
        let mut yaw_sum = 0.0f32;
        for i in 0..n {
            let (pos, yaw) = ring_position(i, n, 0.25, DISTANCE);
            let radial = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!(
                (radial - DISTANCE).abs() < EPS,
                "card {i}/{n} at radius {radial}"
            );
            assert!((pos.y - 0.25).abs() < EPS);
            let expected_yaw = i as f32 * (TAU / n as f32);
            assert!((yaw - expected_yaw).abs() < EPS, "card {i}/{n} yaw {yaw}");
            yaw_sum += TAU / n as f32;
        }
        assert!((yaw_sum - TAU).abs() < 1e-3, "unit angles must sum to 360°");
    }
}

#[test]
fn link_split_places_linked_cards_in_preview_band() {
    let cards = ring_cards(8);
    let linked = titles(&["page1", "page6"]);
    let targets = compute_link_split(&cards, 3, &linked, 8, DISTANCE, PREVIEW_RAD);
    assert_eq!(targets.len(), 7, "every non-selected card gets a target");

    let selected_pos = cards[3].position;
    let axis = selected_pos.normalize();
    let rs = DISTANCE * (PREVIEW_RAD * 0.5).sin();

    let linked_targets: Vec<_> = targets.iter().filter(|t| t.linked).collect();
    assert_eq!(linked_targets.len(), 2);
    let mut perps = Vec::new();
    for t in &linked_targets {
        // Distance from the rotation axis must equal the preview radius.
        let perp = t.position - axis * t.position.dot(axis);
        assert!(
            (perp.length() - rs).abs() < EPS,
            "linked target off the preview circle: {} vs {rs}",
            perp.length()
        );
        assert!(
            (t.yaw - cards[3].yaw).abs() < EPS,
            "linked cards face the same way as the selected card"
        );
        perps.push(perp.normalize());
    }
    // Two linked cards sit 180° apart around the axis.
    assert!(
        (perps[0].dot(perps[1]) + 1.0).abs() < 1e-3,
        "expected antipodal preview placement, dot = {}",
        perps[0].dot(perps[1])
    );
}

#[test]
fn link_split_spreads_other_cards_over_remaining_arc() {
    let cards = ring_cards(8);
    let linked = titles(&["page1", "page6"]);
    let targets = compute_link_split(&cards, 3, &linked, 8, DISTANCE, PREVIEW_RAD);

    let selected_pos = cards[3].position;
    let selected_yaw = cards[3].yaw;
    let unit_other = (TAU - PREVIEW_RAD) / (8 - 2) as f32;
    let offset = PREVIEW_RAD * 0.5 + unit_other;

    let others: Vec<_> = targets.iter().filter(|t| !t.linked).collect();
    assert_eq!(others.len(), 5);
    for (j, t) in others.iter().enumerate() {
        let angle = offset + unit_other * j as f32;
        let expected = rotate_y(selected_pos, angle);
        assert!(
            (t.position - expected).length() < EPS,
            "other card {j} at {:?}, expected {expected:?}",
            t.position
        );
        assert!(
            (t.yaw - (selected_yaw - angle)).abs() < EPS,
            "other card {j} yaw"
        );
        // Others stay on the horizontal circle through the selected card.
        let radial = (t.position.x * t.position.x + t.position.z * t.position.z).sqrt();
        assert!((radial - DISTANCE).abs() < EPS);
        assert!((t.position.y - selected_pos.y).abs() < EPS);
    }
}

#[test]
fn link_split_velocities_cover_distance_in_flight_budget() {
    let cards = ring_cards(8);
    let linked = titles(&["page1", "page6"]);
    let targets = compute_link_split(&cards, 3, &linked, 8, DISTANCE, PREVIEW_RAD);
    let frames = FLIGHT_FRAMES as f32;
    for t in &targets {
        let card = &cards[t.index];
        let arrived = card.position + t.velocity * frames;
        assert!(
            (arrived - t.position).length() < EPS,
            "card {} velocity does not land on target",
            t.index
        );
        let arrived_yaw = card.yaw + t.yaw_velocity * frames;
        assert!((arrived_yaw - t.yaw).abs() < EPS);
    }
}

#[test]
fn link_split_with_no_links_produces_no_targets() {
    let cards = ring_cards(8);
    let targets = compute_link_split(&cards, 3, &titles(&[]), 8, DISTANCE, PREVIEW_RAD);
    assert!(targets.is_empty());

    // Links pointing at pages outside the ring also count for nothing.
    let targets = compute_link_split(
        &cards,
        3,
        &titles(&["not-on-the-ring"]),
        8,
        DISTANCE,
        PREVIEW_RAD,
    );
    assert!(targets.is_empty());
}

#[test]
fn link_split_single_link_gets_the_lifted_slot() {
    let cards = ring_cards(4);
    let linked = titles(&["page0"]);
    let targets = compute_link_split(&cards, 2, &linked, 4, DISTANCE, PREVIEW_RAD);
    let t = targets.iter().find(|t| t.linked).expect("one linked target");
    // Rotation by 0 about the axis leaves the lifted point in place.
    let rs = DISTANCE * (PREVIEW_RAD * 0.5).sin();
    let expected = cards[2].position + Vec3::new(0.0, rs, 0.0);
    assert!((t.position - expected).length() < EPS);
}

#[test]
fn self_link_is_harmless() {
    // A page linking to itself: the selected card is skipped by index, so the
    // split only distributes the remaining cards.
    let cards = ring_cards(4);
    let linked = titles(&["page2", "page0"]);
    let targets = compute_link_split(&cards, 2, &linked, 4, DISTANCE, PREVIEW_RAD);
    assert_eq!(targets.len(), 3);
    assert_eq!(targets.iter().filter(|t| t.linked).count(), 1);
    assert!(targets.iter().all(|t| t.index != 2));
}
