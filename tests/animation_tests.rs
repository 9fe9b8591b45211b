// Host-side tests for the frame-budgeted animation scheduler.

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
    pub mod animation {
        include!("../src/core/animation.rs");
    }
}

use engine::animation::{
    rotate_cards_y, rotation_step, translate_cards_y, AnimationScheduler, Segments,
};
use engine::card::{Card, LinkSegment};
use engine::constants::{
    FLIGHT_FRAMES, ROTATION_FRAMES, ROTATION_RATE_FULL, ROTATION_RATE_MID,
};
use engine::math::rotate_y;
use glam::Vec3;

const EPS: f32 = 1e-4;

fn card_at(x: f32) -> Card {
    Card::new("page", Vec3::new(x, 0.0, 0.0), 0.0)
}

#[test]
fn flight_advances_cards_by_velocity_for_exactly_the_budget() {
    let mut cards = vec![card_at(0.0)];
    cards[0].velocity = Vec3::new(0.01, 0.0, -0.02);
    cards[0].yaw_velocity = 0.002;
    let mut lines = Segments::new();
    let mut sched = AnimationScheduler::new();
    sched.start_flight();

    let mut ticks = 0;
    while sched.flight_active() {
        assert!(sched.tick(&mut cards, &mut lines));
        ticks += 1;
        assert!(ticks <= FLIGHT_FRAMES, "flight never ended");
    }
    assert_eq!(ticks, FLIGHT_FRAMES);

    let frames = FLIGHT_FRAMES as f32;
    let expected = Vec3::new(0.01, 0.0, -0.02) * frames;
    assert!((cards[0].position - expected).length() < EPS);
    assert!((cards[0].yaw - 0.002 * frames).abs() < EPS);

    // An idle scheduler moves nothing.
    let before = cards[0].position;
    assert!(!sched.tick(&mut cards, &mut lines));
    assert!((cards[0].position - before).length() < EPS);
}

#[test]
fn flight_moves_segment_free_endpoints_only() {
    let mut cards = vec![card_at(0.0)];
    let mut lines = Segments::new();
    lines.push(LinkSegment {
        start: Vec3::new(0.0, 0.0, 0.6),
        end: Vec3::new(0.6, 0.0, 0.0),
        velocity: Vec3::new(-0.01, 0.01, 0.0),
    });
    let mut sched = AnimationScheduler::new();
    sched.start_flight();
    for _ in 0..10 {
        sched.tick(&mut cards, &mut lines);
    }
    assert!((lines[0].start - Vec3::new(0.0, 0.0, 0.6)).length() < EPS);
    let expected_end = Vec3::new(0.6, 0.0, 0.0) + Vec3::new(-0.01, 0.01, 0.0) * 10.0;
    assert!((lines[0].end - expected_end).length() < EPS);
}

#[test]
fn rotation_step_eases_out_and_never_increases() {
    assert!((rotation_step(ROTATION_FRAMES) - ROTATION_RATE_FULL).abs() < EPS);
    assert!((rotation_step(60) - ROTATION_RATE_MID).abs() < EPS);
    assert!((rotation_step(1) - 0.01).abs() < EPS);
    let mut prev = f32::INFINITY;
    for remaining in (1..=ROTATION_FRAMES).rev() {
        let step = rotation_step(remaining);
        assert!(step > 0.0, "step must stay positive at {remaining}");
        assert!(
            step <= prev + EPS,
            "step grew from {prev} to {step} at {remaining}"
        );
        prev = step;
    }
}

#[test]
fn rotation_countdown_runs_to_zero_and_is_additive() {
    let mut cards = vec![card_at(0.6)];
    let mut lines = Segments::new();
    let mut sched = AnimationScheduler::new();
    sched.extend_rotation();
    sched.extend_rotation();

    let mut ticks = 0;
    while sched.rotation_active() {
        assert!(sched.tick(&mut cards, &mut lines));
        ticks += 1;
        assert!(ticks <= 2 * ROTATION_FRAMES, "rotation never ended");
    }
    assert_eq!(ticks, 2 * ROTATION_FRAMES);
    // Rotation preserves the ring radius.
    assert!((cards[0].position.length() - 0.6).abs() < EPS);
}

#[test]
fn flight_and_rotation_decrement_in_the_same_tick() {
    let mut cards = vec![card_at(0.6)];
    cards[0].velocity = Vec3::new(0.0, 0.01, 0.0);
    let mut lines = Segments::new();
    let mut sched = AnimationScheduler::new();
    sched.start_flight();
    sched.extend_rotation();

    assert!(sched.tick(&mut cards, &mut lines));
    // Velocity applied, then the whole ring rotated by the first step.
    let expected = rotate_y(
        Vec3::new(0.6, 0.01, 0.0),
        rotation_step(ROTATION_FRAMES),
    );
    assert!((cards[0].position - expected).length() < EPS);
    assert!(sched.flight_active());
    assert!(sched.rotation_active());
}

#[test]
fn rotate_cards_y_counter_rotates_yaw_and_carries_segments() {
    let mut cards = vec![Card::new("page", Vec3::new(0.0, 0.0, 0.6), 0.5)];
    let mut lines = Segments::new();
    lines.push(LinkSegment {
        start: Vec3::new(0.6, 0.1, 0.0),
        end: Vec3::new(0.0, 0.1, 0.6),
        velocity: Vec3::new(1.0, 2.0, 3.0),
    });
    rotate_cards_y(&mut cards, &mut lines, 0.3);
    assert!((cards[0].position - rotate_y(Vec3::new(0.0, 0.0, 0.6), 0.3)).length() < EPS);
    assert!((cards[0].yaw - 0.2).abs() < EPS);
    assert!((lines[0].start - rotate_y(Vec3::new(0.6, 0.1, 0.0), 0.3)).length() < EPS);
    assert!((lines[0].end - rotate_y(Vec3::new(0.0, 0.1, 0.6), 0.3)).length() < EPS);
    // Segment velocity is carried over as-is.
    assert!((lines[0].velocity - Vec3::new(1.0, 2.0, 3.0)).length() < EPS);
}

#[test]
fn translate_cards_y_shifts_cards_and_both_segment_endpoints() {
    let mut cards = vec![card_at(0.6)];
    let mut lines = Segments::new();
    lines.push(LinkSegment {
        start: Vec3::new(0.6, 0.0, 0.0),
        end: Vec3::new(0.0, 0.0, 0.6),
        velocity: Vec3::ZERO,
    });
    translate_cards_y(&mut cards, &mut lines, -0.05);
    assert!((cards[0].position.y + 0.05).abs() < EPS);
    assert!((lines[0].start.y + 0.05).abs() < EPS);
    assert!((lines[0].end.y + 0.05).abs() < EPS);
    assert!((cards[0].position.x - 0.6).abs() < EPS, "x untouched");
}
