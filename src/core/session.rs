use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::TAU;

use super::animation::{rotate_cards_y, translate_cards_y, AnimationScheduler, Segments};
use super::card::{Card, LinkSegment};
use super::constants::{DISTANCE, PREVIEW_RAD};
use super::layout::{compute_link_split, ring_position};
use super::shake::ShakeDetector;

/// Everything the frame loop and gesture handlers mutate, owned in one place.
///
/// Single-threaded by construction: mutation happens only inside the frame
/// callback or gesture/fetch callbacks, which the browser never runs
/// concurrently with it.
pub struct Session {
    pub cards: Vec<Card>,
    pub lines: Segments,
    pub scheduler: AnimationScheduler,
    pub shake: ShakeDetector,
    pub selected: Option<usize>,
    /// Fixed page count from the fetched page list. Cards whose fetch failed
    /// never join `cards`, but spacing formulas keep using this denominator.
    page_count: usize,
    base_height: f32,
}

/// What one frame tick did, for the scene commit step.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickReport {
    pub geometry_changed: bool,
    pub shake: bool,
}

impl Session {
    pub fn new(page_count: usize, base_height: f32) -> Self {
        Self {
            cards: Vec::with_capacity(page_count),
            lines: Segments::new(),
            scheduler: AnimationScheduler::new(),
            shake: ShakeDetector::new(),
            selected: None,
            page_count,
            base_height,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// 360° divided by the project's page count, radians.
    pub fn unit_angle(&self) -> f32 {
        TAU / self.page_count.max(1) as f32
    }

    /// True while a flight is in progress; tap/press/pan are ignored then.
    pub fn gestures_blocked(&self) -> bool {
        self.scheduler.flight_active()
    }

    /// Append a fully constructed card at its ring slot. `ordinal` is the
    /// card's index in the fetched page list, so late arrivals still land in
    /// their own slot. Returns the card's session index (for picking).
    pub fn add_card(&mut self, ordinal: usize, title: &str) -> usize {
        let (position, yaw) = ring_position(ordinal, self.page_count, self.base_height, DISTANCE);
        self.cards.push(Card::new(title, position, yaw));
        self.cards.len() - 1
    }

    /// Tap action: install the link-split flight for card `index` given its
    /// resolved link titles. Returns true when a flight actually started
    /// (at least one linked card is present on the ring).
    pub fn select(&mut self, index: usize, linked: &FnvHashSet<String>) -> bool {
        if self.scheduler.flight_active() || index >= self.cards.len() {
            return false;
        }
        // The selected card stays put; stale velocity must not move it.
        self.cards[index].velocity = Vec3::ZERO;
        self.cards[index].yaw_velocity = 0.0;
        self.lines.clear();
        self.selected = Some(index);

        let targets = compute_link_split(
            &self.cards,
            index,
            linked,
            self.page_count,
            DISTANCE,
            PREVIEW_RAD,
        );
        if targets.is_empty() {
            return false;
        }

        let selected_pos = self.cards[index].position;
        for target in &targets {
            let card = &mut self.cards[target.index];
            card.velocity = target.velocity;
            card.yaw_velocity = target.yaw_velocity;
            if target.linked {
                self.lines.push(LinkSegment {
                    start: selected_pos,
                    end: card.position,
                    velocity: target.velocity,
                });
            }
        }
        self.scheduler.start_flight();
        true
    }

    /// Pan-left/right: instantaneous Y rotation of the whole ring.
    pub fn pan_rotate(&mut self, rad: f32) -> bool {
        if self.scheduler.flight_active() {
            return false;
        }
        rotate_cards_y(&mut self.cards, &mut self.lines, rad);
        true
    }

    /// Pan-up/down: instantaneous vertical shift of the whole ring.
    pub fn pan_translate(&mut self, dy: f32) -> bool {
        if self.scheduler.flight_active() {
            return false;
        }
        translate_cards_y(&mut self.cards, &mut self.lines, dy);
        true
    }

    /// One frame: advance both animation countdowns, then feed the shake
    /// detector with this frame's camera position. A shake extends the
    /// rotation countdown, taking effect from the next tick.
    pub fn tick(&mut self, camera_position: Vec3) -> TickReport {
        let geometry_changed = self.scheduler.tick(&mut self.cards, &mut self.lines);
        let shake = self.shake.sample(camera_position);
        if shake {
            self.scheduler.extend_rotation();
        }
        TickReport {
            geometry_changed,
            shake,
        }
    }
}
