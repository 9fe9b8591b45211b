use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Quat};

use crate::core::Session;
use crate::dom;
use crate::overlay;
use crate::render::{GpuState, LineVertex};

/// A card whose face texture and metadata are fully built. This is the only
/// state handed from async fetch tasks to the frame loop, so a card is either
/// completely absent or completely ready when it appears.
pub struct ReadyCard {
    /// Index in the fetched page list; fixes the card's ring slot.
    pub ordinal: usize,
    pub title: String,
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub type PendingCards = Rc<RefCell<Vec<ReadyCard>>>;

/// Move fully constructed cards into the session and the renderer in one
/// step; after this a card is visible and pickable, never half-built.
pub fn drain_pending(pending: &PendingCards, session: &mut Session, gpu: &mut GpuState) {
    let was_empty = session.cards.is_empty();
    for ready in pending.borrow_mut().drain(..) {
        session.add_card(ready.ordinal, &ready.title);
        gpu.add_card(&ready.pixels, ready.width, ready.height);
        log::info!("card ready: {} (slot {})", ready.title, ready.ordinal);
    }
    debug_assert_eq!(session.cards.len(), gpu.card_count());
    if was_empty && !session.cards.is_empty() {
        // First card on screen; the loading message has served its purpose.
        if let Some(doc) = dom::window_document() {
            overlay::hide_status(&doc);
        }
    }
}

/// Commit the session's current geometry to the renderer: per-card model
/// matrices plus the line-segment vertices, rebuilt wholesale every frame any
/// endpoint moved.
pub fn commit(session: &Session, gpu: &mut GpuState, view_proj: Mat4) -> anyhow::Result<()> {
    let models: Vec<Mat4> = session
        .cards
        .iter()
        .map(|c| Mat4::from_rotation_translation(Quat::from_rotation_y(c.yaw), c.position))
        .collect();

    let mut vertices = Vec::with_capacity(session.lines.len() * 2);
    for seg in &session.lines {
        vertices.push(LineVertex {
            position: seg.start.to_array(),
        });
        vertices.push(LineVertex {
            position: seg.end.to_array(),
        });
    }
    gpu.set_lines(&vertices);
    gpu.render(view_proj, &models)
}
