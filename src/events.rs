use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::camera;
use crate::constants::{PICK_SPHERE_RADIUS, SCRAPBOX_BASE};
use crate::core::{resolve_links, Session, PAN_ROTATE_RAD, PAN_TRANSLATE_Y};
use crate::fetch;
use crate::input::{self, Gesture, GestureState};
use crate::pose::PoseState;

#[derive(Clone)]
pub struct GestureWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub pose: Rc<RefCell<PoseState>>,
    pub project: Rc<String>,
}

pub fn wire_gesture_handlers(w: GestureWiring) {
    let state = Rc::new(RefCell::new(GestureState::default()));
    wire_pointerdown(&w, &state);
    wire_pointermove(&w, &state);
    wire_pointerup(&w, &state);
}

fn wire_pointerdown(w: &GestureWiring, state: &Rc<RefCell<GestureState>>) {
    let w = w.clone();
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        state.borrow_mut().on_down(px, js_sys::Date::now());
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &GestureWiring, state: &Rc<RefCell<GestureState>>) {
    let w = w.clone();
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let Some(gesture) = state.borrow_mut().on_move(px) else {
            return;
        };
        // Pans are instantaneous; the session rejects them mid-flight.
        let mut session = w.session.borrow_mut();
        match gesture {
            Gesture::PanLeft => session.pan_rotate(-PAN_ROTATE_RAD),
            Gesture::PanRight => session.pan_rotate(PAN_ROTATE_RAD),
            Gesture::PanUp => session.pan_translate(PAN_TRANSLATE_Y),
            Gesture::PanDown => session.pan_translate(-PAN_TRANSLATE_Y),
            Gesture::Tap(_) | Gesture::Press(_) => false,
        };
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &GestureWiring, state: &Rc<RefCell<GestureState>>) {
    let w = w.clone();
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let Some(gesture) = state.borrow_mut().on_up(js_sys::Date::now()) else {
            return;
        };
        match gesture {
            Gesture::Tap(px) => on_tap(&w, px),
            Gesture::Press(px) => on_press(&w, px),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Ray-pick the card under a canvas pixel, if any.
fn pick_card(w: &GestureWiring, px: glam::Vec2) -> Option<usize> {
    let pose = w.pose.borrow();
    let (ro, rd) = camera::screen_to_world_ray(&w.canvas, px.x, px.y, &pose);
    let session = w.session.borrow();
    input::pick_nearest(
        ro,
        rd,
        session.cards.iter().map(|c| c.position),
        PICK_SPHERE_RADIUS,
    )
}

/// Tap: resolve the card's link graph, then start the link-split flight.
/// The fetch completion lands on this thread between frames; `select`
/// re-checks the flight gate then.
fn on_tap(w: &GestureWiring, px: glam::Vec2) {
    if w.session.borrow().gestures_blocked() {
        return;
    }
    let Some(index) = pick_card(w, px) else {
        return;
    };
    let title = w.session.borrow().cards[index].title.clone();
    let session = w.session.clone();
    let project = w.project.clone();
    spawn_local(async move {
        match fetch::fetch_page_detail(&project, &title).await {
            Ok(detail) => {
                let one_hop: Vec<String> = detail
                    .related_pages
                    .links1hop
                    .iter()
                    .map(|r| r.title.clone())
                    .collect();
                let linked = resolve_links(&detail.links, &one_hop);
                let started = session.borrow_mut().select(index, &linked);
                log::info!(
                    "tap {title}: {} linked titles, flight {}",
                    linked.len(),
                    if started { "started" } else { "not started" }
                );
            }
            Err(e) => log::warn!("page detail fetch failed for {title}: {e:?}"),
        }
    });
}

/// Press: open the page in the wiki itself.
fn on_press(w: &GestureWiring, px: glam::Vec2) {
    if w.session.borrow().gestures_blocked() {
        return;
    }
    let Some(index) = pick_card(w, px) else {
        return;
    };
    let title = w.session.borrow().cards[index].title.clone();
    let url = format!("{SCRAPBOX_BASE}/{}/{title}", w.project);
    if let Some(wnd) = web::window() {
        if let Err(e) = wnd.open_with_url(&url) {
            log::warn!("open {url}: {e:?}");
        }
    }
}
