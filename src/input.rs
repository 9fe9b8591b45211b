use glam::{Vec2, Vec3};
use web_sys as web;

// Gesture classification thresholds (canvas pixels / milliseconds).
pub const PRESS_MIN_MS: f64 = 500.0;
pub const PAN_MIN_PX: f32 = 12.0;
pub const PAN_STEP_MIN_PX: f32 = 2.0;

/// Discrete gestures recognized from raw pointer events. Tap/press carry the
/// canvas pixel where the pointer went down, for ray picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap(Vec2),
    Press(Vec2),
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

/// Pointer-sequence state machine: one pointer down-move-up cycle classifies
/// as a tap (short, stationary), a press (long, stationary), or a stream of
/// directional pan steps (one per sufficiently large move event).
#[derive(Default, Clone, Copy)]
pub struct GestureState {
    down: bool,
    start: Vec2,
    last: Vec2,
    down_at_ms: f64,
    panned: bool,
}

impl GestureState {
    pub fn on_down(&mut self, pos: Vec2, now_ms: f64) {
        self.down = true;
        self.start = pos;
        self.last = pos;
        self.down_at_ms = now_ms;
        self.panned = false;
    }

    pub fn on_move(&mut self, pos: Vec2) -> Option<Gesture> {
        if !self.down {
            return None;
        }
        let step = pos - self.last;
        self.last = pos;
        if !self.panned && (pos - self.start).length() > PAN_MIN_PX {
            self.panned = true;
        }
        if !self.panned || step.length() < PAN_STEP_MIN_PX {
            return None;
        }
        Some(if step.x.abs() >= step.y.abs() {
            if step.x < 0.0 {
                Gesture::PanLeft
            } else {
                Gesture::PanRight
            }
        } else if step.y < 0.0 {
            // Screen Y grows downward; moving up pans up.
            Gesture::PanUp
        } else {
            Gesture::PanDown
        })
    }

    pub fn on_up(&mut self, now_ms: f64) -> Option<Gesture> {
        if !self.down {
            return None;
        }
        self.down = false;
        if self.panned {
            return None;
        }
        if now_ms - self.down_at_ms >= PRESS_MIN_MS {
            Some(Gesture::Press(self.start))
        } else {
            Some(Gesture::Tap(self.start))
        }
    }
}

/// Ray-sphere intersection; returns the near hit distance when in front of
/// the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest card hit by the ray, as an index into `centers`.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: impl Iterator<Item = Vec3>,
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in centers.enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
