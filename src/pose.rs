use glam::{EulerRot, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Integration step and damping for the positional sway derived from device
// motion. The shake detector only needs relative frame-to-frame movement, so
// a damped integrator over the accelerometer is enough here.
const MOTION_DT: f32 = 1.0 / 60.0;
const MOTION_DAMPING: f32 = 0.9;
const MOTION_RANGE: f32 = 0.5;

/// Latest device pose, updated by orientation/motion event listeners and read
/// once per frame. Stands in for the AR session's tracked camera.
pub struct PoseState {
    pub orientation: Quat,
    pub position: Vec3,
    velocity: Vec3,
}

impl Default for PoseState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

/// Whether this environment exposes a pose source at all. Reached once at
/// startup; a `false` here is a terminal, user-visible state.
pub fn supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false)
}

/// Attach orientation and motion listeners feeding a shared pose cell.
pub fn wire(window: &web::Window) -> Rc<RefCell<PoseState>> {
    let pose = Rc::new(RefCell::new(PoseState::default()));

    let pose_orient = pose.clone();
    let orient = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        let alpha = ev.alpha().unwrap_or(0.0) as f32;
        let beta = ev.beta().unwrap_or(0.0) as f32;
        let gamma = ev.gamma().unwrap_or(0.0) as f32;
        // Device orientation angles are intrinsic Z-X'-Y'' Tait-Bryan.
        pose_orient.borrow_mut().orientation = Quat::from_euler(
            EulerRot::ZXY,
            alpha.to_radians(),
            beta.to_radians(),
            gamma.to_radians(),
        );
    }) as Box<dyn FnMut(_)>);
    _ = window
        .add_event_listener_with_callback("deviceorientation", orient.as_ref().unchecked_ref());
    orient.forget();

    let pose_motion = pose.clone();
    let motion = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let Some(acc) = ev.acceleration() else {
            return;
        };
        let accel = Vec3::new(
            acc.x().unwrap_or(0.0) as f32,
            acc.y().unwrap_or(0.0) as f32,
            acc.z().unwrap_or(0.0) as f32,
        );
        let mut p = pose_motion.borrow_mut();
        let velocity = (p.velocity + accel * MOTION_DT) * MOTION_DAMPING;
        p.velocity = velocity;
        p.position = (p.position + velocity * MOTION_DT)
            .clamp(Vec3::splat(-MOTION_RANGE), Vec3::splat(MOTION_RANGE));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("devicemotion", motion.as_ref().unchecked_ref());
    motion.forget();

    pose
}
