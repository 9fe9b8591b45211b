use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera;
use crate::core::Session;
use crate::pose::PoseState;
use crate::render::GpuState;
use crate::scene::{self, PendingCards};

// Frames between frame-time diagnostics.
const FRAME_LOG_INTERVAL: u64 = 600;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub pose: Rc<RefCell<PoseState>>,
    pub pending: PendingCards,
    pub gpu: GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,

    pub last_instant: Instant,
    pub frame_count: u64,
}

impl FrameContext {
    /// One rendered frame: make finished cards visible, advance the
    /// animation countdowns, feed the shake detector, then commit the scene.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frame_count += 1;
        if self.frame_count % FRAME_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: {:.1} ms",
                self.frame_count,
                dt.as_secs_f64() * 1e3
            );
        }

        let mut session = self.session.borrow_mut();
        scene::drain_pending(&self.pending, &mut session, &mut self.gpu);

        let camera_position = self.pose.borrow().position;
        let report = session.tick(camera_position);
        if report.shake {
            log::info!("shake detected; extending rotation flourish");
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let view_proj = camera::view_proj(&self.canvas, &self.pose.borrow());
        if let Err(e) = scene::commit(&session, &mut self.gpu, view_proj) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
