#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod overlay;
mod pose;
mod render;
mod scene;
mod texture;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cardring starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_status(&doc, "Failed to start; see console for details.");
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // No pose source is a terminal state: show the fallback and stop.
    if !pose::supported(&window) {
        overlay::show_unsupported(&document);
        return Ok(());
    }
    let pose = pose::wire(&window);

    let gpu = match frame::init_gpu(&canvas).await {
        Some(g) => g,
        None => {
            overlay::show_unsupported(&document);
            return Ok(());
        }
    };

    let project = fetch::project_from_query(
        &window.location().search().unwrap_or_default(),
        constants::DEFAULT_PROJECT,
    );
    overlay::show_status(&document, &format!("Loading {project}…"));

    let pages = fetch::fetch_page_list(&project).await?;
    if pages.is_empty() {
        overlay::show_status(&document, &format!("{project}: no pages"));
        return Ok(());
    }
    overlay::show_status(&document, &format!("{project}: {} pages", pages.len()));
    log::info!("project {project}: {} pages", pages.len());

    let base_height = pose.borrow().position.y;
    let session = Rc::new(RefCell::new(core::Session::new(pages.len(), base_height)));
    let pending: scene::PendingCards = Rc::new(RefCell::new(Vec::new()));

    // Build card faces concurrently; each card only becomes visible once its
    // texture is complete, and a failed fetch just skips that card.
    for (ordinal, page) in pages.into_iter().enumerate() {
        let document = document.clone();
        let pending = pending.clone();
        spawn_local(async move {
            match texture::rasterize_card(&document, &page.title, page.image.as_deref()).await {
                Ok(raster) => pending.borrow_mut().push(scene::ReadyCard {
                    ordinal,
                    title: page.title,
                    pixels: raster.pixels,
                    width: raster.width,
                    height: raster.height,
                }),
                Err(e) => log::warn!("skipping card {}: {e:?}", page.title),
            }
        });
    }

    events::wire_gesture_handlers(events::GestureWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        pose: pose.clone(),
        project: Rc::new(project),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        pose,
        pending,
        gpu,
        canvas,
        last_instant: Instant::now(),
        frame_count: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
