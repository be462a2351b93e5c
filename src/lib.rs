#![cfg(target_arch = "wasm32")]

//! Interactive particle-field backdrop rendered onto a full-page canvas.
//!
//! The simulation core under [`core`] is platform-free; this crate root wires
//! it to the DOM, the canvas 2D context, and `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{start_loop, Animator, LoopHandle, ViewportState};

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    // Handle of the running loop, held for `shutdown`.
    static ACTIVE_LOOP: RefCell<Option<LoopHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop and release the pending frame callback. Safe to
/// call more than once; the page calls this before removing the canvas.
#[wasm_bindgen]
pub fn shutdown() {
    ACTIVE_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
            log::info!("backdrop stopped");
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ELEMENT_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let ctx = render::context_2d(&canvas)?;
    let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas, &ctx);

    let seed = js_sys::Date::now() as u64;
    let animator = Rc::new(RefCell::new(Animator::new(
        ViewportState::new(css_w, css_h),
        seed,
    )));
    {
        let a = animator.borrow();
        log::info!(
            "[field] particles={} viewport={:.0}x{:.0} class={:?}",
            a.field.particles.len(),
            a.field.viewport().width,
            a.field.viewport().height,
            a.field.viewport().device_class()
        );
    }

    events::wire_pointer_move(canvas.clone(), animator.clone());
    events::wire_resize(canvas, ctx.clone(), animator.clone());

    let scheduler = Rc::new(frame::RafScheduler::new(window));
    let surface = Rc::new(RefCell::new(render::CanvasSurface::new(ctx)));
    let handle = start_loop(animator, scheduler, surface);
    ACTIVE_LOOP.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
