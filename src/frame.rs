use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{FrameScheduler, ScheduleHandle};

/// [`FrameScheduler`] adapter over `requestAnimationFrame`.
///
/// Callbacks are handed to the browser via `Closure::once_into_js`, which
/// frees the captured state after the single invocation. A cancelled
/// callback's JS function is left to the host GC.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> ScheduleHandle {
        let js_callback = Closure::once_into_js(callback);
        match self
            .window
            .request_animation_frame(js_callback.unchecked_ref())
        {
            Ok(id) => ScheduleHandle(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                ScheduleHandle(-1)
            }
        }
    }

    fn cancel(&self, handle: ScheduleHandle) {
        if handle.0 >= 0 {
            let _ = self.window.cancel_animation_frame(handle.0);
        }
    }
}
