use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Animator;
use crate::{dom, input};

/// Track the pointer from window `pointermove` events so particles near the
/// cursor can link to it. Pointer moves never regenerate the field.
pub fn wire_pointer_move(canvas: web::HtmlCanvasElement, animator: Rc<RefCell<Animator>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        animator.borrow_mut().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store and the simulation viewport in step with
/// window resizes. The animator decides whether the particle set regenerates.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    animator: Rc<RefCell<Animator>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas, &ctx);
        animator.borrow_mut().handle_resize(css_w, css_h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
