use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS size of the canvas, from its layout rect.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Resize the canvas backing store to CSS size * devicePixelRatio and keep
/// the 2D context in CSS-pixel coordinates. Returns the CSS size, which is
/// what the simulation runs in.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let (css_w, css_h) = canvas_css_size(canvas);
    if let Some(window) = web::window() {
        let dpr = window.device_pixel_ratio();
        canvas.set_width(((css_w as f64 * dpr) as u32).max(1));
        canvas.set_height(((css_h as f64 * dpr) as u32).max(1));
        // Resizing the backing store resets the context transform.
        let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
    (css_w, css_h)
}
