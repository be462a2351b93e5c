// Host-page wiring constants.

/// DOM id of the canvas element the backdrop attaches to.
pub const CANVAS_ELEMENT_ID: &str = "backdrop-canvas";
