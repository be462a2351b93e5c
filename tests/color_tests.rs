// Host-side tests for the color token.
// The crate root is wasm-only, so we include the pure core module directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}

use color::Rgba;

#[test]
fn lerp_hits_both_endpoints() {
    let a = Rgba::rgb(62, 116, 245);
    let b = Rgba::rgb(149, 76, 233);

    let at_zero = a.lerp(b, 0.0);
    assert_eq!((at_zero.r, at_zero.g, at_zero.b), (62, 116, 245));

    let at_one = a.lerp(b, 1.0);
    assert_eq!((at_one.r, at_one.g, at_one.b), (149, 76, 233));
}

#[test]
fn lerp_floors_each_channel() {
    let a = Rgba::rgb(62, 116, 245);
    let b = Rgba::rgb(149, 76, 233);

    // 62 + (149-62)*0.5 = 105.5, floored.
    let mid = a.lerp(b, 0.5);
    assert_eq!(mid.r, 105);
    assert_eq!(mid.g, 96);
    assert_eq!(mid.b, 239);
}

#[test]
fn lerp_clamps_t() {
    let a = Rgba::rgb(10, 10, 10);
    let b = Rgba::rgb(20, 20, 20);
    assert_eq!(a.lerp(b, -1.0).r, 10);
    assert_eq!(a.lerp(b, 2.0).r, 20);
}

#[test]
fn with_alpha_clamps() {
    let c = Rgba::rgb(1, 2, 3);
    assert_eq!(c.with_alpha(0.5).a, 0.5);
    assert_eq!(c.with_alpha(1.5).a, 1.0);
    assert_eq!(c.with_alpha(-0.5).a, 0.0);
}

#[test]
fn to_css_matches_canvas_notation() {
    assert_eq!(
        Rgba::rgb(62, 116, 245).with_alpha(0.5).to_css(),
        "rgba(62, 116, 245, 0.5)"
    );
    assert_eq!(Rgba::WHITE.to_css(), "rgba(255, 255, 255, 1)");
}
