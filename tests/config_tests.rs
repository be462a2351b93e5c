// Host-side tests for device-class selection and the parameter presets.
// The crate root is wasm-only, so we include the pure core modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::*;

#[test]
fn device_class_splits_at_the_width_threshold() {
    assert_eq!(DeviceClass::for_width(320.0), DeviceClass::Compact);
    assert_eq!(DeviceClass::for_width(600.0), DeviceClass::Compact);
    assert_eq!(DeviceClass::for_width(COMPACT_WIDTH_MAX), DeviceClass::Compact);
    assert_eq!(
        DeviceClass::for_width(COMPACT_WIDTH_MAX + 1.0),
        DeviceClass::Standard
    );
    assert_eq!(DeviceClass::for_width(1024.0), DeviceClass::Standard);
}

#[test]
fn select_config_follows_device_class() {
    assert_eq!(select_config(1024.0), SimulationConfig::STANDARD);
    assert_eq!(select_config(600.0), SimulationConfig::COMPACT);
}

#[test]
fn compact_preset_reduces_load() {
    let standard = SimulationConfig::STANDARD;
    let compact = SimulationConfig::COMPACT;

    assert_eq!(standard.particle_count, 80);
    assert_eq!(compact.particle_count, 40);
    assert_eq!(compact.connection_distance * 2.0, standard.connection_distance);
    assert!(compact.max_connections <= standard.max_connections);
    assert!(compact.base_size <= standard.base_size);
}

#[test]
fn presets_are_sane() {
    for cfg in [SimulationConfig::STANDARD, SimulationConfig::COMPACT] {
        assert!(cfg.particle_count > 0);
        assert!(cfg.base_size > 0.0);
        assert!(cfg.added_size >= 0.0);
        assert!(cfg.base_speed > 0.0);
        assert!(cfg.speed_variance > 0.0);
        assert!(cfg.connection_distance > 0.0);
        assert!(cfg.max_connections > 0);
    }
}

#[test]
fn degenerate_viewports_are_detected() {
    assert!(ViewportState::new(0.0, 600.0).is_degenerate());
    assert!(ViewportState::new(800.0, 0.0).is_degenerate());
    assert!(ViewportState::new(-1.0, 600.0).is_degenerate());
    assert!(!ViewportState::new(800.0, 600.0).is_degenerate());
}

#[test]
fn viewport_reports_its_device_class() {
    assert_eq!(
        ViewportState::new(1024.0, 800.0).device_class(),
        DeviceClass::Standard
    );
    assert_eq!(
        ViewportState::new(600.0, 800.0).device_class(),
        DeviceClass::Compact
    );
}
