use super::color::Rgba;

/// Widest viewport (CSS px) still treated as a compact device.
pub const COMPACT_WIDTH_MAX: f32 = 768.0;

/// Coarse device bucket selecting which parameter preset is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Compact,
    Standard,
}

impl DeviceClass {
    pub fn for_width(width: f32) -> Self {
        if width <= COMPACT_WIDTH_MAX {
            Self::Compact
        } else {
            Self::Standard
        }
    }
}

/// Parameter bundle for the particle field. Immutable once selected; a
/// device-class flip swaps the whole preset rather than patching fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub base_size: f32,
    pub added_size: f32,
    pub base_speed: f32,
    pub added_speed: f32,
    pub speed_variance: f32,
    pub connection_distance: f32,
    pub max_connections: u32,
    pub base_color: Rgba,
    pub added_color: Rgba,
}

impl SimulationConfig {
    /// Desktop preset.
    pub const STANDARD: Self = Self {
        particle_count: 80,
        base_size: 2.0,
        added_size: 1.0,
        base_speed: 0.5,
        added_speed: 0.5,
        speed_variance: 1.0,
        connection_distance: 150.0,
        max_connections: 5,
        base_color: Rgba::rgb(62, 116, 245),
        added_color: Rgba::rgb(149, 76, 233),
    };

    /// Narrow-viewport preset: fewer particles, half the connection reach.
    pub const COMPACT: Self = Self {
        particle_count: 40,
        base_size: 1.5,
        added_size: 1.0,
        base_speed: 0.4,
        added_speed: 0.4,
        speed_variance: 1.0,
        connection_distance: 75.0,
        max_connections: 3,
        base_color: Rgba::rgb(62, 116, 245),
        added_color: Rgba::rgb(149, 76, 233),
    };
}

/// Preset for a viewport width; `COMPACT` at or below the class threshold.
pub fn select_config(viewport_width: f32) -> SimulationConfig {
    match DeviceClass::for_width(viewport_width) {
        DeviceClass::Compact => SimulationConfig::COMPACT,
        DeviceClass::Standard => SimulationConfig::STANDARD,
    }
}

/// Render-surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport renders nothing and spawns nothing.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn device_class(self) -> DeviceClass {
        DeviceClass::for_width(self.width)
    }
}
