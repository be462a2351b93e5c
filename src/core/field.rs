use glam::Vec2;
use rand::prelude::*;

use super::color::Rgba;
use super::config::{SimulationConfig, ViewportState};
use super::surface::Surface;

// Connection rendering tuning.
pub const LINE_WIDTH: f32 = 0.5;
// Dimming applied on top of the distance falloff for particle-particle lines.
pub const LINE_DIM: f32 = 0.8;

// Pointer links reach further than particle-particle links and draw dimmer.
pub const POINTER_REACH_SCALE: f32 = 1.5;
pub const POINTER_LINE_DIM: f32 = 0.5;
// Fraction of the remaining distance a linked particle moves toward the
// pointer each frame, applied after integration.
pub const POINTER_PULL: f32 = 0.01;

// Particle opacity band: base plus uniform jitter at spawn.
pub const PARTICLE_ALPHA_BASE: f32 = 0.7;
pub const PARTICLE_ALPHA_JITTER: f32 = 0.2;

// Pointer-proximity highlight falloff radius, as a fraction of viewport width.
pub const HIGHLIGHT_RADIUS_FRAC: f32 = 0.3;

/// One simulated point.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Connections drawn so far this frame; reset by [`ParticleField::begin_frame`].
    pub connections: u32,
}

/// Bounded 2D particle simulation with proximity connection drawing.
///
/// Sampling goes through a seeded RNG so a field is reproducible from
/// `(seed, config, viewport)` alone.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    config: SimulationConfig,
    viewport: ViewportState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: SimulationConfig, viewport: ViewportState, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            config,
            viewport,
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate();
        field
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Swap in a new preset and viewport, replacing the whole particle set.
    pub fn reconfigure(&mut self, config: SimulationConfig, viewport: ViewportState) {
        self.config = config;
        self.viewport = viewport;
        self.regenerate();
    }

    /// Rebuild the particle set for the current config and viewport. The new
    /// set is built in full before it replaces the old one; a degenerate
    /// viewport yields an empty set.
    pub fn regenerate(&mut self) {
        if self.viewport.is_degenerate() {
            self.particles = Vec::new();
            return;
        }
        let mut next = Vec::with_capacity(self.config.particle_count);
        for index in 0..self.config.particle_count {
            next.push(self.spawn(index));
        }
        self.particles = next;
        log::debug!(
            "[field] regenerated {} particles for {:.0}x{:.0}",
            self.particles.len(),
            self.viewport.width,
            self.viewport.height
        );
    }

    fn spawn(&mut self, index: usize) -> Particle {
        let cfg = self.config;
        let vp = self.viewport;
        let rng = &mut self.rng;
        let position = Vec2::new(rng.gen::<f32>() * vp.width, rng.gen::<f32>() * vp.height);
        let component = |rng: &mut StdRng| {
            (rng.gen::<f32>() - 0.5)
                * cfg.speed_variance
                * (cfg.base_speed + rng.gen::<f32>() * cfg.added_speed)
        };
        let velocity = Vec2::new(component(rng), component(rng));
        let radius = cfg.base_size + rng.gen::<f32>() * cfg.added_size;
        let tone = if index % 2 == 0 {
            cfg.base_color
        } else {
            cfg.added_color
        };
        let alpha = PARTICLE_ALPHA_BASE + rng.gen::<f32>() * PARTICLE_ALPHA_JITTER;
        Particle {
            position,
            velocity,
            radius,
            color: tone.with_alpha(alpha),
            connections: 0,
        }
    }

    /// Reset per-frame connection counters.
    pub fn begin_frame(&mut self) {
        for p in &mut self.particles {
            p.connections = 0;
        }
    }

    /// One Euler step with reflect-only boundary handling. Reflection flips
    /// the velocity sign without clamping the position, so a particle may
    /// overshoot an edge by at most one frame's displacement before the next
    /// step carries it back inward.
    pub fn integrate(&mut self) {
        let ViewportState { width, height } = self.viewport;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.x <= 0.0 || p.position.x >= width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y <= 0.0 || p.position.y >= height {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    /// Connection pass: pointer links first (with the attraction nudge), then
    /// particle pairs in ascending index order, each greedy up to its cap.
    /// Pair evaluation order is fixed, so the connection graph is
    /// deterministic for a given particle ordering and positions.
    pub fn draw_connections(&mut self, pointer: Option<Vec2>, surface: &mut dyn Surface) {
        let cfg = self.config;
        if let Some(target) = pointer {
            let reach = cfg.connection_distance * POINTER_REACH_SCALE;
            for p in &mut self.particles {
                let dist = p.position.distance(target);
                if dist < reach {
                    let opacity = (1.0 - dist / reach) * POINTER_LINE_DIM;
                    surface.stroke_line(
                        p.position,
                        target,
                        LINE_WIDTH,
                        Rgba::WHITE.with_alpha(opacity),
                    );
                    p.position += (target - p.position) * POINTER_PULL;
                }
            }
        }
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                if self.particles[i].connections >= cfg.max_connections {
                    break;
                }
                if self.particles[j].connections >= cfg.max_connections {
                    continue;
                }
                let a = self.particles[i].position;
                let b = self.particles[j].position;
                let dist = a.distance(b);
                if dist < cfg.connection_distance {
                    let t = dist / cfg.connection_distance;
                    let color = cfg
                        .base_color
                        .lerp(cfg.added_color, t)
                        .with_alpha((1.0 - t) * LINE_DIM);
                    surface.stroke_line(a, b, LINE_WIDTH, color);
                    self.particles[i].connections += 1;
                    self.particles[j].connections += 1;
                }
            }
        }
    }

    /// Draw every particle as a filled circle, grown and tinted toward the
    /// secondary color as the pointer gets close.
    pub fn draw_particles(&self, pointer: Option<Vec2>, surface: &mut dyn Surface) {
        let cfg = self.config;
        let falloff = self.viewport.width * HIGHLIGHT_RADIUS_FRAC;
        for p in &self.particles {
            let boost = match pointer {
                Some(target) if falloff > 0.0 => {
                    (1.0 - p.position.distance(target) / falloff).max(0.0)
                }
                _ => 0.0,
            };
            let radius = p.radius * (1.0 + boost);
            let color = p.color.lerp(cfg.added_color.with_alpha(p.color.a), boost);
            surface.fill_circle(p.position, radius, color);
        }
    }
}
