use nalgebra::{Point2, Vector2};
use tracing::info;

use crate::config::Config;
use crate::consts::{AU, DAY};
use crate::integrator::Integrator;
use crate::registry::BodyRegistry;

/// Everything the host loop owns between frames.
pub struct GameState {
    pub size: (f32, f32), // (width, height)

    pub origin: Point2<f64>, // Position of center on global xy-plane
    pub scale: f64, // Pixels per AU
    pub registry: BodyRegistry,
    pub integrator: Integrator,

    pub paused: bool,
    pub show_trails: bool,
}

impl GameState {
    pub fn new(config: &Config, registry: BodyRegistry) -> Self {
        info!(
            bodies = registry.len(),
            timestep = config.timestep,
            trail_len = config.trail_len,
            "starting simulation"
        );
        GameState {
            size: (config.width as f32, config.height as f32),
            origin: Point2::origin(),
            scale: config.scale,
            registry,
            integrator: Integrator::new(config.gravity, config.timestep),
            paused: config.paused,
            show_trails: !config.hide_trails,
        }
    }

    pub fn step(&mut self) {
        if !self.paused {
            self.integrator.step(self.registry.all_mut());
        }
    }

    /// Runs one frame's worth of simulation given how many update ticks
    /// were due since the last frame.
    ///
    /// At most one step is taken, however many ticks piled up, so every
    /// step is followed by a draw.
    pub fn frame(&mut self, due_ticks: u32) {
        if due_ticks > 0 {
            self.step();
        }
    }

    pub fn days(&self) -> f64 {
        self.integrator.elapsed() / DAY
    }

    fn pixels_per_metre(&self) -> f64 {
        self.scale / AU
    }

    pub fn global_to_local_coords(&self, pos: &Point2<f64>) -> Point2<f32> {
        let (center_x, center_y) = (self.size.0 / 2.0, self.size.1 / 2.0);
        let k = self.pixels_per_metre();
        let local_x = center_x + ((pos.x - self.origin.x) * k) as f32;
        let local_y = center_y + ((pos.y - self.origin.y) * k) as f32;
        Point2::new(local_x, local_y)
    }

    // Drag the view by a screen-space offset
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let k = self.pixels_per_metre();
        self.origin -= Vector2::new(f64::from(dx), f64::from(dy)) / k;
    }

    pub fn zoom(&mut self, factor: f64) {
        self.scale *= factor;
    }
}
