use clap::Parser;
use thiserror::Error;

use crate::consts;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("timestep must be a positive number of seconds, got {0}")]
    Timestep(f64),
    #[error("gravitational constant must be positive, got {0}")]
    Gravity(f64),
    #[error("frame rate must be at least 1")]
    Fps,
    #[error("window size must be non-zero, got {0}x{1}")]
    WindowSize(u32, u32),
    #[error("scale must be a positive number of pixels per AU, got {0}")]
    Scale(f64),
}

/// Tunables of the simulation and its window.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Real-time planetary gravity simulation")]
pub struct Config {
    /// Simulated seconds per step
    #[arg(long, default_value_t = consts::DAY)]
    pub timestep: f64,

    /// Gravitational constant
    #[arg(long, default_value_t = consts::G)]
    pub gravity: f64,

    /// Maximum number of points kept in each body's trail
    #[arg(long, default_value_t = consts::DEFAULT_TRAIL_LEN)]
    pub trail_len: usize,

    /// Target frames per second; at most one step is taken per frame
    #[arg(long, default_value_t = consts::DEFAULT_FPS)]
    pub fps: u32,

    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    /// Pixels per astronomical unit
    #[arg(long, default_value_t = consts::DEFAULT_SCALE)]
    pub scale: f64,

    /// Start with the simulation paused
    #[arg(long)]
    pub paused: bool,

    /// Don't draw trails
    #[arg(long)]
    pub hide_trails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timestep: consts::DAY,
            gravity: consts::G,
            trail_len: consts::DEFAULT_TRAIL_LEN,
            fps: consts::DEFAULT_FPS,
            width: 1000,
            height: 1000,
            scale: consts::DEFAULT_SCALE,
            paused: false,
            hide_trails: false,
        }
    }
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.timestep) {
            return Err(ConfigError::Timestep(self.timestep));
        }
        if !is_positive(self.gravity) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if self.fps == 0 {
            return Err(ConfigError::Fps);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::WindowSize(self.width, self.height));
        }
        if !is_positive(self.scale) {
            return Err(ConfigError::Scale(self.scale));
        }
        Ok(())
    }
}
