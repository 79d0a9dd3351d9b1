use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::consts::AU;
use crate::registry::BodyRegistry;

pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
pub const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
pub const ORANGE: [f32; 4] = [1.0, 0.5, 0.31, 1.0];

// Planets start on the negative x-axis moving in +y
fn planet(name: &str, mass: f64, dist_au: f64, speed: f64, radius: f32, color: [f32; 4]) -> Body {
    Body::new(mass, Point2::new(-dist_au * AU, 0.0), Vector2::new(0.0, speed))
        .with_name(name)
        .with_radius(radius)
        .with_color(color)
}

/// The sun and the planets out to Jupiter.
pub fn solar_system(trail_len: usize) -> BodyRegistry {
    vec![
        planet("SUN", 2e30, 0.0, 0.0, 15.0, YELLOW),
        planet("EARTH", 6e24, 1.0, 29_783.0, 5.0, BLUE),
        planet("MARS", 6.39e23, 1.5, 24_130.0, 7.0, RED),
        planet("VENUS", 4.87e24, 0.7, 35_000.0, 6.0, CYAN),
        planet("MERCURY", 3.3e23, 0.3, 47_000.0, 3.0, MAGENTA),
        planet("JUPITER", 1.9e27, 4.0, 15_000.0, 10.0, ORANGE),
    ]
    .into_iter()
    .map(|b| b.with_trail_capacity(trail_len))
    .collect()
}
