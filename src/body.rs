use nalgebra::{Point2, Vector2};

use crate::consts;
use crate::trail::Trail;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// All points/vectors are in reference to global xy-plane, in SI units
#[derive(Debug, Clone)]
pub struct Body {
    pub name: Option<String>,
    pub mass: f64,
    pub pos: Point2<f64>,
    pub v: Vector2<f64>,
    // Accumulated during a step, zero between steps
    pub force: Vector2<f64>,
    pub radius: f32, // In pixels, for drawing only
    pub color: [f32; 4],
    pub trail: Trail,
}

impl Body {
    /// `mass` must be strictly positive; zero or negative mass gives NaN motion.
    pub fn new(mass: f64, pos: Point2<f64>, v: Vector2<f64>) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive, got {}", mass);
        Body {
            name: None,
            mass,
            pos,
            v,
            force: Vector2::zeros(),
            radius: 5.0,
            color: WHITE,
            trail: Trail::with_capacity(consts::DEFAULT_TRAIL_LEN),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::with_capacity(capacity);
        self
    }

    /// Force exerted on `self` by `other`, in newtons.
    ///
    /// Two bodies at the same position give a zero squared distance; the
    /// result is then non-finite and is returned as-is.
    pub fn attraction(&self, other: &Body, g: f64) -> Vector2<f64> {
        let dx = other.pos.x - self.pos.x;
        let dy = other.pos.y - self.pos.y;

        let r_squared = dx.powi(2) + dy.powi(2);
        let f = g * self.mass * other.mass / r_squared;

        let theta = dy.atan2(dx);
        Vector2::new(f * theta.cos(), f * theta.sin())
    }

    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite()
            && self.pos.y.is_finite()
            && self.v.x.is_finite()
            && self.v.y.is_finite()
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
