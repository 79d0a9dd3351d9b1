use nalgebra::Vector2;
use tracing::warn;

use crate::body::Body;
use crate::consts;

/// Every unordered pair `(i, j)` with `i < j`, for `n` bodies.
pub fn pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Fixed-step semi-implicit Euler integrator for mutual gravitation.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub g: f64,
    dt: f64, // Seconds of simulated time per step

    pairs: Vec<(usize, usize)>,
    pairs_for: Option<usize>, // Body count the cached pairs were built for
    steps: u64,
    elapsed: f64,
    warned_non_finite: bool,
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::new(consts::G, consts::DAY)
    }
}

impl Integrator {
    pub fn new(g: f64, dt: f64) -> Self {
        Integrator {
            g,
            dt,
            pairs: Vec::new(),
            pairs_for: None,
            steps: 0,
            elapsed: 0.0,
            warned_non_finite: false,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    // Simulated seconds since the first step
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advances every body by exactly one timestep.
    ///
    /// Forces are fully accumulated from the positions at the start of the
    /// step before any velocity or position changes.
    pub fn step(&mut self, bodies: &mut [Body]) {
        self.clear_forces(bodies);
        self.accumulate_forces(bodies);

        for b in bodies.iter_mut() {
            b.v += b.force / b.mass * self.dt;
        }
        for b in bodies.iter_mut() {
            b.pos += b.v * self.dt;
            b.trail.push(b.pos);
        }

        self.clear_forces(bodies);
        self.steps += 1;
        self.elapsed += self.dt;

        if !self.warned_non_finite {
            if let Some(b) = bodies.iter().find(|b| !b.is_finite()) {
                warn!(
                    body = b.label(),
                    step = self.steps,
                    "body state is no longer finite, bodies probably coincided"
                );
                self.warned_non_finite = true;
            }
        }
    }

    fn clear_forces(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.force = Vector2::zeros();
        }
    }

    fn accumulate_forces(&mut self, bodies: &mut [Body]) {
        if self.pairs_for != Some(bodies.len()) {
            self.pairs = pairs(bodies.len());
            self.pairs_for = Some(bodies.len());
        }

        for &(i, j) in &self.pairs {
            let (left, right) = bodies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];

            let f = a.attraction(b, self.g);
            a.force += f;
            b.force -= f;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::Point2;

    use crate::consts::{AU, DAY, G};

    fn body_at(mass: f64, x: f64, y: f64) -> Body {
        Body::new(mass, Point2::new(x, y), Vector2::zeros())
    }

    #[test]
    fn test_pair_set() {
        for n in 0..8 {
            let ps = pairs(n);
            assert_eq!(ps.len(), n * n.saturating_sub(1) / 2);
            assert!(ps.iter().all(|&(i, j)| i < j && j < n));

            let mut dedup = ps.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), ps.len());
        }
        assert_eq!(pairs(3), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_pairwise_forces_cancel() {
        let mut integrator = Integrator::default();
        let mut bodies = vec![body_at(6e24, -AU, 0.0), body_at(2e30, 0.0, 0.0)];

        integrator.accumulate_forces(&mut bodies);
        let total = bodies[0].force + bodies[1].force;
        assert_eq!(total, Vector2::zeros());
        assert_relative_eq!(
            bodies[0].force.norm(),
            G * 6e24 * 2e30 / (AU * AU),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_forces_sum_over_all_pairs() {
        let mut integrator = Integrator::default();
        let mut bodies = vec![
            body_at(1e24, 0.0, 0.0),
            body_at(2e24, 1e9, 0.0),
            body_at(3e24, 0.0, 2e9),
        ];

        let expected = bodies[0].attraction(&bodies[1], G) + bodies[0].attraction(&bodies[2], G);
        integrator.accumulate_forces(&mut bodies);
        assert_relative_eq!(bodies[0].force.x, expected.x, max_relative = 1e-12);
        assert_relative_eq!(bodies[0].force.y, expected.y, max_relative = 1e-12);

        let net = bodies.iter().fold(Vector2::<f64>::zeros(), |acc, b| acc + b.force);
        assert_relative_eq!(net.norm(), 0.0, epsilon = 1e-6 * bodies[0].force.norm());
    }

    #[test]
    fn test_step_resets_forces_and_advances_time() {
        let mut integrator = Integrator::default();
        let mut bodies = vec![body_at(1e24, 0.0, 0.0), body_at(1e24, 1e9, 0.0)];
        // Stale force left by a caller is discarded
        bodies[0].force = Vector2::new(1e30, 1e30);

        integrator.step(&mut bodies);
        integrator.step(&mut bodies);

        assert!(bodies.iter().all(|b| b.force == Vector2::zeros()));
        assert_eq!(integrator.steps(), 2);
        assert_relative_eq!(integrator.elapsed(), 2.0 * DAY);
        assert_eq!(bodies[0].trail.len(), 2);
    }

    #[test]
    fn test_elapsed_tracks_timestep() {
        let mut integrator = Integrator::new(G, 3600.0);
        let mut bodies = vec![body_at(1e24, 0.0, 0.0), body_at(1e24, 1e9, 0.0)];

        for _ in 0..3 {
            integrator.step(&mut bodies);
        }
        assert_eq!(integrator.dt(), 3600.0);
        assert_eq!(integrator.steps(), 3);
        assert_relative_eq!(integrator.elapsed(), 3.0 * 3600.0);
    }

    #[test]
    fn test_semi_implicit_ordering() {
        let dt = 10.0;
        let mut integrator = Integrator::new(G, dt);
        let mut bodies = vec![body_at(1e10, 0.0, 0.0), body_at(1e10, 1e3, 0.0)];

        let f = bodies[0].attraction(&bodies[1], G);
        integrator.step(&mut bodies);

        // Position uses the velocity that was just updated
        let v = f.x / 1e10 * dt;
        assert_relative_eq!(bodies[0].v.x, v, max_relative = 1e-12);
        assert_relative_eq!(bodies[0].pos.x, v * dt, max_relative = 1e-12);
        assert_relative_eq!(bodies[1].pos.x, 1e3 - v * dt, max_relative = 1e-12);
    }

    #[test]
    fn test_single_body_drifts() {
        let mut integrator = Integrator::new(G, 2.0);
        let mut bodies = vec![Body::new(1.0, Point2::origin(), Vector2::new(3.0, -1.0))];

        integrator.step(&mut bodies);
        assert_eq!(bodies[0].pos, Point2::new(6.0, -2.0));
        assert_eq!(bodies[0].v, Vector2::new(3.0, -1.0));
    }

    #[test]
    fn test_pair_cache_follows_body_count() {
        let mut integrator = Integrator::default();
        let mut two = vec![body_at(1.0, 0.0, 0.0), body_at(1.0, 1.0, 0.0)];
        integrator.step(&mut two);
        assert_eq!(integrator.pairs.len(), 1);

        let mut three = vec![
            body_at(1.0, 0.0, 0.0),
            body_at(1.0, 1.0, 0.0),
            body_at(1.0, 0.0, 1.0),
        ];
        integrator.step(&mut three);
        assert_eq!(integrator.pairs.len(), 3);
    }
}
