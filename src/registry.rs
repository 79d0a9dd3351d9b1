use crate::body::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Owns every body of the simulation, in insertion order.
///
/// Bodies are added before the simulation starts and are never removed, so
/// a `BodyId` stays valid for the lifetime of the registry.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        BodyRegistry { bodies: Vec::new() }
    }

    pub fn add(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    pub fn all(&self) -> &[Body] {
        &self.bodies
    }

    pub fn all_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl std::iter::FromIterator<Body> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        BodyRegistry {
            bodies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::{Point2, Vector2};

    #[test]
    fn test_insertion_order_is_kept() {
        let mut registry = BodyRegistry::new();
        let a = registry.add(Body::new(1.0, Point2::origin(), Vector2::zeros()).with_name("a"));
        let b = registry.add(Body::new(2.0, Point2::origin(), Vector2::zeros()).with_name("b"));

        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(registry.len(), 2);

        let names: Vec<&str> = registry.all().iter().map(Body::label).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.all()[b.0].mass, 2.0);
    }
}
