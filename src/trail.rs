use std::collections::VecDeque;

use nalgebra::Point2;

/// Bounded history of past positions, oldest first.
///
/// Once `capacity` points are stored, every push evicts the oldest point
/// before appending the new one.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point2<f64>>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, p: Point2<f64>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&Point2<f64>> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Point2<f64>> {
        self.points.back()
    }
}
