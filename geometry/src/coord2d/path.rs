//! Path data structures
//!
//! A path is a sequence of steps in a 2D geometry.

use std::fmt;

use super::{Direction, Point};

/// A sequence of steps in a 2D geometry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    origin: Point,
    steps: Vec<Point>,
}

impl Path {
    /// Construct a new path which starts from this point.
    pub fn new(origin: Point) -> Self {
        Path {
            origin,
            steps: Vec::new(),
        }
    }

    /// Follow a route of directions from the origin.
    pub fn walk<'d>(origin: Point, directions: impl IntoIterator<Item = &'d Direction>) -> Self {
        let mut path = Path::new(origin);
        for direction in directions {
            path.push(*direction);
        }
        path
    }

    /// Extend this path by a step in a particular direction.
    pub fn push(&mut self, direction: Direction) {
        let next = self.destination().step(direction);
        self.steps.push(next);
    }

    /// Iterate over the points in this path, origin included.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        std::iter::once(&self.origin).chain(self.steps.iter())
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        self.steps.last().unwrap_or(&self.origin)
    }

    /// How many steps this path takes.
    pub fn distance(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.iter().any(|p| p == point)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, point) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({})", point)?;
        }
        Ok(())
    }
}
