//! Routing across a map as a search problem.

use searcher::{Cost, Problem};

use super::map::Map;
use super::{Direction, Point};

/// Find a route between two points on a map, moving one square at a time.
///
/// Stepping onto a square costs whatever the map charges for it.
#[derive(Debug, Clone)]
pub struct GridProblem<'m, M> {
    map: &'m M,
    origin: Point,
    destination: Point,
}

impl<'m, M> GridProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, origin: Point, destination: Point) -> Self {
        Self {
            map,
            origin,
            destination,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Manhattan distance to the destination. Admissible as long as no
    /// square costs less than 1.
    pub fn manhattan(&self) -> impl Fn(&Point) -> Cost + Clone + Send + Sync {
        let destination = self.destination;
        move |point: &Point| point.manhattan_distance(destination) as Cost
    }
}

impl<'m, M> Problem for GridProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;

    fn initial_state(&self) -> Point {
        self.origin
    }

    fn actions(&self, state: &Point) -> Vec<Direction> {
        Direction::all()
            .filter(|d| self.map.is_traversable(state.step(*d)))
            .collect()
    }

    fn result(&self, state: &Point, action: &Direction) -> Point {
        state.step(*action)
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.destination
    }

    fn step_cost(&self, _state: &Point, _action: &Direction, next: &Point) -> Cost {
        self.map.cost(*next)
    }

    fn goal_state(&self) -> Option<Point> {
        Some(self.destination)
    }

    fn predecessors(&self, state: &Point) -> Option<Vec<(Direction, Point)>> {
        if !self.map.is_traversable(*state) {
            return Some(Vec::new());
        }
        Some(
            Direction::all()
                .map(|d| (d, state.step(d.reverse())))
                .filter(|(_, previous)| self.map.is_traversable(*previous))
                .collect(),
        )
    }
}
