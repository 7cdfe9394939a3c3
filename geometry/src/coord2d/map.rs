//! Trait to define a map suitable for pathfinding
//! on a 2D coordinate grid, and a grid read from text.
use std::fmt;
use std::str::FromStr;

use itertools::{iproduct, Itertools};
use searcher::{Cost, Mode, Search, Strategy};
use thiserror::Error;

use super::path::Path;
use super::problem::GridProblem;
use super::Point;
use crate::Position;

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Cost of stepping onto this location.
    fn cost(&self, _location: Point) -> Cost {
        1
    }

    /// Describe a route across this map as a search problem.
    fn problem(&self, origin: Point, destination: Point) -> GridProblem<Self> {
        GridProblem::new(self, origin, destination)
    }

    /// Find the cheapest path on this map with A*.
    fn path(&self, origin: Point, destination: Point) -> Option<Path> {
        if !self.is_traversable(origin) {
            return None;
        }
        let problem = self.problem(origin, destination);
        let search = Search::with_heuristic(Strategy::AStar, Mode::Graph, problem.manhattan()).ok()?;
        let solution = search.run(&problem).ok()?;
        Some(Path::walk(origin, &solution.actions))
    }
}

/// One square of a [Grid].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    /// An open square, which costs this much to step onto.
    Open(Cost),
}

/// Error when parsing a grid from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("Unexpected map character '{0}' at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Row {0} is {1} wide, expected {2}")]
    Ragged(usize, usize, usize),

    #[error("Map has more than one '{0}'")]
    DuplicateMarker(char),

    #[error("Map is empty")]
    Empty,
}

/// A rectangular map of walls and open squares.
///
/// Read from text, one character per square:
///
/// - `#` is a wall
/// - `.` is open, and costs 1 to enter
/// - `1` to `9` are open, and cost that much to enter
/// - `S` and `G` are open, and mark the start and goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: Position,
    height: Position,
    cells: Vec<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Grid {
    /// A grid without walls, where every square costs 1.
    pub fn open(width: Position, height: Position) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Open(1); (width.max(0) * height.max(0)) as usize],
            start: None,
            goal: None,
        }
    }

    pub fn width(&self) -> Position {
        self.width
    }

    pub fn height(&self) -> Position {
        self.height
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    fn index(&self, location: Point) -> Option<usize> {
        if location.x < 0 || location.y < 0 || location.x >= self.width || location.y >= self.height {
            return None;
        }
        Some((location.y * self.width + location.x) as usize)
    }

    pub fn cell(&self, location: Point) -> Option<Cell> {
        self.index(location).map(|i| self.cells[i])
    }

    /// Change a square. Points outside the grid are ignored.
    pub fn set(&mut self, location: Point, cell: Cell) {
        if let Some(i) = self.index(location) {
            self.cells[i] = cell;
        }
    }

    /// Put up a wall.
    pub fn block(&mut self, location: Point) {
        self.set(location, Cell::Wall);
    }

    /// Every location on the grid, in reading order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| Point::new(x, y))
    }

    /// Draw the grid, marking the squares a path passes through with `*`.
    pub fn render(&self, path: Option<&Path>) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let point = Point::new(x, y);
                        self.glyph(point, path.map_or(false, |p| p.contains(&point)))
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    fn glyph(&self, point: Point, on_path: bool) -> char {
        if Some(point) == self.start {
            return 'S';
        }
        if Some(point) == self.goal {
            return 'G';
        }
        match self.cell(point) {
            Some(Cell::Wall) | None => '#',
            _ if on_path => '*',
            Some(Cell::Open(1)) => '.',
            Some(Cell::Open(cost)) => std::char::from_digit(cost.min(9) as u32, 10).unwrap_or('?'),
        }
    }
}

impl Map for Grid {
    fn is_traversable(&self, location: Point) -> bool {
        matches!(self.cell(location), Some(Cell::Open(_)))
    }

    fn cost(&self, location: Point) -> Cost {
        match self.cell(location) {
            Some(Cell::Open(cost)) => cost,
            _ => Cost::MAX,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or(ParseGridError::Empty)?;

        let mut grid = Grid::open(width as Position, rows.len() as Position);
        for (y, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != width {
                return Err(ParseGridError::Ragged(y, length, width));
            }

            for (x, c) in row.chars().enumerate() {
                let point: Point = (x, y).into();
                let cell = match c {
                    '#' => Cell::Wall,
                    '.' => Cell::Open(1),
                    'S' | 'G' => {
                        let marker = if c == 'S' { &mut grid.start } else { &mut grid.goal };
                        if marker.replace(point).is_some() {
                            return Err(ParseGridError::DuplicateMarker(c));
                        }
                        Cell::Open(1)
                    }
                    '1'..='9' => Cell::Open(c.to_digit(10).unwrap_or(1) as Cost),
                    _ => return Err(ParseGridError::UnexpectedCharacter(c, point)),
                };
                grid.set(point, cell);
            }
        }
        Ok(grid)
    }
}
