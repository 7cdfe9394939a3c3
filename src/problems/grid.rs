//! Walking across grids and mazes.

use std::io::{Read, Write};

use geometry::coord2d::map::{Grid, Map};
use geometry::coord2d::path::Path;
use geometry::coord2d::Point;

use crate::{get_input_reader, CliError, Request};

type Error = anyhow::Error;

const MAZE: &str = include_str!("maze.txt");

pub fn open(request: &Request, out: &mut dyn Write) -> Result<(), Error> {
    route(&Grid::open(4, 4), request, out)
}

pub fn maze(request: &Request, out: &mut dyn Write) -> Result<(), Error> {
    let text = match &request.map {
        Some(filename) => {
            let mut text = String::new();
            get_input_reader(filename)?.read_to_string(&mut text)?;
            text
        }
        None => MAZE.to_string(),
    };
    let grid: Grid = text.parse().map_err(CliError::from)?;
    route(&grid, request, out)
}

fn point(literal: Option<&str>) -> Result<Option<Point>, CliError> {
    literal
        .map(|s| s.parse().map_err(|e| CliError::InvalidPoint(s.to_string(), e)))
        .transpose()
}

/// Search from the requested start, else the map's `S`, else the top left
/// corner, to the requested goal, else the map's `G`, else the bottom
/// right corner.
fn route(grid: &Grid, request: &Request, out: &mut dyn Write) -> Result<(), Error> {
    let origin = point(request.from.as_deref())?
        .or_else(|| grid.start())
        .unwrap_or_else(Point::origin);
    let destination = point(request.to.as_deref())?
        .or_else(|| grid.goal())
        .unwrap_or_else(|| Point::new(grid.width() - 1, grid.height() - 1));

    let problem = grid.problem(origin, destination);
    let solution = super::solve(&problem, problem.manhattan(), request)?;

    let directions: String = solution.actions.iter().map(|d| d.letter()).collect();
    super::report(out, request, &solution, &directions)?;
    writeln!(out, "{}", grid.render(Some(&Path::walk(origin, &solution.actions))))?;
    Ok(())
}
