//! The road map of Romania, searched from a city to Bucharest.

use std::collections::HashMap;
use std::io::Write;

use itertools::Itertools;
use lazy_static::lazy_static;

use searcher::{Cost, Problem};

use crate::{CliError, Request};

type Error = anyhow::Error;
type City = &'static str;

pub const BUCHAREST: City = "Bucharest";

const ROADS: [(City, City, Cost); 23] = [
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Zerind", "Oradea", 71),
    ("Oradea", "Sibiu", 151),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Drobeta", 75),
    ("Drobeta", "Craiova", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Craiova", "Pitesti", 138),
    ("Sibiu", "Fagaras", 99),
    ("Sibiu", "Rimnicu Vilcea", 80),
    ("Rimnicu Vilcea", "Pitesti", 97),
    ("Fagaras", "Bucharest", 211),
    ("Pitesti", "Bucharest", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Hirsova", "Eforie", 86),
    ("Urziceni", "Vaslui", 142),
    ("Vaslui", "Iasi", 92),
    ("Iasi", "Neamt", 87),
];

/// Straight-line distance to Bucharest.
const STRAIGHT_LINE: [(City, Cost); 20] = [
    ("Arad", 366),
    ("Bucharest", 0),
    ("Craiova", 160),
    ("Drobeta", 242),
    ("Eforie", 161),
    ("Fagaras", 176),
    ("Giurgiu", 77),
    ("Hirsova", 151),
    ("Iasi", 226),
    ("Lugoj", 244),
    ("Mehadia", 241),
    ("Neamt", 234),
    ("Oradea", 380),
    ("Pitesti", 100),
    ("Rimnicu Vilcea", 193),
    ("Sibiu", 253),
    ("Timisoara", 329),
    ("Urziceni", 80),
    ("Vaslui", 199),
    ("Zerind", 374),
];

lazy_static! {
    /// Roads out of each city, in the order they are listed.
    static ref NEIGHBORS: HashMap<City, Vec<(City, Cost)>> = {
        let mut n: HashMap<City, Vec<(City, Cost)>> = HashMap::new();
        for &(a, b, distance) in ROADS.iter() {
            n.entry(a).or_default().push((b, distance));
            n.entry(b).or_default().push((a, distance));
        }
        n
    };
}

/// Look up a city by name, ignoring case.
pub fn city(name: &str) -> Option<City> {
    STRAIGHT_LINE
        .iter()
        .map(|(c, _)| *c)
        .find(|c| c.eq_ignore_ascii_case(name.trim()))
}

/// Admissible and consistent estimate of the remaining road distance.
pub fn straight_line(city: &City) -> Cost {
    STRAIGHT_LINE
        .iter()
        .find(|(c, _)| c == city)
        .map_or(Cost::MAX, |(_, d)| *d)
}

/// Drive from a city to Bucharest. An action names the next city.
#[derive(Debug, Clone)]
pub struct Romania {
    start: City,
}

impl Romania {
    pub fn new(start: City) -> Self {
        Self { start }
    }

    fn roads(&self, city: &City) -> &'static [(City, Cost)] {
        NEIGHBORS.get(city).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Romania {
    fn default() -> Self {
        Self::new("Arad")
    }
}

impl Problem for Romania {
    type State = City;
    type Action = City;

    fn initial_state(&self) -> City {
        self.start
    }

    fn actions(&self, state: &City) -> Vec<City> {
        self.roads(state).iter().map(|(to, _)| *to).collect()
    }

    fn result(&self, _state: &City, action: &City) -> City {
        action
    }

    fn is_goal(&self, state: &City) -> bool {
        *state == BUCHAREST
    }

    fn step_cost(&self, state: &City, _action: &City, next: &City) -> Cost {
        self.roads(state)
            .iter()
            .find(|(to, _)| to == next)
            .map_or(Cost::MAX, |(_, d)| *d)
    }

    fn goal_state(&self) -> Option<City> {
        Some(BUCHAREST)
    }

    fn predecessors(&self, state: &City) -> Option<Vec<(City, City)>> {
        Some(self.roads(state).iter().map(|(from, _)| (*state, *from)).collect())
    }
}

pub fn main(request: &Request, out: &mut dyn Write) -> Result<(), Error> {
    let start = match &request.from {
        Some(name) => city(name).ok_or_else(|| CliError::UnknownCity(name.clone()))?,
        None => "Arad",
    };
    if let Some(name) = &request.to {
        if city(name) != Some(BUCHAREST) {
            return Err(CliError::UnsupportedGoal(BUCHAREST).into());
        }
    }

    let problem = Romania::new(start);
    let solution = super::solve(&problem, straight_line, request)?;
    let route = std::iter::once(&start).chain(solution.actions.iter()).join(" -> ");
    super::report(out, request, &solution, &route)?;
    Ok(())
}
