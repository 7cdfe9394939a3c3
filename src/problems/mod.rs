//! Built-in problems, and the plumbing they share to run and report a
//! search.

use std::fmt;
use std::io::{self, Write};

use searcher::{Heuristic, Outcome, Problem, Search, Solution};

use crate::Request;

pub mod grid;
pub mod romania;

type Error = anyhow::Error;

/// Run the requested search. Uninformed strategies ignore the heuristic.
pub(crate) fn solve<P, H>(
    problem: &P,
    heuristic: H,
    request: &Request,
) -> Result<Solution<P::State, P::Action>, Error>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let search = Search::with_heuristic(request.strategy, request.mode, heuristic)?
        .with_options(request.options.clone());
    Ok(search.run(problem)?)
}

pub(crate) fn report<S, A>(
    out: &mut dyn Write,
    request: &Request,
    solution: &Solution<S, A>,
    route: &str,
) -> io::Result<()>
where
    S: fmt::Display,
{
    writeln!(out, "{} ({})", request.strategy, request.mode)?;
    match solution.outcome {
        Outcome::Goal => writeln!(out, "Reached {} in {} steps", solution.state, solution.len())?,
        Outcome::LocalOptimum => writeln!(
            out,
            "Stuck at a local optimum, {}, after {} steps",
            solution.state,
            solution.len()
        )?,
    }
    if !route.is_empty() {
        writeln!(out, "Route: {}", route)?;
    }
    if let Some(cost) = solution.metrics.path_cost {
        writeln!(out, "Cost: {}", cost)?;
    }
    writeln!(out, "{}", solution.metrics)
}
