#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::debug;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use geometry::coord2d::map::ParseGridError;
use geometry::coord2d::ParsePointError;
use searcher::{Mode, SearchOptions, Strategy};

pub mod problems;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Request, &mut dyn Write) -> Result<(), Error>) + Send + Sync + 'static>;

/// Default number of expansions before a run gives up.
pub const DEFAULT_STEP_LIMIT: usize = 100_000;

struct Entry {
    about: &'static str,
    actor: Actor,
}

lazy_static! {
    static ref PROBLEMS: HashMap<&'static str, Entry> = {
        let mut s: HashMap<&'static str, Entry> = HashMap::new();
        s.insert(
            "romania",
            Entry {
                about: "Drive across Romania, guided by straight-line distance to Bucharest",
                actor: Box::new(problems::romania::main),
            },
        );
        s.insert(
            "grid",
            Entry {
                about: "Walk across an open 4x4 grid",
                actor: Box::new(problems::grid::open),
            },
        );
        s.insert(
            "maze",
            Entry {
                about: "Find a way through a maze, built in or read with --map",
                actor: Box::new(problems::grid::maze),
            },
        );
        s
    };
}

/// Everything a problem needs to know to run one search.
#[derive(Debug, Clone)]
pub struct Request {
    pub strategy: Strategy,
    pub mode: Mode,
    pub from: Option<String>,
    pub to: Option<String>,
    pub map: Option<String>,
    pub options: SearchOptions,
}

impl Request {
    pub fn new(strategy: Strategy, mode: Mode) -> Self {
        Self {
            strategy,
            mode,
            from: None,
            to: None,
            map: None,
            options: SearchOptions {
                step_limit: Some(DEFAULT_STEP_LIMIT),
                ..SearchOptions::default()
            },
        }
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut request = Request::new(
            value_t!(matches, "strategy", Strategy)?,
            value_t!(matches, "mode", Mode)?,
        );
        request.from = matches.value_of("from").map(str::to_string);
        request.to = matches.value_of("to").map(str::to_string);
        request.map = matches.value_of("map").map(str::to_string);

        request.options.step_limit = match value_t!(matches, "limit", usize)? {
            0 => None,
            n => Some(n),
        };
        if matches.is_present("timeout") {
            let seconds = value_t!(matches, "timeout", f64)?;
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(CliError::InvalidTimeout(seconds).into());
            }
            request.options.time_limit = Some(Duration::from_secs_f64(seconds));
        }
        if matches.is_present("progress") {
            request.options.verbose = Some(value_t!(matches, "progress", usize)?);
        }
        Ok(request)
    }
}

pub fn app() -> App<'static, 'static> {
    App::new("pathsearch")
        .version("0.1.0")
        .about("Solve search problems with classic AI search strategies")
        .arg(
            Arg::with_name("problem")
                .value_name("PROBLEM")
                .required_unless("list")
                .takes_value(true)
                .help("Built-in problem to solve, see --list"),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .takes_value(true)
                .default_value("astar"),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .takes_value(true)
                .default_value("graph"),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("START")
                .takes_value(true)
                .help("Starting point x,y or city"),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .value_name("GOAL")
                .takes_value(true)
                .help("Goal point x,y or city"),
        )
        .arg(
            Arg::with_name("map")
                .long("map")
                .value_name("FILE")
                .takes_value(true)
                .help("Read the maze from a file, or - for stdin"),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .takes_value(true)
                .default_value("100000")
                .help("Give up after this many expansions, 0 for no limit"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("STEPS")
                .takes_value(true)
                .help("Log progress every this many expansions"),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("List strategies, modes and problems"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&matches, &mut out)
}

/// Run the command line in `matches`, writing results to `out`.
pub fn execute(matches: &ArgMatches, out: &mut dyn Write) -> Result<(), Error> {
    if matches.is_present("list") {
        return list(out);
    }

    let name = matches.value_of("problem").ok_or(CliError::MissingProblem)?;
    let entry = PROBLEMS
        .get(name)
        .ok_or_else(|| CliError::ProblemNotFound(name.to_string()))?;
    let request = Request::from_matches(matches)?;

    debug!(problem = name, strategy = %request.strategy, mode = %request.mode, "solving");
    (entry.actor)(&request, out)
}

fn list(out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "Strategies:")?;
    for strategy in Strategy::all() {
        writeln!(out, "  {:<8} {}", strategy.id(), strategy.name())?;
    }

    writeln!(out, "Modes:")?;
    for mode in Mode::all() {
        writeln!(out, "  {:<8} {}", mode.id(), mode.name())?;
    }

    writeln!(out, "Problems:")?;
    let mut names: Vec<_> = PROBLEMS.keys().collect();
    names.sort();
    for name in names {
        writeln!(out, "  {:<8} {}", name, PROBLEMS[name].about)?;
    }
    Ok(())
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: &str) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        "-" => Box::new(::std::io::stdin()),
        path => {
            let f: File =
                File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No problem named {0}, see --list")]
    ProblemNotFound(String),

    #[error("No problem given")]
    MissingProblem,

    #[error("Invalid point {0}")]
    InvalidPoint(String, #[source] ParsePointError),

    #[error("No city named {0}")]
    UnknownCity(String),

    #[error("Distances are only known to {0}")]
    UnsupportedGoal(&'static str),

    #[error("Invalid timeout {0}")]
    InvalidTimeout(f64),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Invalid map")]
    InvalidMap(#[from] ParseGridError),
}
