use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::{error, LevelFilter};

use dakin::algorithm::branch_and_bound::{BranchAndBound, Status};
use dakin::algorithm::branch_and_bound::settings::{
    DEFAULT_INSTABILITY_MARGIN, DEFAULT_INTEGRALITY_TOLERANCE, Settings,
};
use dakin::algorithm::simplex::Simplex;
use dakin::data::linear_program::elements::Constraint;
use dakin::data::linear_program::error::InconsistencyError;
use dakin::data::linear_program::integer_program::IntegerProgram;

/// Solve an integer linear program `max <c, x> s.t. Ax <= b, x >= 0 integer` with Dakin's branch
/// and bound method.
///
/// Without a problem on the command line, a small textbook problem is solved.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Objective coefficients, comma separated, e.g. `4,3,3`.
    #[arg(short = 'o', long = "objective", value_delimiter = ',', allow_hyphen_values = true)]
    objective: Option<Vec<f64>>,

    /// A constraint as comma separated coefficients followed by a colon and the right-hand side,
    /// e.g. `4,2,1:10`. Can be repeated.
    #[arg(short = 'c', long = "constraint", value_parser = constraint_parser, allow_hyphen_values = true)]
    constraints: Vec<Constraint<f64>>,

    /// Maximum distance to the nearest integer for a value to count as integral.
    #[arg(long = "tolerance", default_value_t = DEFAULT_INTEGRALITY_TOLERANCE)]
    tolerance: f64,

    /// Width of the band around the tolerance in which values are considered unstable, 0 disables.
    #[arg(long = "instability-margin", default_value_t = DEFAULT_INSTABILITY_MARGIN)]
    instability_margin: f64,

    /// Maximum number of nodes to evaluate.
    #[arg(short = 'n', long = "node-limit")]
    node_limit: Option<usize>,

    /// The time budget for the search, given in milliseconds.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// Don't print the decision tree.
    #[arg(long = "no-tree", default_value_t = false)]
    no_tree: bool,

    /// Enables log message output from the search.
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,
}

fn constraint_parser(s: &str) -> Result<Constraint<f64>, String> {
    let (coefficients, bound) = s.split_once(':')
        .ok_or_else(|| format!("'{}' has no ':' separating the coefficients from the bound", s))?;

    let coefficients = coefficients.split(',')
        .map(|coefficient| coefficient.trim().parse::<f64>()
            .map_err(|error| format!("coefficient '{}': {}", coefficient, error)))
        .collect::<Result<Vec<_>, _>>()?;
    let bound = bound.trim().parse::<f64>()
        .map_err(|error| format!("bound '{}': {}", bound, error))?;

    Ok(Constraint::new(coefficients, bound))
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()))
        .filter_level(level_filter)
        .parse_default_env()
        .init();
}

fn problem(args: &Args) -> Result<IntegerProgram<f64>, InconsistencyError> {
    match &args.objective {
        Some(objective) => IntegerProgram::new(objective.clone(), args.constraints.clone()),
        None if args.constraints.is_empty() => IntegerProgram::new(
            vec![4f64, 3f64, 3f64],
            vec![
                Constraint::new(vec![4f64, 2f64, 1f64], 10f64),
                Constraint::new(vec![3f64, 4f64, 2f64], 14f64),
                Constraint::new(vec![2f64, 1f64, 3f64], 7f64),
            ],
        ),
        None => Err(InconsistencyError::new("Constraints were given without an objective")),
    }
}

fn run(args: Args) -> Result<(), InconsistencyError> {
    let problem = problem(&args)?;

    let mut settings = Settings::default()
        .with_integrality_tolerance(args.tolerance)
        .with_instability_margin(args.instability_margin);
    if !settings.has_valid_tolerances() {
        return Err(InconsistencyError::new(format!(
            "The instability margin {} should be smaller than the tolerance {}, and both nonnegative",
            args.instability_margin, args.tolerance,
        )));
    }
    if let Some(nodes) = args.node_limit {
        settings = settings.with_node_limit(nodes);
    }
    if let Some(milliseconds) = args.time_limit {
        settings = settings.with_time_limit(Duration::from_millis(milliseconds));
    }

    println!("{}", problem);
    println!();

    let search = BranchAndBound::with_settings(&problem, Simplex::default(), settings).solve();

    match &search.status {
        Status::Optimal(incumbent) => {
            println!("Optimal solution found at node {}:", incumbent.node());
            println!("\t{}", incumbent.solution().describe(problem.variables()));
            println!("\tobjective value {}", incumbent.objective_value());
        },
        Status::LimitReached { limit, incumbent: Some(incumbent) } => {
            println!("The {} was reached, the best solution found is at node {}:", limit, incumbent.node());
            println!("\t{}", incumbent.solution().describe(problem.variables()));
            println!("\tobjective value {}", incumbent.objective_value());
        },
        other => println!("No solution: {}", other),
    }
    println!();
    println!("{}", search.statistics);

    if !args.no_tree {
        println!();
        print!("{}", search.tree);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    configure_logging(args.verbose);

    if let Err(error) = run(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}
