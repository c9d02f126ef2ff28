// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Console use case and input parsing
pub mod application;

// Infrastructure layer: External concerns (command line, logging)
#[cfg(feature = "cli")]
pub mod infrastructure;

// Solver adapters: Concrete implementations of DenominationSolver
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Amount, Breakdown, DenomCount, Denomination, DenominationSet, DenominationSolver,
    SolveOutcome, SolveStatistics, SolveStatus, SolverError,
};

pub use application::{parse_amount, parse_denominations, ConsoleSession, SessionOptions};

#[cfg(feature = "cli")]
pub use infrastructure::{CliConfig, ConfigError};

pub use solver::GreedyBacktrackSolver;
