// Solver adapters module

pub mod greedy_backtrack;

pub use greedy_backtrack::GreedyBacktrackSolver;
