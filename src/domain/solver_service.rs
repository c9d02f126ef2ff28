// Domain service interface for making an amount from denominations
// Defines the contract that any solver implementation must follow (Dependency Inversion Principle)

use super::models::{DenominationSet, SolveOutcome};
use super::value_objects::{Amount, SolveStatus};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("No usable denominations: every denomination exceeds the amount {amount}")]
    NoUsableDenominations { amount: Amount },

    #[error("Could not find a combination for amount {amount}")]
    NoCombinationFound { amount: Amount },

    #[error("Invalid denomination: {0} (denominations must be positive)")]
    InvalidDenomination(u64),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SolverError {
    /// True for the expected "no result" outcomes, false for faults
    pub fn is_no_result(&self) -> bool {
        matches!(
            self,
            SolverError::NoUsableDenominations { .. } | SolverError::NoCombinationFound { .. }
        )
    }

    /// Status to report for this error, if it is a "no result" outcome
    pub fn status(&self) -> Option<SolveStatus> {
        match self {
            SolverError::NoUsableDenominations { .. } => Some(SolveStatus::NoUsableDenominations),
            SolverError::NoCombinationFound { .. } => Some(SolveStatus::NoCombinationFound),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for denomination solvers
///
/// This trait defines the contract that all solver implementations must follow.
/// The console session only depends on this trait, so the search strategy can be
/// swapped without touching the I/O code.
pub trait DenominationSolver: Send + Sync {
    /// Find counts per denomination that add up to `amount`
    fn solve(&self, denominations: &DenominationSet, amount: Amount) -> Result<SolveOutcome>;

    /// Check that at least one denomination can take part in making `amount`
    fn validate(&self, denominations: &DenominationSet, amount: Amount) -> Result<()> {
        if denominations.usable_for(amount).is_empty() {
            return Err(SolverError::NoUsableDenominations { amount });
        }
        Ok(())
    }

    /// Get the name of this solver
    fn name(&self) -> &str;

    /// Whether the solver finds a combination whenever one exists
    fn guarantees_completeness(&self) -> bool;
}
