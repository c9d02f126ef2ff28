// Domain value objects representing core business concepts

use std::fmt;

use super::solver_service::SolverError;

/// A unit of currency available for making up an amount (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination(u64);

impl Denomination {
    pub fn new(value: u64) -> Result<Self, SolverError> {
        if value == 0 {
            return Err(SolverError::InvalidDenomination(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Denomination {
    type Error = SolverError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Target amount to be made from denominations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a solve attempt as reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// An exact combination was found
    Found,
    /// Every denomination exceeds the amount
    NoUsableDenominations,
    /// Usable denominations exist but the search found no exact match
    NoCombinationFound,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Found => write!(f, "Found"),
            SolveStatus::NoUsableDenominations => write!(f, "No Usable Denominations"),
            SolveStatus::NoCombinationFound => write!(f, "No Combination Found"),
        }
    }
}
