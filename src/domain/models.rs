use super::solver_service::Result;
use super::value_objects::{Amount, Denomination};

/// How many units of one denomination are used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenomCount {
    denomination: Denomination,
    count: u64,
}

impl DenomCount {
    pub fn new(denomination: Denomination, count: u64) -> Self {
        Self {
            denomination,
            count,
        }
    }

    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Value contributed by this entry (denomination × count)
    pub fn subtotal(&self) -> u64 {
        self.denomination.value() * self.count
    }
}

/// Distinct denominations, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenominationSet {
    values: Vec<Denomination>,
}

impl DenominationSet {
    pub fn new(mut values: Vec<Denomination>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Build from raw values, rejecting zero
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let values = values
            .into_iter()
            .map(Denomination::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(values))
    }

    pub fn as_slice(&self) -> &[Denomination] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ascending prefix of denominations that are ≤ `amount`.
    /// Larger ones can never take part in making the amount.
    pub fn usable_for(&self, amount: Amount) -> &[Denomination] {
        let end = self
            .values
            .partition_point(|d| d.value() <= amount.value());
        &self.values[..end]
    }
}

impl FromIterator<Denomination> for DenominationSet {
    fn from_iter<T: IntoIterator<Item = Denomination>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Counts per usable denomination, in ascending denomination order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<DenomCount>,
}

impl Breakdown {
    /// Working buffer with every count at zero
    pub(crate) fn zeroed(denominations: &[Denomination]) -> Self {
        Self {
            entries: denominations
                .iter()
                .map(|&d| DenomCount::new(d, 0))
                .collect(),
        }
    }

    pub(crate) fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.count = 0;
        }
    }

    pub(crate) fn add_units(&mut self, position: usize, units: u64) {
        self.entries[position].count += units;
    }

    pub fn entries(&self) -> &[DenomCount] {
        &self.entries
    }

    pub fn count_of(&self, denomination: Denomination) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.denomination == denomination)
            .map(|e| e.count)
    }

    /// Entries from the largest denomination down to the smallest
    pub fn iter_largest_first(&self) -> impl Iterator<Item = &DenomCount> {
        self.entries.iter().rev()
    }

    /// Entries with a non-zero count
    pub fn used(&self) -> impl Iterator<Item = &DenomCount> {
        self.entries.iter().filter(|e| e.count > 0)
    }

    /// Sum of denomination × count over all entries
    pub fn total(&self) -> u64 {
        self.entries.iter().map(DenomCount::subtotal).sum()
    }

    /// Total number of pieces used
    pub fn pieces(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Statistics about the search
#[derive(Debug, Clone, Default)]
pub struct SolveStatistics {
    pub ceilings_tried: u32,
    pub descent_steps: u64,
    pub solve_time_ms: f64,
    pub num_usable: u32,
}

/// Successful result of a solve
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub breakdown: Breakdown,
    pub statistics: SolveStatistics,
}

impl SolveOutcome {
    pub fn new(breakdown: Breakdown) -> Self {
        Self {
            breakdown,
            statistics: SolveStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolveStatistics) -> Self {
        self.statistics = statistics;
        self
    }
}
