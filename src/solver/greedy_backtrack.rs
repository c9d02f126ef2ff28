// Greedy-with-backtrack solver
// Implements the DenominationSolver interface with a largest-ceiling-first search

use crate::domain::{
    models::{Breakdown, DenominationSet, SolveOutcome, SolveStatistics},
    solver_service::{DenominationSolver, Result, SolverError},
    value_objects::{Amount, Denomination},
};
use std::time::Instant;
use tracing::{debug, info};

/// Tries each denomination as the largest one allowed, from the biggest down,
/// and descends greedily below it.
///
/// The search is not exhaustive: for a fixed ceiling it uses the current
/// denomination as often as it fits and never gives a unit back once it has
/// moved to a smaller one. `{4, 7}` cannot make `15` here even though
/// `7 + 4 + 4` would.
pub struct GreedyBacktrackSolver;

impl GreedyBacktrackSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyBacktrackSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DenominationSolver for GreedyBacktrackSolver {
    fn solve(&self, denominations: &DenominationSet, amount: Amount) -> Result<SolveOutcome> {
        // Validate first
        self.validate(denominations, amount)?;

        let start_time = Instant::now();
        let usable = denominations.usable_for(amount);

        let mut working = Breakdown::zeroed(usable);
        let mut statistics = SolveStatistics {
            num_usable: usable.len() as u32,
            ..SolveStatistics::default()
        };

        for ceiling in (0..usable.len()).rev() {
            working.reset();
            statistics.ceilings_tried += 1;

            debug!(ceiling = %usable[ceiling], %amount, "trying ceiling denomination");

            if descend(
                usable,
                ceiling,
                amount.value(),
                &mut working,
                &mut statistics.descent_steps,
            ) {
                statistics.solve_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
                info!(
                    %amount,
                    ceiling = %usable[ceiling],
                    pieces = working.pieces(),
                    "combination found"
                );
                return Ok(SolveOutcome::new(working).with_statistics(statistics));
            }
        }

        info!(%amount, ceilings = statistics.ceilings_tried, "no combination found");
        Err(SolverError::NoCombinationFound { amount })
    }

    fn name(&self) -> &str {
        "Greedy Backtrack"
    }

    fn guarantees_completeness(&self) -> bool {
        false
    }
}

/// Cover `amount` with the denominations at `0..=ceiling`.
///
/// Rule per position `p` with remaining `r` and `d = denominations[p]`:
/// `r == d` takes one unit and succeeds, `r < d` moves to `p - 1`,
/// `r > d` takes one unit and stays at `p`. Running out of positions fails.
///
/// Every step is a tail step, so this is a loop. A run of `r > d` steps is
/// taken in one go: `(r - 1) / d` units leave `r` in `1..=d`, the same place
/// the unit-by-unit rule ends up. `steps` counts unit steps of the rule.
fn descend(
    denominations: &[Denomination],
    ceiling: usize,
    amount: u64,
    working: &mut Breakdown,
    steps: &mut u64,
) -> bool {
    let mut remaining = amount;

    for position in (0..=ceiling).rev() {
        let denomination = denominations[position].value();

        if remaining > denomination {
            let units = (remaining - 1) / denomination;
            working.add_units(position, units);
            remaining -= units * denomination;
            *steps = steps.saturating_add(units);
        }

        *steps = steps.saturating_add(1);

        if remaining == denomination {
            working.add_units(position, 1);
            return true;
        }
    }

    // Positions exhausted
    *steps = steps.saturating_add(1);
    false
}
