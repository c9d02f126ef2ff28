use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use super::parsing::{parse_amount, parse_denominations, DEFAULT_DELIMITER};
use crate::domain::{
    models::{Breakdown, SolveOutcome},
    solver_service::{DenominationSolver, Result},
    value_objects::SolveStatus,
};

/// Output and input options for a console session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub delimiter: String,
    pub used_only: bool,
    pub show_stats: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            used_only: false,
            show_stats: false,
        }
    }
}

/// One prompt-solve-print exchange over an injected reader and writer
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
    solver: Arc<dyn DenominationSolver>,
    options: SessionOptions,
    denominations_line: Option<String>,
    amount_line: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(reader: R, writer: W, solver: Arc<dyn DenominationSolver>) -> Self {
        Self {
            reader,
            writer,
            solver,
            options: SessionOptions::default(),
            denominations_line: None,
            amount_line: None,
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Use this denomination list instead of prompting for it
    pub fn with_denominations(mut self, line: impl Into<String>) -> Self {
        self.denominations_line = Some(line.into());
        self
    }

    /// Use this amount instead of prompting for it
    pub fn with_amount(mut self, line: impl Into<String>) -> Self {
        self.amount_line = Some(line.into());
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read both inputs, solve, and print the result.
    ///
    /// "No result" outcomes are printed and returned as a status; only I/O
    /// failures come back as errors.
    pub fn run(&mut self) -> Result<SolveStatus> {
        if self.denominations_line.is_none() || self.amount_line.is_none() {
            writeln!(self.writer, "Reader ready")?;
        }

        let denominations_line = match self.denominations_line.take() {
            Some(line) => line,
            None => {
                let prompt = format!(
                    "Enter the denominations separated by '{}'",
                    self.options.delimiter
                );
                self.prompt(&prompt)?
            }
        };
        let denominations = parse_denominations(&denominations_line, &self.options.delimiter);

        let amount_line = match self.amount_line.take() {
            Some(line) => line,
            None => self.prompt("Enter the amount that you want to make")?,
        };
        let amount = parse_amount(&amount_line);

        debug!(
            denominations = ?denominations.as_slice(),
            %amount,
            solver = self.solver.name(),
            "solving"
        );

        match self.solver.solve(&denominations, amount) {
            Ok(outcome) => {
                self.print_outcome(&outcome)?;
                Ok(SolveStatus::Found)
            }
            Err(e) => match e.status() {
                Some(status) => {
                    debug!(status = %status, "{}", e);
                    writeln!(self.writer, "\nCould not find a combination")?;
                    self.writer.flush()?;
                    Ok(status)
                }
                None => Err(e),
            },
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;

        // End of input reads as an empty line
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }

    fn print_outcome(&mut self, outcome: &SolveOutcome) -> Result<()> {
        writeln!(self.writer, "\nResult\n")?;
        for line in render_breakdown(&outcome.breakdown, self.options.used_only) {
            writeln!(self.writer, "{}", line)?;
        }

        if self.options.show_stats {
            let stats = &outcome.statistics;
            writeln!(
                self.writer,
                "\nSolved with {} in {:.3} ms ({} ceiling attempts, {} steps, {} usable denominations)",
                self.solver.name(),
                stats.solve_time_ms,
                stats.ceilings_tried,
                stats.descent_steps,
                stats.num_usable
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

/// Result lines, largest denomination first
pub fn render_breakdown(breakdown: &Breakdown, used_only: bool) -> Vec<String> {
    breakdown
        .iter_largest_first()
        .filter(|entry| !used_only || entry.count() > 0)
        .map(|entry| format!("{}\tx\t{}", entry.denomination(), entry.count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GreedyBacktrackSolver;
    use std::io::Cursor;

    fn run_session(input: &str, options: SessionOptions) -> (SolveStatus, String) {
        let mut session = ConsoleSession::new(
            Cursor::new(input.to_string()),
            Vec::new(),
            Arc::new(GreedyBacktrackSolver::new()),
        )
        .with_options(options);

        let status = session.run().unwrap();
        let output = String::from_utf8(session.into_writer()).unwrap();
        (status, output)
    }

    #[test]
    fn prompts_and_prints_largest_first() {
        let (status, output) = run_session("1,5,10,20\n35\n", SessionOptions::default());

        assert_eq!(status, SolveStatus::Found);
        assert_eq!(
            output,
            "Reader ready\n\
             Enter the denominations separated by ','\n\
             Enter the amount that you want to make\n\
             \nResult\n\n\
             20\tx\t1\n\
             10\tx\t1\n\
             5\tx\t1\n\
             1\tx\t0\n"
        );
    }

    #[test]
    fn used_only_hides_zero_counts() {
        let options = SessionOptions {
            used_only: true,
            ..SessionOptions::default()
        };
        let (_, output) = run_session("1,5,10,20\n35\n", options);
        assert!(!output.contains("1\tx\t0"));
        assert!(output.ends_with("5\tx\t1\n"));
    }

    #[test]
    fn failure_message() {
        let (status, output) = run_session("4,7\n15\n", SessionOptions::default());
        assert_eq!(status, SolveStatus::NoCombinationFound);
        assert!(output.ends_with("\nCould not find a combination\n"));
    }

    #[test]
    fn end_of_input_means_zero_amount() {
        let (status, output) = run_session("1,2\n", SessionOptions::default());
        assert_eq!(status, SolveStatus::NoUsableDenominations);
        assert!(output.contains("Could not find a combination"));
    }

    #[test]
    fn preset_inputs_skip_prompts() {
        let mut session = ConsoleSession::new(
            Cursor::new(String::new()),
            Vec::new(),
            Arc::new(GreedyBacktrackSolver::new()),
        )
        .with_denominations("1,5,10")
        .with_amount("3");

        assert_eq!(session.run().unwrap(), SolveStatus::Found);
        let output = String::from_utf8(session.into_writer()).unwrap();
        assert_eq!(output, "\nResult\n\n1\tx\t3\n");
    }

    #[test]
    fn stats_line() {
        let options = SessionOptions {
            show_stats: true,
            ..SessionOptions::default()
        };
        let (_, output) = run_session("3,4\n6\n", options);
        assert!(output.contains("Solved with Greedy Backtrack"));
        assert!(output.contains("2 ceiling attempts"));
    }

    #[test]
    fn delimiter_shows_in_prompt() {
        let options = SessionOptions {
            delimiter: ";".to_string(),
            ..SessionOptions::default()
        };
        let (status, output) = run_session("1;5\n6\n", options);
        assert_eq!(status, SolveStatus::Found);
        assert!(output.contains("separated by ';'"));
    }
}
