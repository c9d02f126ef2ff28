use clap::Parser;
use denomfind::infrastructure::logger;
use denomfind::{CliConfig, ConsoleSession, GreedyBacktrackSolver};
use std::io;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    config.validate()?;

    // Create solver instance
    let solver = Arc::new(GreedyBacktrackSolver::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), solver)
        .with_options(config.session_options());

    if let Some(denominations) = config.denominations {
        session = session.with_denominations(denominations);
    }
    if let Some(amount) = config.amount {
        session = session.with_amount(amount);
    }

    let status = session.run()?;
    tracing::debug!("Session finished: {}", status);

    Ok(())
}
