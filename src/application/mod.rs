// Application module: console use case and input parsing

pub mod console_service;
pub mod parsing;

pub use console_service::{render_breakdown, ConsoleSession, SessionOptions};
pub use parsing::{parse_amount, parse_denominations, DEFAULT_DELIMITER};
