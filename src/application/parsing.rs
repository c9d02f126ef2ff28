// Parsing: Convert console input lines into domain models
// Malformed input is never an error here; it is skipped or defaulted

use crate::domain::{
    models::DenominationSet,
    value_objects::{Amount, Denomination},
};

/// Default separator between denominations on the input line
pub const DEFAULT_DELIMITER: &str = ",";

/// Parse a line of delimiter-separated denominations.
///
/// Tokens are trimmed. Anything that is not a positive integer is skipped.
pub fn parse_denominations(line: &str, delimiter: &str) -> DenominationSet {
    line.trim()
        .split(delimiter)
        .filter_map(|token| token.trim().parse::<u64>().ok())
        .filter_map(|value| Denomination::new(value).ok())
        .collect()
}

/// Parse the amount line, falling back to zero when it is not a non-negative integer
pub fn parse_amount(line: &str) -> Amount {
    line.trim()
        .parse::<u64>()
        .map(Amount::new)
        .unwrap_or(Amount::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &DenominationSet) -> Vec<u64> {
        set.as_slice().iter().map(|d| d.value()).collect()
    }

    #[test]
    fn parses_comma_separated_list() {
        let set = parse_denominations("20,1,10,5\n", DEFAULT_DELIMITER);
        assert_eq!(values(&set), vec![1, 5, 10, 20]);
    }

    #[test]
    fn skips_bad_tokens() {
        let set = parse_denominations("1, five, -3, 0, , 10 ,2.5", DEFAULT_DELIMITER);
        assert_eq!(values(&set), vec![1, 10]);
    }

    #[test]
    fn custom_delimiter() {
        let set = parse_denominations("1;5;5;25", ";");
        assert_eq!(values(&set), vec![1, 5, 25]);

        let set = parse_denominations("1 5 25", " ");
        assert_eq!(values(&set), vec![1, 5, 25]);
    }

    #[test]
    fn empty_line() {
        assert!(parse_denominations("", DEFAULT_DELIMITER).is_empty());
    }

    #[test]
    fn amount_defaults_to_zero() {
        assert_eq!(parse_amount(" 35 \n"), Amount::new(35));
        assert_eq!(parse_amount("abc"), Amount::ZERO);
        assert_eq!(parse_amount("-4"), Amount::ZERO);
        assert_eq!(parse_amount(""), Amount::ZERO);
    }
}
