//! Operator facing texts shown by the console.

pub const CSV_FORMAT: &str = "origin,destiny,airline,package";

pub const EXAMPLE: &str = "Ex:
EZE,JFK,American Airlines,false
EZE,GRU,LATAM,true";

pub fn input_placeholder() -> String {
    format!(
        "INPUT\nEnter one request per line using the following csv format:\n\n{}\n\n{}",
        CSV_FORMAT, EXAMPLE
    )
}

pub const OUTPUT_PLACEHOLDER: &str =
    "OUTPUT\nServer responses and messages for each action will be shown here.";

pub fn invalid_input() -> String {
    format!(
        "ERROR: INVALID INPUT\nThe input is invalid. Every line must be a request in the following csv format:\n\n{}\n\n{}",
        CSV_FORMAT, EXAMPLE
    )
}

pub const NO_RESERVATIONS: &str = "ERROR: NO REQUESTS
To check status, first send a valid input with at least one request.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_mention_format() {
        assert!(invalid_input().contains(CSV_FORMAT));
        assert!(input_placeholder().contains("EZE,GRU,LATAM,true"));
    }
}
