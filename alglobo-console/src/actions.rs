use alglobo_core::{messages, parse_requests, valid_reservation_ids};
use alglobo_gateway::outcome::payload_values;
use alglobo_gateway::{BatchGateway, Outcome};
use tracing::info;

use crate::state::ConsoleState;

/// Parse the input and submit it as one batch.
///
/// A rejected block never reaches the gateway; it replaces the output with
/// the format help and forgets the previous ids.
pub async fn send(state: ConsoleState, gateway: &BatchGateway) -> ConsoleState {
    let records = match parse_requests(&state.input) {
        Ok(records) => records,
        Err(e) => {
            info!("Input rejected: {}", e);
            return ConsoleState {
                output: format!("{}\n\n{}", messages::invalid_input(), e),
                reservation_ids: Vec::new(),
                input: state.input,
            };
        }
    };

    let results = gateway.submit_batch(&records).await;
    let reservation_ids = valid_reservation_ids(&payload_values(&results));

    ConsoleState {
        output: render(&results),
        reservation_ids,
        input: state.input,
    }
}

/// Query the status of every id from the last accepted batch.
pub async fn check_status(state: ConsoleState, gateway: &BatchGateway) -> ConsoleState {
    if state.reservation_ids.is_empty() {
        return ConsoleState {
            output: messages::NO_RESERVATIONS.to_string(),
            ..state
        };
    }

    let results = gateway.query_batch(&state.reservation_ids).await;
    ConsoleState {
        output: render(&results),
        ..state
    }
}

pub async fn fetch_metrics(state: ConsoleState, gateway: &BatchGateway) -> ConsoleState {
    let output = match gateway.fetch_metrics().await {
        Ok(text) => text,
        Err(detail) => Outcome::Failed { detail }.render(),
    };

    ConsoleState { output, ..state }
}

pub fn clear(_state: ConsoleState) -> ConsoleState {
    ConsoleState::default()
}

fn render(results: &[Outcome]) -> String {
    results
        .iter()
        .map(Outcome::render)
        .collect::<Vec<_>>()
        .join("\n")
}
