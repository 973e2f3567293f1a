pub mod request;
pub mod parser;
pub mod identifier;
pub mod messages;

pub use request::{RequestRecord, ReservationId};
pub use parser::{parse_requests, ParseError};
pub use identifier::{is_reservation_id, valid_reservation_ids};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid reservation id: {0}")]
    InvalidReservationId(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
