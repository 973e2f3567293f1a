use serde::{Deserialize, Serialize};
use std::fmt;
use crate::identifier::is_reservation_id;
use crate::{CoreError, CoreResult};

/// A single booking request as typed by the operator.
///
/// Serializes to the body the reservation service expects on create:
/// `{ "origin", "destiny", "airline", "package" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    origin: String,
    destiny: String,
    airline: String,
    package: bool,
}

impl RequestRecord {
    pub fn new(
        origin: impl Into<String>,
        destiny: impl Into<String>,
        airline: impl Into<String>,
        package: bool,
    ) -> Self {
        Self {
            origin: origin.into(),
            destiny: destiny.into(),
            airline: airline.into(),
            package,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destiny(&self) -> &str {
        &self.destiny
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Whether the request also books a hotel package
    pub fn package(&self) -> bool {
        self.package
    }
}

/// Identifier assigned by the reservation service to an accepted request.
///
/// Always holds a canonical UUID string (8-4-4-4-12 hex, version 1-5,
/// variant 8/9/a/b).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReservationId(String);

impl ReservationId {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        Self::try_from(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ReservationId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_reservation_id(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidReservationId(value))
        }
    }
}

impl From<ReservationId> for String {
    fn from(id: ReservationId) -> Self {
        id.0
    }
}
