use serde::{Deserialize, Serialize};

use crate::models::flight::FlightId;
use crate::pii::Masked;

/// Body of `POST /booking`.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub name: Masked<String>,
    pub email: Masked<String>,
    pub flight: FlightId,
}

impl BookingRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, flight: FlightId) -> Self {
        Self {
            name: Masked(name.into()),
            email: Masked(email.into()),
            flight,
        }
    }
}

/// Whatever the booking endpoint answered with. The flow only cares that it
/// was a success with a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BookingAck(pub serde_json::Value);
