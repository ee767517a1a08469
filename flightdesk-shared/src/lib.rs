pub mod models;
pub mod pii;

pub use models::{BookingAck, BookingRequest, Flight, FlightId, Place};
pub use pii::Masked;
