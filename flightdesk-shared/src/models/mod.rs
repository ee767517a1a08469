pub mod booking;
pub mod flight;

pub use booking::{BookingAck, BookingRequest};
pub use flight::{Flight, FlightId, Place};
