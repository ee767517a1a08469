use async_trait::async_trait;
use flightdesk_shared::{BookingAck, BookingRequest, Flight};

use crate::GatewayError;

/// Remote side of the booking flow: the flights listing and the booking endpoint.
#[async_trait]
pub trait FlightGateway: Send + Sync {
    /// `GET /flights`
    async fn fetch_flights(&self) -> Result<Vec<Flight>, GatewayError>;

    /// `POST /booking`. `Ok` only for a success status with a JSON body.
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingAck, GatewayError>;
}
