pub mod controller;
pub mod events;
pub mod gateway;
pub mod state;
pub mod store;

pub use controller::{BookingFlowController, Completion, Outcome, PendingCompletion};
pub use events::ViewEvent;
pub use gateway::FlightGateway;
pub use state::{BookingDetails, FailureKind, ModalStage, RequestFailure, ViewState};
pub use store::{apply, ViewStore};

use flightdesk_shared::FlightId;

/// Failures of the two remote calls, as seen by the flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Malformed(String),
}

/// Controller operations invoked in a state that does not allow them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("Flight {0} is not in the current search results")]
    UnknownFlight(FlightId),
    #[error("No flight selected for booking")]
    NoFlightSelected,
    #[error("Booking field missing: {0}")]
    MissingField(&'static str),
    #[error("Booking form is not open")]
    ModalClosed,
    #[error("Booking already confirmed")]
    AlreadyConfirmed,
    #[error("A booking is already open; cancel or close it first")]
    BookingInProgress,
}

pub type FlowResult<T> = Result<T, FlowError>;
