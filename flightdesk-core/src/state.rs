use flightdesk_shared::{Flight, FlightId};
use std::collections::BTreeMap;
use std::fmt;

use crate::GatewayError;

/// Contact form fields keyed by input name. Keys are whatever inputs exist.
pub type BookingDetails = BTreeMap<String, String>;

/// Everything the UI currently shows for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub flights: Vec<Flight>,
    pub show_confirm_booking_modal: bool,
    pub booking_confirmed: bool,
    pub booking_details: BookingDetails,
    pub selected_flight: Option<FlightId>,
    pub search_error: Option<RequestFailure>,
    pub booking_error: Option<RequestFailure>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal_stage(&self) -> ModalStage {
        match (self.show_confirm_booking_modal, self.booking_confirmed) {
            (false, _) => ModalStage::Closed,
            (true, false) => ModalStage::Form,
            (true, true) => ModalStage::Confirmed,
        }
    }

    pub fn detail(&self, field: &str) -> Option<&str> {
        self.booking_details.get(field).map(String::as_str)
    }

    pub fn flight(&self, id: FlightId) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    /// Confirmation is only meaningful inside the modal.
    pub fn is_consistent(&self) -> bool {
        !self.booking_confirmed || self.show_confirm_booking_modal
    }
}

/// Sub-view of the booking modal derived from the two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalStage {
    Closed,
    Form,
    Confirmed,
}

impl fmt::Display for ModalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModalStage::Closed => "CLOSED",
            ModalStage::Form => "FORM",
            ModalStage::Confirmed => "CONFIRMED",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Status,
    Malformed,
}

/// A failed remote call the user can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&GatewayError> for RequestFailure {
    fn from(err: &GatewayError) -> Self {
        let kind = match err {
            GatewayError::Transport(_) => FailureKind::Transport,
            GatewayError::Status(_) => FailureKind::Status,
            GatewayError::Malformed(_) => FailureKind::Malformed,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
