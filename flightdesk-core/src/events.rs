use flightdesk_shared::{Flight, FlightId};

use crate::state::{BookingDetails, RequestFailure};

/// Every change to `ViewState` goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SetFlights(Vec<Flight>),
    SetModalVisible(bool),
    SetBookingConfirmed(bool),
    /// An empty patch clears the form; anything else is merged key by key.
    UpdateBookingDetails(BookingDetails),
    SelectFlight(Option<FlightId>),
    SetSearchError(Option<RequestFailure>),
    SetBookingError(Option<RequestFailure>),
}

impl ViewEvent {
    pub fn reset_booking_details() -> Self {
        ViewEvent::UpdateBookingDetails(BookingDetails::new())
    }

    pub fn booking_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut patch = BookingDetails::new();
        patch.insert(name.into(), value.into());
        ViewEvent::UpdateBookingDetails(patch)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ViewEvent::SetFlights(_) => "set_flights",
            ViewEvent::SetModalVisible(_) => "set_modal_visible",
            ViewEvent::SetBookingConfirmed(_) => "set_booking_confirmed",
            ViewEvent::UpdateBookingDetails(_) => "update_booking_details",
            ViewEvent::SelectFlight(_) => "select_flight",
            ViewEvent::SetSearchError(_) => "set_search_error",
            ViewEvent::SetBookingError(_) => "set_booking_error",
        }
    }
}
