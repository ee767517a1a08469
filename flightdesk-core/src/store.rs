use tracing::debug;

use crate::events::ViewEvent;
use crate::state::{ModalStage, ViewState};

/// Computes the next view state. Pure and total over `ViewEvent`.
///
/// Hiding the modal also drops the confirmation flag, and confirming shows
/// the modal, so `booking_confirmed` never holds outside the modal.
pub fn apply(mut state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::SetFlights(flights) => {
            state.flights = flights;
        }
        ViewEvent::SetModalVisible(visible) => {
            state.show_confirm_booking_modal = visible;
            if !visible {
                state.booking_confirmed = false;
            }
        }
        ViewEvent::SetBookingConfirmed(confirmed) => {
            state.booking_confirmed = confirmed;
            if confirmed {
                state.show_confirm_booking_modal = true;
            }
        }
        ViewEvent::UpdateBookingDetails(patch) => {
            if patch.is_empty() {
                state.booking_details.clear();
            } else {
                state.booking_details.extend(patch);
            }
        }
        ViewEvent::SelectFlight(flight) => {
            state.selected_flight = flight;
        }
        ViewEvent::SetSearchError(failure) => {
            state.search_error = failure;
        }
        ViewEvent::SetBookingError(failure) => {
            state.booking_error = failure;
        }
    }
    state
}

/// Owns the view state of one session and funnels events through `apply`.
#[derive(Debug, Default)]
pub struct ViewStore {
    state: ViewState,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn stage(&self) -> ModalStage {
        self.state.modal_stage()
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        let kind = event.kind();
        let current = std::mem::take(&mut self.state);
        self.state = apply(current, event);
        debug_assert!(self.state.is_consistent());
        debug!(
            event = kind,
            stage = %self.state.modal_stage(),
            flights = self.state.flights.len(),
            "view state transition"
        );
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BookingDetails, FailureKind, RequestFailure};
    use flightdesk_shared::{Flight, FlightId, Place};

    fn flight(id: u64) -> Flight {
        Flight {
            id: FlightId(id),
            arrival: "09:30".to_string(),
            company: "Vistara".to_string(),
            duration: "1h 55m".to_string(),
            price: 3999.0,
            source: Place::new("DEL"),
            destination: Place::new("BLR"),
        }
    }

    fn details(pairs: &[(&str, &str)]) -> BookingDetails {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn run(events: Vec<ViewEvent>) -> ViewState {
        events.into_iter().fold(ViewState::new(), apply)
    }

    #[test]
    fn test_set_flights_leaves_other_fields() {
        let state = run(vec![
            ViewEvent::booking_field("name", "Asha"),
            ViewEvent::SetModalVisible(true),
            ViewEvent::SetFlights(vec![flight(1), flight(2)]),
        ]);
        assert_eq!(state.flights.len(), 2);
        assert!(state.show_confirm_booking_modal);
        assert_eq!(state.detail("name"), Some("Asha"));
    }

    #[test]
    fn test_empty_patch_resets_details() {
        let state = run(vec![
            ViewEvent::booking_field("name", "Asha"),
            ViewEvent::booking_field("email", "asha@example.com"),
            ViewEvent::reset_booking_details(),
        ]);
        assert!(state.booking_details.is_empty());

        let again = apply(state, ViewEvent::reset_booking_details());
        assert!(again.booking_details.is_empty());
    }

    #[test]
    fn test_patches_merge_across_keys() {
        let state = run(vec![
            ViewEvent::UpdateBookingDetails(details(&[("a", "1")])),
            ViewEvent::UpdateBookingDetails(details(&[("b", "2")])),
        ]);
        assert_eq!(state.booking_details, details(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_patch_overwrites_same_key() {
        let state = run(vec![
            ViewEvent::UpdateBookingDetails(details(&[("a", "1")])),
            ViewEvent::UpdateBookingDetails(details(&[("a", "2")])),
        ]);
        assert_eq!(state.booking_details, details(&[("a", "2")]));
    }

    #[test]
    fn test_opening_modal_keeps_details() {
        let state = run(vec![
            ViewEvent::booking_field("name", "Asha"),
            ViewEvent::SetModalVisible(true),
        ]);
        assert_eq!(state.detail("name"), Some("Asha"));
    }

    #[test]
    fn test_confirmed_success_then_clear_flights() {
        let state = apply(ViewState::new(), ViewEvent::SetFlights(vec![flight(1)]));
        assert_eq!(state.flights.len(), 1);

        let state = run_from(
            state,
            vec![
                ViewEvent::SetBookingConfirmed(true),
                ViewEvent::SetFlights(Vec::new()),
            ],
        );
        assert!(state.booking_confirmed);
        assert!(state.show_confirm_booking_modal);
        assert!(state.flights.is_empty());
    }

    #[test]
    fn test_hiding_modal_drops_confirmation() {
        let state = run(vec![
            ViewEvent::SetModalVisible(true),
            ViewEvent::SetBookingConfirmed(true),
            ViewEvent::SetModalVisible(false),
        ]);
        assert!(!state.booking_confirmed);
        assert_eq!(state.modal_stage(), ModalStage::Closed);
    }

    #[test]
    fn test_error_slots_are_independent() {
        let failure = RequestFailure {
            kind: FailureKind::Transport,
            message: "connection refused".to_string(),
        };
        let state = run(vec![
            ViewEvent::SetSearchError(Some(failure.clone())),
            ViewEvent::SetBookingError(None),
        ]);
        assert_eq!(state.search_error, Some(failure));
        assert_eq!(state.booking_error, None);
    }

    #[test]
    fn test_confirmation_never_outside_modal() {
        let alphabet = vec![
            ViewEvent::SetModalVisible(true),
            ViewEvent::SetModalVisible(false),
            ViewEvent::SetBookingConfirmed(true),
            ViewEvent::SetBookingConfirmed(false),
            ViewEvent::booking_field("name", "x"),
            ViewEvent::reset_booking_details(),
            ViewEvent::SetFlights(Vec::new()),
        ];

        // Every sequence of length four over the alphabet.
        let n = alphabet.len();
        for code in 0..n.pow(4) {
            let mut state = ViewState::new();
            let mut rest = code;
            for _ in 0..4 {
                state = apply(state, alphabet[rest % n].clone());
                rest /= n;
                assert!(state.is_consistent(), "violated after code {}", code);
            }
        }
    }

    #[test]
    fn test_field_updates_then_reset_match_fresh_state() {
        let fresh = ViewState::new();
        let state = run(vec![
            ViewEvent::booking_field("name", "A"),
            ViewEvent::booking_field("email", "a@b.c"),
            ViewEvent::booking_field("name", "B"),
            ViewEvent::booking_field("phone", ""),
            ViewEvent::reset_booking_details(),
        ]);
        assert_eq!(state.booking_details, fresh.booking_details);
    }

    #[test]
    fn test_store_dispatch_all() {
        let mut store = ViewStore::new();
        store.dispatch_all(vec![
            ViewEvent::SetModalVisible(true),
            ViewEvent::booking_field("name", "Asha"),
        ]);
        assert_eq!(store.stage(), ModalStage::Form);
        assert_eq!(store.state().detail("name"), Some("Asha"));
    }

    fn run_from(state: ViewState, events: Vec<ViewEvent>) -> ViewState {
        events.into_iter().fold(state, apply)
    }
}
