use std::fmt::Write;

use flightdesk_core::{ModalStage, ViewState};

/// Draws the whole screen for the given state.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Flight Booking ==");

    if let Some(failure) = &state.search_error {
        let _ = writeln!(out, "! Search failed: {} (run `search` to retry)", failure);
    }

    if state.flights.is_empty() {
        let _ = writeln!(out, "Search for a flight!");
    } else {
        for flight in &state.flights {
            let _ = writeln!(
                out,
                "[{}] {:<8} {:<12} {:<8} {:<9} ₹ {}",
                flight.id,
                flight.arrival,
                flight.company,
                flight.duration,
                flight.route(),
                flight.price
            );
        }
    }

    match state.modal_stage() {
        ModalStage::Closed => {}
        ModalStage::Form => {
            let _ = writeln!(out, "-- Your Details --");
            if let Some(id) = state.selected_flight {
                let _ = writeln!(out, "flight: {}", id);
            }
            let _ = writeln!(out, "name:  {}", state.detail("name").unwrap_or(""));
            let _ = writeln!(out, "email: {}", state.detail("email").unwrap_or(""));
            if let Some(failure) = &state.booking_error {
                let _ = writeln!(out, "! Booking failed: {} (run `confirm` to retry)", failure);
            }
            let _ = writeln!(out, "[confirm] [cancel]");
        }
        ModalStage::Confirmed => {
            let _ = writeln!(out, "Booking Confirmed!");
            let _ = writeln!(out, "[close]");
        }
    }

    out
}
