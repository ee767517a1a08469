use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use flightdesk_shared::{BookingAck, BookingRequest, Flight, FlightId};
use tracing::{debug, error, info, warn};

use crate::events::ViewEvent;
use crate::gateway::FlightGateway;
use crate::state::{ModalStage, RequestFailure, ViewState};
use crate::store::ViewStore;
use crate::{FlowError, FlowResult, GatewayError};

/// An issued request that has not resolved yet. The event loop may spawn it
/// and hand the result back through [`BookingFlowController::complete`].
pub type PendingCompletion = Pin<Box<dyn Future<Output = Completion> + Send + 'static>>;

/// A resolved remote call tagged with the generation it was issued under.
#[derive(Debug)]
pub enum Completion {
    Search {
        generation: u64,
        result: Result<Vec<Flight>, GatewayError>,
    },
    Booking {
        generation: u64,
        flight: FlightId,
        result: Result<BookingAck, GatewayError>,
    },
}

/// What `complete` did with a completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Failed(RequestFailure),
    /// A newer request of the same kind was issued, or the modal was dismissed.
    Stale,
}

/// Turns user gestures and network results into view events for one session.
pub struct BookingFlowController {
    gateway: Arc<dyn FlightGateway>,
    store: ViewStore,
    search_generation: u64,
    booking_generation: u64,
}

impl BookingFlowController {
    pub fn new(gateway: Arc<dyn FlightGateway>) -> Self {
        Self {
            gateway,
            store: ViewStore::new(),
            search_generation: 0,
            booking_generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn stage(&self) -> ModalStage {
        self.store.stage()
    }

    /// Starts a flight search. No form inputs are sent.
    pub fn issue_search(&mut self) -> PendingCompletion {
        self.search_generation += 1;
        let generation = self.search_generation;
        let gateway = Arc::clone(&self.gateway);
        debug!(generation, "issuing flight search");

        Box::pin(async move {
            let result = gateway.fetch_flights().await;
            Completion::Search { generation, result }
        })
    }

    pub async fn search(&mut self) -> Outcome {
        let pending = self.issue_search();
        let completion = pending.await;
        self.complete(completion)
    }

    /// Opens the form for `flight`. Only allowed from the closed modal, so a
    /// pending submission can never be confirmed under another selection.
    pub fn begin_booking(&mut self, flight: FlightId) -> FlowResult<()> {
        if self.stage() != ModalStage::Closed {
            return Err(FlowError::BookingInProgress);
        }
        if self.state().flight(flight).is_none() {
            return Err(FlowError::UnknownFlight(flight));
        }
        self.store.dispatch_all([
            ViewEvent::SelectFlight(Some(flight)),
            ViewEvent::SetModalVisible(true),
        ]);
        Ok(())
    }

    pub fn cancel_booking(&mut self) {
        self.booking_generation += 1;
        self.store.dispatch_all([
            ViewEvent::SetModalVisible(false),
            ViewEvent::reset_booking_details(),
            ViewEvent::SelectFlight(None),
            ViewEvent::SetBookingError(None),
        ]);
    }

    /// Validates the form and starts the booking submission.
    pub fn issue_booking(&mut self) -> FlowResult<PendingCompletion> {
        match self.stage() {
            ModalStage::Closed => return Err(FlowError::ModalClosed),
            ModalStage::Confirmed => return Err(FlowError::AlreadyConfirmed),
            ModalStage::Form => {}
        }

        let state = self.state();
        let flight = state.selected_flight.ok_or(FlowError::NoFlightSelected)?;
        let name = required(state, "name")?;
        let email = required(state, "email")?;
        let request = BookingRequest::new(name, email, flight);

        self.booking_generation += 1;
        let generation = self.booking_generation;
        let gateway = Arc::clone(&self.gateway);
        debug!(generation, %flight, ?request, "issuing booking");

        let pending: PendingCompletion = Box::pin(async move {
            let result = gateway.submit_booking(&request).await;
            Completion::Booking {
                generation,
                flight,
                result,
            }
        });
        Ok(pending)
    }

    pub async fn confirm_booking(&mut self) -> FlowResult<Outcome> {
        let pending = self.issue_booking()?;
        let completion = pending.await;
        Ok(self.complete(completion))
    }

    pub fn close_booking(&mut self) {
        self.booking_generation += 1;
        self.store.dispatch_all([
            ViewEvent::SetModalVisible(false),
            ViewEvent::SetBookingConfirmed(false),
            ViewEvent::reset_booking_details(),
            ViewEvent::SelectFlight(None),
            ViewEvent::SetBookingError(None),
        ]);
    }

    pub fn update_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.store.dispatch(ViewEvent::booking_field(name, value));
    }

    /// Applies a resolved request unless something newer superseded it.
    pub fn complete(&mut self, completion: Completion) -> Outcome {
        match completion {
            Completion::Search { generation, result } => {
                if generation != self.search_generation {
                    debug!(generation, current = self.search_generation, "dropping stale search result");
                    return Outcome::Stale;
                }
                match result {
                    Ok(flights) => {
                        info!(count = flights.len(), "flight search completed");
                        self.store.dispatch_all([
                            ViewEvent::SetSearchError(None),
                            ViewEvent::SetFlights(flights),
                        ]);
                        Outcome::Applied
                    }
                    Err(err) => {
                        warn!("Flight search failed: {}", err);
                        let failure = RequestFailure::from(&err);
                        self.store
                            .dispatch(ViewEvent::SetSearchError(Some(failure.clone())));
                        Outcome::Failed(failure)
                    }
                }
            }
            Completion::Booking {
                generation,
                flight,
                result,
            } => {
                if generation != self.booking_generation {
                    warn!(%flight, generation, "booking response arrived after the form was superseded");
                    return Outcome::Stale;
                }
                match result {
                    Ok(ack) => {
                        info!(%flight, ?ack, "booking confirmed");
                        self.store.dispatch_all([
                            ViewEvent::SetBookingError(None),
                            ViewEvent::SetBookingConfirmed(true),
                            ViewEvent::SetFlights(Vec::new()),
                        ]);
                        Outcome::Applied
                    }
                    Err(err) => {
                        error!(%flight, "Booking failed: {}", err);
                        let failure = RequestFailure::from(&err);
                        self.store
                            .dispatch(ViewEvent::SetBookingError(Some(failure.clone())));
                        Outcome::Failed(failure)
                    }
                }
            }
        }
    }
}

fn required(state: &ViewState, field: &'static str) -> FlowResult<String> {
    match state.detail(field) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(FlowError::MissingField(field)),
    }
}
