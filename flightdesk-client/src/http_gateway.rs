use async_trait::async_trait;
use flightdesk_core::{FlightGateway, GatewayError};
use flightdesk_shared::{BookingAck, BookingRequest, Flight};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app_config::GatewayConfig;
use crate::ClientError;

/// `FlightGateway` over plain HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpFlightGateway {
    client: Client,
    base_url: String,
}

impl HttpFlightGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl FlightGateway for HttpFlightGateway {
    async fn fetch_flights(&self) -> Result<Vec<Flight>, GatewayError> {
        let url = self.endpoint("/flights");
        debug!(%url, "GET flights");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_json(response).await
    }

    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingAck, GatewayError> {
        let url = self.endpoint("/booking");
        debug!(%url, flight = %request.flight, "POST booking");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| GatewayError::Malformed(e.to_string()))
}
