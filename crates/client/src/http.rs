use async_trait::async_trait;
use canchas_core::{
    api::BookingApi,
    errors::{ApiError, ApiResult},
    models::{
        booking::{CreateReservationRequest, CreatedReservation},
        reservation::{Reservation, ReservationStatus, ReservationUpdate, UpdateStatusRequest},
        venue::Venue,
    },
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// JSON client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body);
            warn!("Backend rejected request with {}: {:?}", status, message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(classify)
    }
}

/// Encode an identifier as one path segment; blank identifiers never reach the wire.
fn path_id(id: &str) -> ApiResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::Request("identificador vacío".to_string()));
    }
    Ok(urlencoding::encode(id).into_owned())
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::Request(err.to_string())
    } else if err.is_decode() {
        ApiError::InvalidResponse(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

/// Pull the `message` (or `error`) string out of an error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

#[async_trait]
impl BookingApi for HttpApi {
    async fn list_venues(&self) -> ApiResult<Vec<Venue>> {
        self.send(self.client.get(self.url("/enclosure"))).await
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> ApiResult<CreatedReservation> {
        if request.user.trim().is_empty() || request.enclosure.trim().is_empty() {
            return Err(ApiError::Request(
                "la reserva necesita recinto y usuario".to_string(),
            ));
        }
        self.send(self.client.post(self.url("/playes")).json(request)).await
    }

    async fn list_reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.send(self.client.get(self.url("/playes/gestion/reservas")))
            .await
    }

    async fn list_admin_reservations(&self, admin_id: &str) -> ApiResult<Vec<Reservation>> {
        let path = format!("/playes/gestion/arrendatario/{}", path_id(admin_id)?);
        self.send(self.client.get(self.url(&path))).await
    }

    async fn update_reservation_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> ApiResult<ReservationUpdate> {
        let path = format!("/playes/gestion/reservas/{}", path_id(id)?);
        let body = UpdateStatusRequest { estado: status };
        self.send(self.client.patch(self.url(&path)).json(&body)).await
    }
}
