//! The HTTP client the screens talk to.
//!
//! One method per backend endpoint. The bearer token is read from storage
//! and attached here, and nowhere else; screens never touch it directly.

use dioxus_logger::tracing::info;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::API_BASE_URL;
use crate::error::ApiError;
use crate::storage;
use crate::types::{
    Appointment, AppointmentDraft, AuthPayload, BloodRequest, BroadcastOutcome, Credentials,
    Donation, Envelope, Registration,
};

/// Client for the LifeDrop REST backend.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// A client against the compile-time configured backend.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// A client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the stored bearer token, when the user has one.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match storage::bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Donation history of the signed-in donor, in whatever order the server
    /// keeps it.
    pub async fn donation_history(&self) -> Result<Vec<Donation>, ApiError> {
        info!("fetching donation history");
        let request = self.authorized(self.http.get(self.url("/donation-api/history")));
        let envelope: Envelope<Vec<Donation>> = send_json(request).await?;
        envelope.into_result_or_default()
    }

    /// Upcoming appointments of the signed-in donor.
    pub async fn upcoming_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        info!("fetching upcoming appointments");
        let request = self.authorized(self.http.get(self.url("/donation-api/appointments")));
        let envelope: Envelope<Vec<Appointment>> = send_json(request).await?;
        envelope.into_result_or_default()
    }

    /// Books a new appointment slot and returns the stored record.
    pub async fn schedule_appointment(
        &self,
        draft: &AppointmentDraft,
    ) -> Result<Appointment, ApiError> {
        info!("scheduling appointment at {}", draft.center);
        let request = self.authorized(
            self.http
                .post(self.url("/donation-api/appointments"))
                .json(draft),
        );
        let envelope: Envelope<Appointment> = send_json(request).await?;
        envelope.into_result()
    }

    /// Cancels one appointment. A success status is the only confirmation;
    /// callers drop the local entry in their success branch.
    pub async fn cancel_appointment(&self, id: &str) -> Result<(), ApiError> {
        info!("canceling appointment {id}");
        let request = self.authorized(
            self.http
                .delete(self.url(&format!("/donation-api/appointments/{id}"))),
        );
        expect_success(request).await
    }

    /// Broadcasts a blood request to matching donors and returns how many
    /// were notified.
    pub async fn request_blood(&self, request: &BloodRequest) -> Result<u32, ApiError> {
        info!("broadcasting blood request for {}", request.blood_type.code());
        let request = self.http.post(self.url("/request-blood")).json(request);
        let outcome: BroadcastOutcome = send_json(request).await?;
        outcome.into_result()
    }

    /// Exchanges credentials for a token and the donor's profile.
    pub async fn log_in(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
        info!("logging in {}", credentials.username);
        let request = self.http.post(self.url("/user-api/login")).json(credentials);
        let envelope: Envelope<AuthPayload> = send_json(request).await?;
        envelope.into_result()
    }

    /// Creates a donor account.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        info!("registering {}", registration.username);
        let request = self
            .http
            .post(self.url("/user-api/register"))
            .json(registration);
        let envelope: Envelope<serde_json::Value> = send_json(request).await?;
        envelope.into_result_or_default().map(|_| ())
    }
}

/// Error body some endpoints return alongside a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(request: RequestBuilder) -> Result<(), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), response).await);
    }
    Ok(())
}

/// Non-success statuses may still carry a user-facing `{error: "..."}` body;
/// surface it when they do.
async fn status_error(status: u16, response: reqwest::Response) -> ApiError {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(message) }) => ApiError::Api(message),
        _ => ApiError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let client = Client::with_base_url("http://localhost:5000");
        assert_eq!(
            client.url("/donation-api/history"),
            "http://localhost:5000/donation-api/history"
        );
        assert_eq!(
            client.url("/donation-api/appointments/64fa12"),
            "http://localhost:5000/donation-api/appointments/64fa12"
        );
    }

    #[test]
    fn default_client_uses_the_configured_backend() {
        let client = Client::default();
        assert_eq!(
            client.url("/request-blood"),
            format!("{}/request-blood", crate::config::API_BASE_URL)
        );
    }
}
