//! Wire types exchanged with the REST backend.
//!
//! Field names follow the backend's camelCase JSON. Records sent by the
//! server identify themselves with `_id`, which lands in the `id` field via
//! a serde alias.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blood_group::BloodGroup;
use crate::error::ApiError;

/// A completed donation, as reported by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: NaiveDate,
    pub center: String,
    #[serde(default)]
    pub address: String,
    /// Absent for older records; the screen falls back to the donor's own
    /// group.
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    /// Absent means one unit.
    #[serde(default)]
    pub units: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A scheduled future donation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub center: String,
    #[serde(default)]
    pub address: String,
}

/// Fields sent when booking a new appointment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub date: NaiveDate,
    pub time: String,
    pub center: String,
    pub address: String,
}

/// Profile of the signed-in donor, as issued by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fields posted to the registration endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub blood_group: BloodGroup,
    pub city: String,
    pub state: String,
}

/// Token and profile returned by a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// A recipient's call for donors, posted as-is from the request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub blood_type: BloodGroup,
    pub city: String,
    pub message: String,
}

/// The `{error, payload}` wrapper around every donation and user endpoint
/// response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    /// Collapses the wrapper, treating a missing payload on success as a
    /// malformed response.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.error, self.payload) {
            (true, _) => Err(self.message.map_or(ApiError::Rejected, ApiError::Api)),
            (false, Some(payload)) => Ok(payload),
            (false, None) => Err(ApiError::Decode("response carried no payload".to_string())),
        }
    }
}

impl<T: Default> Envelope<T> {
    /// Like [`Envelope::into_result`], but a success without a payload
    /// collapses to the default value. List endpoints use this so an empty
    /// response reads as an empty list.
    pub fn into_result_or_default(self) -> Result<T, ApiError> {
        if self.error {
            Err(self.message.map_or(ApiError::Rejected, ApiError::Api))
        } else {
            Ok(self.payload.unwrap_or_default())
        }
    }
}

/// Response of the blood request broadcast. Success carries the number of
/// notified donors; failure carries a user-facing `error` string instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub donors_notified: u32,
    #[serde(default)]
    pub error: Option<String>,
}

impl BroadcastOutcome {
    /// The notified-donor count, or the failure the server described.
    pub fn into_result(self) -> Result<u32, ApiError> {
        if let Some(message) = self.error {
            Err(ApiError::Api(message))
        } else if self.success {
            Ok(self.donors_notified)
        } else {
            Err(ApiError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn donation_parses_backend_camel_case() {
        let json = r#"{
            "_id": "64fa12",
            "date": "2024-01-10",
            "center": "City Blood Bank",
            "address": "12 Main St",
            "bloodGroup": "O+",
            "units": 2,
            "status": "Completed"
        }"#;

        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.id, "64fa12");
        assert_eq!(donation.date, date(2024, 1, 10));
        assert_eq!(donation.center, "City Blood Bank");
        assert_eq!(donation.blood_group, Some(BloodGroup::OPositive));
        assert_eq!(donation.units, Some(2));
        assert_eq!(donation.status.as_deref(), Some("Completed"));
    }

    #[test]
    fn donation_optional_fields_may_be_absent() {
        let json = r#"{"id": "a1", "date": "2023-11-02", "center": "Red Cross"}"#;

        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.id, "a1");
        assert_eq!(donation.address, "");
        assert_eq!(donation.blood_group, None);
        assert_eq!(donation.units, None);
        assert_eq!(donation.status, None);
    }

    #[test]
    fn envelope_error_with_message_surfaces_it() {
        let json = r#"{"error": true, "message": "token expired", "payload": null}"#;
        let envelope: Envelope<Vec<Donation>> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_result_or_default(),
            Err(ApiError::Api("token expired".to_string()))
        );
    }

    #[test]
    fn envelope_error_without_message_is_rejected() {
        let json = r#"{"error": true}"#;
        let envelope: Envelope<Vec<Donation>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result_or_default(), Err(ApiError::Rejected));
    }

    #[test]
    fn envelope_success_without_payload_defaults_to_empty_list() {
        let json = r#"{"error": false}"#;
        let envelope: Envelope<Vec<Appointment>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result_or_default(), Ok(Vec::new()));
    }

    #[test]
    fn envelope_success_requiring_payload_rejects_an_empty_body() {
        let json = r#"{"error": false}"#;
        let envelope: Envelope<AuthPayload> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_result().unwrap_err().is_decode());
    }

    #[test]
    fn blood_request_serializes_the_form_fields() {
        let request = BloodRequest {
            blood_type: BloodGroup::AbNegative,
            city: "Austin".to_string(),
            message: "Urgent surgery tomorrow".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bloodType"], "AB-");
        assert_eq!(json["city"], "Austin");
        assert_eq!(json["message"], "Urgent surgery tomorrow");
    }

    #[test]
    fn broadcast_outcome_success_yields_the_count() {
        let json = r#"{"success": true, "donorsNotified": 5}"#;
        let outcome: BroadcastOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.into_result(), Ok(5));
    }

    #[test]
    fn broadcast_outcome_error_message_wins() {
        let json = r#"{"success": false, "error": "No donors registered in this city"}"#;
        let outcome: BroadcastOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(
            outcome.into_result(),
            Err(ApiError::Api("No donors registered in this city".to_string()))
        );
    }

    #[test]
    fn broadcast_outcome_unsuccessful_without_error_is_rejected() {
        let json = r#"{"success": false}"#;
        let outcome: BroadcastOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.into_result(), Err(ApiError::Rejected));
    }

    #[test]
    fn registration_serializes_camel_case() {
        let registration = Registration {
            username: "maria".to_string(),
            password: "hunter2".to_string(),
            blood_group: BloodGroup::BNegative,
            city: "Lisbon".to_string(),
            state: "Lisboa".to_string(),
        };

        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["bloodGroup"], "B-");
        assert_eq!(json["username"], "maria");
    }
}
