//! API request and response types
//!
//! Mirrors the backend resources. Records reference each other by numeric
//! id only. `New*` payloads never carry an id (the backend assigns them) and
//! `*Update` payloads serialize only the fields that are set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Credentials sent to the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access/refresh pair issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Fresh access token returned by the refresh endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

/// Account registration profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

// ============================================================================
// People
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender '{}': expected Male or Female", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// `GET /patients/` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientList {
    pub patients: Vec<Patient>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub specialty: String,
    pub gender: Gender,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub specialty: String,
    pub gender: Gender,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `GET /staff/doctors` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorList {
    pub doctors: Vec<Doctor>,
    pub count: usize,
}

// ============================================================================
// Patient sub-resources
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: i64,
    pub patient: i64,
    pub name: String,
    pub phone_number: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmergencyContact {
    pub name: String,
    pub phone_number: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmergencyContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// A set of measurements. `bmi` is derived by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub id: i64,
    pub patient: i64,
    /// Celsius
    pub temperature: f64,
    /// "systolic/diastolic", e.g. "120/80"
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub respiratory_rate: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimetres
    pub height: f64,
    #[serde(default)]
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVitals {
    pub temperature: f64,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub respiratory_rate: u32,
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient: i64,
    pub doctor: i64,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub diagnosis: String,
    #[serde(default)]
    pub vitals: Option<Vitals>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedicalRecord {
    pub doctor: i64,
    pub reason: String,
    pub diagnosis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitals: Option<NewVitals>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalRecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
}

// ============================================================================
// Visits
// ============================================================================

/// `status` is true while the patient is checked in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: i64,
    pub patient: i64,
    pub doctor: i64,
    pub check_in_time: DateTime<Utc>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
    pub reason: String,
    pub status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCheckIn {
    pub patient: i64,
    pub doctor: i64,
    pub check_in_time: DateTime<Utc>,
    pub reason: String,
    pub status: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// `status` is true once the appointment is completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient: i64,
    pub doctor: i64,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient: i64,
    pub doctor: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

// ============================================================================
// Errors
// ============================================================================

/// Pull the human-readable message out of an error body.
///
/// `detail` wins over `message`. Non-string values are rendered as JSON.
/// Returns `None` for empty or non-JSON bodies.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    ["detail", "message"].iter().find_map(|key| match value.get(*key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appointment_omits_missing_reason() {
        let request = NewAppointment {
            patient: 5,
            doctor: 2,
            date: "2024-12-15".to_string(),
            time: "10:00".to_string(),
            reason: None,
            status: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "patient": 5,
                "doctor": 2,
                "date": "2024-12-15",
                "time": "10:00",
                "status": false
            })
        );
    }

    #[test]
    fn test_partial_update_serializes_only_set_fields() {
        let update = PatientUpdate {
            phone_number: Some("555-0100".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"phone_number":"555-0100"}"#);
    }

    #[test]
    fn test_patient_deserializes_backend_shape() {
        let patient: Patient = serde_json::from_value(serde_json::json!({
            "id": 5,
            "first_name": "Ada",
            "last_name": "Okafor",
            "date_of_birth": "1990-06-15",
            "gender": "Female",
            "phone_number": "555-0101",
            "email": "ada@example.com",
            "address": "12 Harbour Road"
        }))
        .unwrap();

        assert_eq!(patient.id, 5);
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(patient.full_name(), "Ada Okafor");
    }

    #[test]
    fn test_check_in_without_checkout() {
        let check_in: CheckIn = serde_json::from_value(serde_json::json!({
            "id": 1,
            "patient": 5,
            "doctor": 2,
            "check_in_time": "2024-12-15T09:30:00Z",
            "check_out_time": null,
            "reason": "Fever",
            "status": true
        }))
        .unwrap();

        assert!(check_in.check_out_time.is_none());
        assert!(check_in.status);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_error_message_prefers_detail() {
        let body = r#"{"detail": "Token expired", "message": "ignored"}"#;
        assert_eq!(error_message_from_body(body).as_deref(), Some("Token expired"));
    }

    #[test]
    fn test_error_message_falls_back_to_message() {
        let body = r#"{"message": "Patient not found"}"#;
        assert_eq!(error_message_from_body(body).as_deref(), Some("Patient not found"));
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(error_message_from_body(r#"{"errors": []}"#), None);
        assert_eq!(error_message_from_body(""), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
    }
}
