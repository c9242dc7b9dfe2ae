//! `hms appointments` command implementation
//!
//! Booking fills missing fields interactively. When the patient or doctor is
//! missing, both lists are fetched concurrently and joined before the user
//! picks from them.

use super::patients::nothing_to_update;
use super::{confirm, is_interactive};
use crate::api::types::*;
use crate::api::ApiClient;
use crate::display;
use crate::error::Result;
use crate::forms::{non_blank, AppointmentForm, FieldErrors};
use crate::progress::busy;
use crate::BookArgs;
use chrono::NaiveDate;
use colored::Colorize;
use hms_common::dates::{format_iso_date, normalize_time, parse_iso_date};
use std::fmt;
use tracing::debug;

pub async fn list(client: &ApiClient) -> Result<()> {
    let appointments = busy("Loading appointments...", client.appointments().get_all()).await?;

    if appointments.is_empty() {
        println!("No appointments found.");
        return Ok(());
    }

    println!("{}", display::appointments_table(&appointments));
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let appointment = busy("Loading appointment...", client.appointments().get_by_id(id)).await?;
    println!(
        "{}",
        display::appointments_table(std::slice::from_ref(&appointment))
    );
    Ok(())
}

/// Book an appointment. On success the booking flow ends; nothing else is
/// shown from it.
pub async fn book(client: &ApiClient, args: BookArgs) -> Result<()> {
    let mut form = AppointmentForm {
        patient: args.patient,
        doctor: args.doctor,
        date: args.date,
        time: args.time,
        reason: args.reason,
    };

    if is_interactive() {
        fill_interactively(client, &mut form).await?;
    }

    let appointment = busy("Booking appointment...", form.submit(client)).await?;

    println!(
        "{} Appointment {} booked for {} at {}",
        "✓".green(),
        appointment.id,
        appointment.date,
        appointment.time
    );
    Ok(())
}

/// Labelled id for selection prompts
struct Choice {
    id: i64,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.label)
    }
}

/// Fetch patients and doctors concurrently
pub async fn load_booking_choices(client: &ApiClient) -> Result<(PatientList, DoctorList)> {
    let patients_api = client.patients();
    let doctors_api = client.doctors();

    let (patients, doctors) = tokio::try_join!(patients_api.get_all(), doctors_api.get_all())?;

    debug!(
        patients = patients.count,
        doctors = doctors.count,
        "Loaded booking choices"
    );
    Ok((patients, doctors))
}

async fn fill_interactively(client: &ApiClient, form: &mut AppointmentForm) -> Result<()> {
    if form.patient.is_none() || form.doctor.is_none() {
        let (patients, doctors) =
            busy("Loading patients and doctors...", load_booking_choices(client)).await?;

        if form.patient.is_none() && !patients.patients.is_empty() {
            let choices = patients
                .patients
                .iter()
                .map(|p| Choice {
                    id: p.id,
                    label: p.full_name(),
                })
                .collect();
            form.patient = Some(inquire::Select::new("Patient:", choices).prompt()?.id);
        }

        if form.doctor.is_none() && !doctors.doctors.is_empty() {
            let choices = doctors
                .doctors
                .iter()
                .map(|d| Choice {
                    id: d.id,
                    label: format!("{} ({})", d.full_name(), d.specialty),
                })
                .collect();
            form.doctor = Some(inquire::Select::new("Doctor:", choices).prompt()?.id);
        }
    }

    if form.date.is_none() {
        let value = inquire::Text::new("Date (YYYY-MM-DD):").prompt()?;
        if !value.trim().is_empty() {
            form.date = Some(parse_iso_date(&value)?);
        }
    }

    if form.time.is_none() {
        form.time = Some(inquire::Text::new("Time (HH:MM):").prompt()?);
    }

    if form.reason.is_none() {
        form.reason = non_blank(Some(
            inquire::Text::new("Reason (optional):").prompt()?.as_str(),
        ));
    }

    Ok(())
}

/// Build the partial update from the flags that were given
pub fn appointment_update(
    doctor: Option<i64>,
    date: Option<NaiveDate>,
    time: Option<String>,
    reason: Option<String>,
    completed: Option<bool>,
) -> std::result::Result<AppointmentUpdate, FieldErrors> {
    let time = match time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(t) => match normalize_time(t) {
            Ok(normalized) => Some(normalized),
            Err(_) => {
                let mut errors = FieldErrors::new();
                errors.insert("time", "Time must be in HH:MM format");
                return Err(errors);
            },
        },
    };

    let update = AppointmentUpdate {
        doctor,
        date: date.map(format_iso_date),
        time,
        reason: non_blank(reason.as_deref()),
        status: completed,
    };

    if update.doctor.is_none()
        && update.date.is_none()
        && update.time.is_none()
        && update.reason.is_none()
        && update.status.is_none()
    {
        return Err(nothing_to_update());
    }

    Ok(update)
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    doctor: Option<i64>,
    date: Option<NaiveDate>,
    time: Option<String>,
    reason: Option<String>,
    completed: Option<bool>,
) -> Result<()> {
    let request = appointment_update(doctor, date, time, reason, completed)?;
    let appointment = busy(
        "Saving appointment...",
        client.appointments().update(id, &request),
    )
    .await?;

    println!("{} Updated appointment {}", "✓".green(), appointment.id);
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(&format!("Cancel and delete appointment {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    busy("Deleting appointment...", client.appointments().delete(id)).await?;
    println!("{} Deleted appointment {}", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_load_booking_choices_joins_both_lists() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/patients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "patients": [{
                    "id": 5,
                    "first_name": "Ada",
                    "last_name": "Okafor",
                    "date_of_birth": "1990-06-15",
                    "gender": "Female",
                    "phone_number": "555-0101"
                }],
                "count": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/staff/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "doctors": [],
                "count": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Credentials::in_memory()).unwrap();
        let (patients, doctors) = load_booking_choices(&client).await.unwrap();

        assert_eq!(patients.patients[0].id, 5);
        assert_eq!(doctors.count, 0);
    }

    #[tokio::test]
    async fn test_load_booking_choices_fails_if_either_fails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/patients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "patients": [],
                "count": 0
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/staff/doctors"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"detail": "Staff service down"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Credentials::in_memory()).unwrap();
        let err = load_booking_choices(&client).await.unwrap_err();
        assert_eq!(err.user_message(), "Staff service down");
    }

    #[test]
    fn test_update_formats_date_and_time() {
        let update = appointment_update(
            None,
            NaiveDate::from_ymd_opt(2025, 1, 3),
            Some("9:30".to_string()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(update.date.as_deref(), Some("2025-01-03"));
        assert_eq!(update.time.as_deref(), Some("09:30"));
    }

    #[test]
    fn test_update_marks_completed() {
        let update = appointment_update(None, None, None, None, Some(true)).unwrap();
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json, serde_json::json!({"status": true}));
    }

    #[test]
    fn test_update_rejects_bad_time() {
        let errors = appointment_update(None, None, Some("noon".into()), None, None).unwrap_err();
        assert!(errors.contains("time"));
    }

    #[test]
    fn test_update_requires_a_field() {
        assert!(appointment_update(None, None, None, None, None).is_err());
    }

    #[test]
    fn test_choice_label() {
        let choice = Choice {
            id: 5,
            label: "Ada Okafor".to_string(),
        };
        assert_eq!(choice.to_string(), "#5 Ada Okafor");
    }
}
