//! Appointment booking form
//!
//! Patient, doctor, date and time are required. A new appointment is always
//! submitted as not completed (`status: false`) with its date rendered as
//! `YYYY-MM-DD`.

use super::{is_blank, non_blank, FieldErrors};
use crate::api::{ApiClient, Appointment, NewAppointment};
use crate::error::Result;
use chrono::NaiveDate;
use hms_common::dates::{format_iso_date, normalize_time};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub patient: Option<i64>,
    pub doctor: Option<i64>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

impl AppointmentForm {
    /// Check the form and build the creation payload.
    ///
    /// Only the missing or malformed fields are reported.
    pub fn validate(&self) -> std::result::Result<NewAppointment, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.patient.is_none() {
            errors.insert("patient", "Patient is required");
        }

        if self.doctor.is_none() {
            errors.insert("doctor", "Doctor is required");
        }

        if self.date.is_none() {
            errors.insert("date", "Date is required");
        }

        let time = match self.time.as_deref() {
            None => None,
            Some(t) if is_blank(t) => None,
            Some(t) => match normalize_time(t) {
                Ok(normalized) => Some(normalized),
                Err(_) => {
                    errors.insert("time", "Time must be in HH:MM format");
                    None
                },
            },
        };

        if time.is_none() {
            errors.insert("time", "Time is required");
        }

        match (self.patient, self.doctor, self.date, time) {
            (Some(patient), Some(doctor), Some(date), Some(time)) if errors.is_empty() => {
                Ok(NewAppointment {
                    patient,
                    doctor,
                    date: format_iso_date(date),
                    time,
                    reason: non_blank(self.reason.as_deref()),
                    status: false,
                })
            },
            _ => Err(errors),
        }
    }

    /// Validate and create the appointment
    pub async fn submit(&self, client: &ApiClient) -> Result<Appointment> {
        let request = self.validate()?;
        let appointment = client.appointments().create(&request).await?;

        info!(
            appointment_id = appointment.id,
            patient = appointment.patient,
            doctor = appointment.doctor,
            "Appointment booked"
        );
        Ok(appointment)
    }
}
