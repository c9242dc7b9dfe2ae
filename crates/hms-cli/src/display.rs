//! Table rendering for records
//!
//! Builders return a [`Table`] so the layout can be checked without a
//! terminal; commands print them.

use crate::api::types::*;
use crate::forms::FieldErrors;
use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use hms_common::dates::{age_on, format_display_date};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Patient listing with an age column computed for `today`
pub fn patients_table(patients: &[Patient], today: NaiveDate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Gender", "Born", "Age", "Phone", "Email"]);

    for patient in patients {
        table.add_row(vec![
            patient.id.to_string(),
            patient.full_name(),
            patient.gender.to_string(),
            format_display_date(patient.date_of_birth),
            age_on(patient.date_of_birth, today).to_string(),
            patient.phone_number.clone(),
            or_dash(patient.email.as_deref()),
        ]);
    }

    table
}

pub fn patient_detail(patient: &Patient, today: NaiveDate) -> Table {
    let mut table = new_table();
    table.add_row(vec!["ID".to_string(), patient.id.to_string()]);
    table.add_row(vec!["Name".to_string(), patient.full_name()]);
    table.add_row(vec!["Gender".to_string(), patient.gender.to_string()]);
    table.add_row(vec![
        "Born".to_string(),
        format_display_date(patient.date_of_birth),
    ]);
    table.add_row(vec![
        "Age".to_string(),
        age_on(patient.date_of_birth, today).to_string(),
    ]);
    table.add_row(vec!["Phone".to_string(), patient.phone_number.clone()]);
    table.add_row(vec!["Email".to_string(), or_dash(patient.email.as_deref())]);
    table.add_row(vec!["Address".to_string(), or_dash(patient.address.as_deref())]);
    table
}

pub fn doctors_table(doctors: &[Doctor]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Specialty", "Gender", "Phone", "Email"]);

    for doctor in doctors {
        table.add_row(vec![
            doctor.id.to_string(),
            doctor.full_name(),
            doctor.specialty.clone(),
            doctor.gender.to_string(),
            doctor.phone_number.clone(),
            or_dash(doctor.email.as_deref()),
        ]);
    }

    table
}

pub fn appointments_table(appointments: &[Appointment]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Patient", "Doctor", "Date", "Time", "Reason", "Status"]);

    for appointment in appointments {
        table.add_row(vec![
            appointment.id.to_string(),
            appointment.patient.to_string(),
            appointment.doctor.to_string(),
            format_display_date(appointment.date),
            appointment.time.clone(),
            or_dash(appointment.reason.as_deref()),
            if appointment.status { "Completed" } else { "Scheduled" }.to_string(),
        ]);
    }

    table
}

pub fn check_ins_table(check_ins: &[CheckIn]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Patient", "Doctor", "In", "Out", "Reason", "Status"]);

    for check_in in check_ins {
        table.add_row(vec![
            check_in.id.to_string(),
            check_in.patient.to_string(),
            check_in.doctor.to_string(),
            check_in.check_in_time.format("%Y-%m-%d %H:%M").to_string(),
            check_in
                .check_out_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            check_in.reason.clone(),
            if check_in.status { "Active" } else { "Closed" }.to_string(),
        ]);
    }

    table
}

pub fn vitals_table(vitals: &Vitals) -> Table {
    let mut table = new_table();
    table.add_row(vec!["Temperature".to_string(), format!("{:.1} °C", vitals.temperature)]);
    table.add_row(vec!["Blood pressure".to_string(), vitals.blood_pressure.clone()]);
    table.add_row(vec!["Heart rate".to_string(), format!("{} bpm", vitals.heart_rate)]);
    table.add_row(vec![
        "Respiratory rate".to_string(),
        format!("{} /min", vitals.respiratory_rate),
    ]);
    table.add_row(vec!["Weight".to_string(), format!("{:.1} kg", vitals.weight)]);
    table.add_row(vec!["Height".to_string(), format!("{:.1} cm", vitals.height)]);
    table.add_row(vec![
        "BMI".to_string(),
        vitals
            .bmi
            .map(|b| format!("{:.1}", b))
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table
}

pub fn records_table(records: &[MedicalRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Date", "Doctor", "Reason", "Diagnosis"]);

    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            record.date.format("%Y-%m-%d %H:%M").to_string(),
            record.doctor.to_string(),
            record.reason.clone(),
            record.diagnosis.clone(),
        ]);
    }

    table
}

pub fn emergency_contact_table(contact: &EmergencyContact) -> Table {
    let mut table = new_table();
    table.add_row(vec!["Name", contact.name.as_str()]);
    table.add_row(vec!["Phone", contact.phone_number.as_str()]);
    table.add_row(vec!["Relationship", contact.relationship.as_str()]);
    table
}

/// Print validation messages, one line per field
pub fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {} {}", format!("{}:", field).yellow(), message);
    }
}
