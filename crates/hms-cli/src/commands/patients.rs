//! `hms patients` command implementation
//!
//! Patient CRUD plus the per-patient vitals, medical records and emergency
//! contact.

use super::{confirm, today};
use crate::api::types::*;
use crate::api::ApiClient;
use crate::display;
use crate::error::Result;
use crate::forms::{non_blank, FieldErrors};
use crate::progress::busy;
use crate::{
    ContactCommand, NewPatientArgs, PatientChangesArgs, RecordCommand, VitalsArgs,
    VitalsChangesArgs, VitalsCommand,
};
use colored::Colorize;
use tracing::debug;

/// Error for an update with no fields set
pub(crate) fn nothing_to_update() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert("fields", "Provide at least one field to change");
    errors
}

/// List all patients with their current age
pub async fn list(client: &ApiClient) -> Result<()> {
    let listing = busy("Loading patients...", client.patients().get_all()).await?;
    debug!(count = listing.count, returned = listing.patients.len(), "Patients loaded");

    if listing.patients.is_empty() {
        println!("No patients found.");
        return Ok(());
    }

    println!("{}", display::patients_table(&listing.patients, today()));
    println!("{} patient(s)", listing.count);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let patient = busy("Loading patient...", client.patients().get_by_id(id)).await?;
    println!("{}", display::patient_detail(&patient, today()));
    Ok(())
}

pub async fn create(client: &ApiClient, args: NewPatientArgs) -> Result<()> {
    let mut errors = FieldErrors::new();
    if args.first_name.trim().is_empty() {
        errors.insert("first_name", "First name is required");
    }
    if args.last_name.trim().is_empty() {
        errors.insert("last_name", "Last name is required");
    }
    if args.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    }
    errors.into_result()?;

    let request = NewPatient {
        first_name: args.first_name.trim().to_string(),
        last_name: args.last_name.trim().to_string(),
        date_of_birth: args.date_of_birth,
        gender: args.gender,
        phone_number: args.phone.trim().to_string(),
        email: non_blank(args.email.as_deref()),
        address: non_blank(args.address.as_deref()),
    };

    let patient = busy("Saving patient...", client.patients().create(&request)).await?;
    println!(
        "{} Created patient {} (id {})",
        "✓".green(),
        patient.full_name().bold(),
        patient.id
    );
    Ok(())
}

/// Build the partial update from the flags that were given
pub fn patient_update(args: PatientChangesArgs) -> std::result::Result<PatientUpdate, FieldErrors> {
    let update = PatientUpdate {
        first_name: non_blank(args.first_name.as_deref()),
        last_name: non_blank(args.last_name.as_deref()),
        date_of_birth: args.date_of_birth,
        gender: args.gender,
        phone_number: non_blank(args.phone.as_deref()),
        email: non_blank(args.email.as_deref()),
        address: non_blank(args.address.as_deref()),
    };

    let empty = update.first_name.is_none()
        && update.last_name.is_none()
        && update.date_of_birth.is_none()
        && update.gender.is_none()
        && update.phone_number.is_none()
        && update.email.is_none()
        && update.address.is_none();

    if empty {
        return Err(nothing_to_update());
    }

    Ok(update)
}

pub async fn update(client: &ApiClient, id: i64, changes: PatientChangesArgs) -> Result<()> {
    let request = patient_update(changes)?;
    let patient = busy("Saving patient...", client.patients().update(id, &request)).await?;
    println!("{} Updated patient {}", "✓".green(), patient.full_name().bold());
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(&format!("Delete patient {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    busy("Deleting patient...", client.patients().delete(id)).await?;
    println!("{} Deleted patient {}", "✓".green(), id);
    Ok(())
}

// ============================================================================
// Vitals
// ============================================================================

pub async fn vitals(client: &ApiClient, command: VitalsCommand) -> Result<()> {
    match command {
        VitalsCommand::Show { patient_id } => {
            let vitals = busy(
                "Loading vitals...",
                client.patients().vitals(patient_id).get(),
            )
            .await?;
            println!("{}", display::vitals_table(&vitals));
        },
        VitalsCommand::Record { patient_id, vitals } => {
            let request = new_vitals(vitals)?;
            let saved = busy(
                "Saving vitals...",
                client.patients().vitals(patient_id).create(&request),
            )
            .await?;
            println!("{} Vitals recorded", "✓".green());
            println!("{}", display::vitals_table(&saved));
        },
        VitalsCommand::Update {
            patient_id,
            changes,
        } => {
            let request = vitals_update(changes)?;
            let saved = busy(
                "Saving vitals...",
                client.patients().vitals(patient_id).update(&request),
            )
            .await?;
            println!("{} Vitals updated", "✓".green());
            println!("{}", display::vitals_table(&saved));
        },
        VitalsCommand::Delete { patient_id, yes } => {
            if !confirm(&format!("Delete vitals for patient {}?", patient_id), yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            busy(
                "Deleting vitals...",
                client.patients().vitals(patient_id).delete(),
            )
            .await?;
            println!("{} Vitals deleted", "✓".green());
        },
    }

    Ok(())
}

fn new_vitals(args: VitalsArgs) -> std::result::Result<NewVitals, FieldErrors> {
    let mut errors = FieldErrors::new();
    if args.blood_pressure.trim().is_empty() {
        errors.insert("blood_pressure", "Blood pressure is required");
    }
    if args.weight <= 0.0 {
        errors.insert("weight", "Weight must be positive");
    }
    if args.height <= 0.0 {
        errors.insert("height", "Height must be positive");
    }
    errors.into_result()?;

    Ok(NewVitals {
        temperature: args.temperature,
        blood_pressure: args.blood_pressure.trim().to_string(),
        heart_rate: args.heart_rate,
        respiratory_rate: args.respiratory_rate,
        weight: args.weight,
        height: args.height,
    })
}

fn vitals_update(args: VitalsChangesArgs) -> std::result::Result<VitalsUpdate, FieldErrors> {
    let update = VitalsUpdate {
        temperature: args.temperature,
        blood_pressure: non_blank(args.blood_pressure.as_deref()),
        heart_rate: args.heart_rate,
        respiratory_rate: args.respiratory_rate,
        weight: args.weight,
        height: args.height,
    };

    let empty = update.temperature.is_none()
        && update.blood_pressure.is_none()
        && update.heart_rate.is_none()
        && update.respiratory_rate.is_none()
        && update.weight.is_none()
        && update.height.is_none();

    if empty {
        return Err(nothing_to_update());
    }

    Ok(update)
}

// ============================================================================
// Medical records
// ============================================================================

pub async fn records(client: &ApiClient, command: RecordCommand) -> Result<()> {
    match command {
        RecordCommand::List { patient_id } => {
            let records = busy(
                "Loading records...",
                client.patients().medical_records(patient_id).get_all(),
            )
            .await?;

            if records.is_empty() {
                println!("No medical records for patient {}.", patient_id);
            } else {
                println!("{}", display::records_table(&records));
            }
        },
        RecordCommand::Show {
            patient_id,
            record_id,
        } => {
            let record = busy(
                "Loading record...",
                client
                    .patients()
                    .medical_records(patient_id)
                    .get_by_id(record_id),
            )
            .await?;

            println!("{}", display::records_table(std::slice::from_ref(&record)));
            if let Some(ref vitals) = record.vitals {
                println!("{}", "Vitals:".cyan());
                println!("{}", display::vitals_table(vitals));
            }
        },
        RecordCommand::Add {
            patient_id,
            doctor,
            reason,
            diagnosis,
        } => {
            let mut errors = FieldErrors::new();
            if reason.trim().is_empty() {
                errors.insert("reason", "Reason is required");
            }
            if diagnosis.trim().is_empty() {
                errors.insert("diagnosis", "Diagnosis is required");
            }
            errors.into_result()?;

            let request = NewMedicalRecord {
                doctor,
                reason: reason.trim().to_string(),
                diagnosis: diagnosis.trim().to_string(),
                vitals: None,
            };
            let record = busy(
                "Saving record...",
                client.patients().medical_records(patient_id).create(&request),
            )
            .await?;
            println!("{} Added record {}", "✓".green(), record.id);
        },
        RecordCommand::Update {
            patient_id,
            record_id,
            doctor,
            reason,
            diagnosis,
        } => {
            let request = MedicalRecordUpdate {
                doctor,
                reason: non_blank(reason.as_deref()),
                diagnosis: non_blank(diagnosis.as_deref()),
            };
            if request.doctor.is_none() && request.reason.is_none() && request.diagnosis.is_none()
            {
                return Err(nothing_to_update().into());
            }

            busy(
                "Saving record...",
                client
                    .patients()
                    .medical_records(patient_id)
                    .update(record_id, &request),
            )
            .await?;
            println!("{} Updated record {}", "✓".green(), record_id);
        },
        RecordCommand::Delete {
            patient_id,
            record_id,
            yes,
        } => {
            if !confirm(&format!("Delete record {}?", record_id), yes)? {
                println!("Cancelled.");
                return Ok(());
            }
            busy(
                "Deleting record...",
                client
                    .patients()
                    .medical_records(patient_id)
                    .delete(record_id),
            )
            .await?;
            println!("{} Deleted record {}", "✓".green(), record_id);
        },
    }

    Ok(())
}

// ============================================================================
// Emergency contact
// ============================================================================

pub async fn contact(client: &ApiClient, command: ContactCommand) -> Result<()> {
    match command {
        ContactCommand::Show { patient_id } => {
            let contact = busy(
                "Loading contact...",
                client.patients().emergency_contact(patient_id).get(),
            )
            .await?;
            println!("{}", display::emergency_contact_table(&contact));
        },
        ContactCommand::Set {
            patient_id,
            name,
            phone,
            relationship,
        } => {
            let mut errors = FieldErrors::new();
            if name.trim().is_empty() {
                errors.insert("name", "Name is required");
            }
            if phone.trim().is_empty() {
                errors.insert("phone", "Phone number is required");
            }
            if relationship.trim().is_empty() {
                errors.insert("relationship", "Relationship is required");
            }
            errors.into_result()?;

            let request = NewEmergencyContact {
                name: name.trim().to_string(),
                phone_number: phone.trim().to_string(),
                relationship: relationship.trim().to_string(),
            };
            let contact = busy(
                "Saving contact...",
                client
                    .patients()
                    .emergency_contact(patient_id)
                    .create(&request),
            )
            .await?;
            println!("{} Emergency contact saved", "✓".green());
            println!("{}", display::emergency_contact_table(&contact));
        },
        ContactCommand::Update {
            patient_id,
            name,
            phone,
            relationship,
        } => {
            let request = EmergencyContactUpdate {
                name: non_blank(name.as_deref()),
                phone_number: non_blank(phone.as_deref()),
                relationship: non_blank(relationship.as_deref()),
            };
            if request.name.is_none()
                && request.phone_number.is_none()
                && request.relationship.is_none()
            {
                return Err(nothing_to_update().into());
            }

            let contact = busy(
                "Saving contact...",
                client
                    .patients()
                    .emergency_contact(patient_id)
                    .update(&request),
            )
            .await?;
            println!("{} Emergency contact updated", "✓".green());
            println!("{}", display::emergency_contact_table(&contact));
        },
        ContactCommand::Delete { patient_id, yes } => {
            if !confirm(
                &format!("Delete emergency contact for patient {}?", patient_id),
                yes,
            )? {
                println!("Cancelled.");
                return Ok(());
            }
            busy(
                "Deleting contact...",
                client.patients().emergency_contact(patient_id).delete(),
            )
            .await?;
            println!("{} Emergency contact deleted", "✓".green());
        },
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_update_requires_a_field() {
        let errors = patient_update(PatientChangesArgs::default()).unwrap_err();
        assert!(errors.contains("fields"));
    }

    #[test]
    fn test_patient_update_ignores_blank_values() {
        let args = PatientChangesArgs {
            phone: Some("555-0199".to_string()),
            email: Some("   ".to_string()),
            ..Default::default()
        };
        let update = patient_update(args).unwrap();
        assert_eq!(update.phone_number.as_deref(), Some("555-0199"));
        assert_eq!(update.email, None);
    }

    #[test]
    fn test_new_vitals_validation() {
        let args = VitalsArgs {
            temperature: 36.8,
            blood_pressure: " ".to_string(),
            heart_rate: 72,
            respiratory_rate: 16,
            weight: 0.0,
            height: 170.0,
        };
        let errors = new_vitals(args).unwrap_err();
        assert!(errors.contains("blood_pressure"));
        assert!(errors.contains("weight"));
        assert!(!errors.contains("height"));
    }

    #[test]
    fn test_vitals_update_requires_a_field() {
        assert!(vitals_update(VitalsChangesArgs::default()).is_err());

        let args = VitalsChangesArgs {
            heart_rate: Some(80),
            ..Default::default()
        };
        assert_eq!(vitals_update(args).unwrap().heart_rate, Some(80));
    }
}
