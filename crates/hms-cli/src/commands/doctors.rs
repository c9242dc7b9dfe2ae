//! `hms doctors` command implementation

use super::confirm;
use super::patients::nothing_to_update;
use crate::api::types::*;
use crate::api::ApiClient;
use crate::display;
use crate::error::Result;
use crate::forms::{non_blank, FieldErrors};
use crate::progress::busy;
use crate::{DoctorChangesArgs, NewDoctorArgs};
use colored::Colorize;

pub async fn list(client: &ApiClient) -> Result<()> {
    let listing = busy("Loading doctors...", client.doctors().get_all()).await?;

    if listing.doctors.is_empty() {
        println!("No doctors found.");
        return Ok(());
    }

    println!("{}", display::doctors_table(&listing.doctors));
    println!("{} doctor(s)", listing.count);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let doctor = busy("Loading doctor...", client.doctors().get_by_id(id)).await?;
    println!("{}", display::doctors_table(std::slice::from_ref(&doctor)));
    Ok(())
}

pub async fn create(client: &ApiClient, args: NewDoctorArgs) -> Result<()> {
    let mut errors = FieldErrors::new();
    if args.first_name.trim().is_empty() {
        errors.insert("first_name", "First name is required");
    }
    if args.last_name.trim().is_empty() {
        errors.insert("last_name", "Last name is required");
    }
    if args.specialty.trim().is_empty() {
        errors.insert("specialty", "Specialty is required");
    }
    if args.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    }
    errors.into_result()?;

    let request = NewDoctor {
        first_name: args.first_name.trim().to_string(),
        last_name: args.last_name.trim().to_string(),
        date_of_birth: args.date_of_birth,
        specialty: args.specialty.trim().to_string(),
        gender: args.gender,
        phone_number: args.phone.trim().to_string(),
        email: non_blank(args.email.as_deref()),
    };

    let doctor = busy("Saving doctor...", client.doctors().create(&request)).await?;
    println!(
        "{} Created {} (id {})",
        "✓".green(),
        doctor.full_name().bold(),
        doctor.id
    );
    Ok(())
}

fn doctor_update(args: DoctorChangesArgs) -> std::result::Result<DoctorUpdate, FieldErrors> {
    let update = DoctorUpdate {
        first_name: non_blank(args.first_name.as_deref()),
        last_name: non_blank(args.last_name.as_deref()),
        date_of_birth: args.date_of_birth,
        specialty: non_blank(args.specialty.as_deref()),
        gender: args.gender,
        phone_number: non_blank(args.phone.as_deref()),
        email: non_blank(args.email.as_deref()),
    };

    let empty = update.first_name.is_none()
        && update.last_name.is_none()
        && update.date_of_birth.is_none()
        && update.specialty.is_none()
        && update.gender.is_none()
        && update.phone_number.is_none()
        && update.email.is_none();

    if empty {
        return Err(nothing_to_update());
    }

    Ok(update)
}

pub async fn update(client: &ApiClient, id: i64, changes: DoctorChangesArgs) -> Result<()> {
    let request = doctor_update(changes)?;
    let doctor = busy("Saving doctor...", client.doctors().update(id, &request)).await?;
    println!("{} Updated {}", "✓".green(), doctor.full_name().bold());
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(&format!("Delete doctor {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    busy("Deleting doctor...", client.doctors().delete(id)).await?;
    println!("{} Deleted doctor {}", "✓".green(), id);
    Ok(())
}
