//! `hms check-ins` command implementation

use super::confirm;
use super::patients::nothing_to_update;
use crate::api::types::*;
use crate::api::ApiClient;
use crate::display;
use crate::error::Result;
use crate::forms::{non_blank, FieldErrors};
use crate::progress::busy;
use chrono::{DateTime, Utc};
use colored::Colorize;

pub async fn list(client: &ApiClient) -> Result<()> {
    let check_ins = busy("Loading check-ins...", client.check_ins().get_all()).await?;

    if check_ins.is_empty() {
        println!("No check-ins found.");
        return Ok(());
    }

    println!("{}", display::check_ins_table(&check_ins));
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let check_in = busy("Loading check-in...", client.check_ins().get_by_id(id)).await?;
    println!(
        "{}",
        display::check_ins_table(std::slice::from_ref(&check_in))
    );
    Ok(())
}

/// A new check-in starts now; `status` is sent as given
fn new_check_in(
    patient: i64,
    doctor: i64,
    reason: &str,
    status: bool,
    now: DateTime<Utc>,
) -> std::result::Result<NewCheckIn, FieldErrors> {
    let mut errors = FieldErrors::new();
    if reason.trim().is_empty() {
        errors.insert("reason", "Reason is required");
    }
    errors.into_result()?;

    Ok(NewCheckIn {
        patient,
        doctor,
        check_in_time: now,
        reason: reason.trim().to_string(),
        status,
    })
}

pub async fn create(
    client: &ApiClient,
    patient: i64,
    doctor: i64,
    reason: String,
    status: bool,
) -> Result<()> {
    let request = new_check_in(patient, doctor, &reason, status, Utc::now())?;
    let check_in = busy("Checking in...", client.check_ins().create(&request)).await?;
    println!(
        "{} Patient {} checked in (check-in {})",
        "✓".green(),
        check_in.patient,
        check_in.id
    );
    Ok(())
}

/// Checking out stamps the time; the status only changes when given
fn check_in_update(
    doctor: Option<i64>,
    reason: Option<String>,
    status: Option<bool>,
    check_out: bool,
    now: DateTime<Utc>,
) -> std::result::Result<CheckInUpdate, FieldErrors> {
    let update = CheckInUpdate {
        doctor,
        check_out_time: check_out.then_some(now),
        reason: non_blank(reason.as_deref()),
        status,
    };

    if update.doctor.is_none()
        && update.reason.is_none()
        && update.check_out_time.is_none()
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
    reason: Option<String>,
    status: Option<bool>,
    check_out: bool,
) -> Result<()> {
    let request = check_in_update(doctor, reason, status, check_out, Utc::now())?;
    let check_in = busy("Saving check-in...", client.check_ins().update(id, &request)).await?;

    if check_out {
        println!("{} Checked out (check-in {})", "✓".green(), check_in.id);
    } else {
        println!("{} Updated check-in {}", "✓".green(), check_in.id);
    }
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(&format!("Delete check-in {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    busy("Deleting check-in...", client.check_ins().delete(id)).await?;
    println!("{} Deleted check-in {}", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_check_in_forwards_status() {
        let request = new_check_in(5, 2, " Fever ", true, now()).unwrap();
        assert!(request.status);
        assert_eq!(request.reason, "Fever");
        assert_eq!(request.check_in_time, now());

        let request = new_check_in(5, 2, "Fever", false, now()).unwrap();
        assert!(!request.status);
    }

    #[test]
    fn test_new_check_in_requires_reason() {
        let errors = new_check_in(5, 2, "  ", true, now()).unwrap_err();
        assert!(errors.contains("reason"));
    }

    #[test]
    fn test_check_out_leaves_status_alone() {
        let update = check_in_update(None, None, None, true, now()).unwrap();
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json, serde_json::json!({"check_out_time": "2024-12-15T09:30:00Z"}));
    }

    #[test]
    fn test_update_forwards_given_status() {
        let update = check_in_update(None, None, Some(false), true, now()).unwrap();
        assert_eq!(update.status, Some(false));
        assert_eq!(update.check_out_time, Some(now()));
    }

    #[test]
    fn test_update_without_check_out_keeps_status() {
        let update = check_in_update(None, Some("Follow-up".into()), None, false, now()).unwrap();
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json, serde_json::json!({"reason": "Follow-up"}));
    }

    #[test]
    fn test_update_requires_a_field() {
        assert!(check_in_update(None, None, None, false, now()).is_err());
    }
}
