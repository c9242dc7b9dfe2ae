//! HMS Client Library
//!
//! Command-line client for a hospital management backend.
//!
//! # Overview
//!
//! - **API client**: typed operations for patients, doctors, appointments,
//!   check-ins and the per-patient vitals, records and emergency contact
//!   ([`api::ApiClient`])
//! - **Session**: access/refresh token persistence ([`auth::Credentials`])
//! - **Forms**: field-level validation before any request ([`forms`])
//! - **Commands**: the `hms` workflows built on the above ([`commands`])
//!
//! # Example
//!
//! ```no_run
//! use hms_cli::api::ApiClient;
//! use hms_cli::auth::Credentials;
//!
//! # async fn run() -> hms_cli::Result<()> {
//! let client = ApiClient::new("http://localhost:8000", Credentials::in_memory())?;
//! let listing = client.patients().get_all().await?;
//! println!("{} patients", listing.count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod progress;

pub use error::{ClientError, Result};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// HMS - hospital management client
#[derive(Parser, Debug)]
#[command(name = "hms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (defaults to HMS_API_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Keep the session in memory only (nothing is read from or written to disk)
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Print the full command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session tokens
    Login {
        /// Account email
        #[arg(short, long)]
        email: Option<String>,

        /// Account password (prompted when omitted on a terminal)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session tokens
    Logout,

    /// Create an account
    Register(RegisterArgs),

    /// Session token management
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },

    /// Show server reachability and session state
    Status,

    /// Patient records
    Patients {
        #[command(subcommand)]
        command: PatientCommand,
    },

    /// Doctor records
    Doctors {
        #[command(subcommand)]
        command: DoctorCommand,
    },

    /// Appointments
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommand,
    },

    /// Patient check-ins
    #[command(name = "check-ins")]
    CheckIns {
        #[command(subcommand)]
        command: CheckInCommand,
    },

    /// Client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Prompted (with confirmation) when omitted on a terminal
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Exchange the stored refresh token for a new access token
    Refresh,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,
}

// ============================================================================
// Patients
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum PatientCommand {
    /// List all patients
    List,

    /// Show one patient
    Show { id: i64 },

    /// Register a new patient
    Create(NewPatientArgs),

    /// Change some of a patient's details
    Update {
        id: i64,

        #[command(flatten)]
        changes: PatientChangesArgs,
    },

    /// Delete a patient
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// A patient's vitals
    Vitals {
        #[command(subcommand)]
        command: VitalsCommand,
    },

    /// A patient's medical records
    Records {
        #[command(subcommand)]
        command: RecordCommand,
    },

    /// A patient's emergency contact
    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NewPatientArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: NaiveDate,

    /// Male or Female
    #[arg(long)]
    pub gender: api::Gender,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatientChangesArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,

    #[arg(long)]
    pub gender: Option<api::Gender>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VitalsCommand {
    Show {
        patient_id: i64,
    },

    /// Record a full set of vitals
    Record {
        patient_id: i64,

        #[command(flatten)]
        vitals: VitalsArgs,
    },

    Update {
        patient_id: i64,

        #[command(flatten)]
        changes: VitalsChangesArgs,
    },

    Delete {
        patient_id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct VitalsArgs {
    /// Celsius
    #[arg(long)]
    pub temperature: f64,

    /// e.g. 120/80
    #[arg(long)]
    pub blood_pressure: String,

    #[arg(long)]
    pub heart_rate: u32,

    #[arg(long)]
    pub respiratory_rate: u32,

    /// Kilograms
    #[arg(long)]
    pub weight: f64,

    /// Centimetres
    #[arg(long)]
    pub height: f64,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VitalsChangesArgs {
    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub blood_pressure: Option<String>,

    #[arg(long)]
    pub heart_rate: Option<u32>,

    #[arg(long)]
    pub respiratory_rate: Option<u32>,

    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecordCommand {
    List {
        patient_id: i64,
    },

    Show {
        patient_id: i64,
        record_id: i64,
    },

    Add {
        patient_id: i64,

        #[arg(long)]
        doctor: i64,

        #[arg(long)]
        reason: String,

        #[arg(long)]
        diagnosis: String,
    },

    Update {
        patient_id: i64,
        record_id: i64,

        #[arg(long)]
        doctor: Option<i64>,

        #[arg(long)]
        reason: Option<String>,

        #[arg(long)]
        diagnosis: Option<String>,
    },

    Delete {
        patient_id: i64,
        record_id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ContactCommand {
    Show {
        patient_id: i64,
    },

    /// Create the emergency contact
    Set {
        patient_id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        relationship: String,
    },

    Update {
        patient_id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        relationship: Option<String>,
    },

    Delete {
        patient_id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}

// ============================================================================
// Doctors
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum DoctorCommand {
    List,

    Show { id: i64 },

    Create(NewDoctorArgs),

    Update {
        id: i64,

        #[command(flatten)]
        changes: DoctorChangesArgs,
    },

    Delete {
        id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NewDoctorArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: NaiveDate,

    #[arg(long)]
    pub specialty: String,

    #[arg(long)]
    pub gender: api::Gender,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DoctorChangesArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,

    #[arg(long)]
    pub specialty: Option<String>,

    #[arg(long)]
    pub gender: Option<api::Gender>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

// ============================================================================
// Appointments and check-ins
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum AppointmentCommand {
    List,

    Show { id: i64 },

    /// Book an appointment (missing patient/doctor are picked interactively)
    Book(BookArgs),

    Update {
        id: i64,

        #[arg(long)]
        doctor: Option<i64>,

        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,

        /// HH:MM
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        reason: Option<String>,

        /// Mark completed (true) or scheduled (false)
        #[arg(long)]
        completed: Option<bool>,
    },

    Delete {
        id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct BookArgs {
    #[arg(long)]
    pub patient: Option<i64>,

    #[arg(long)]
    pub doctor: Option<i64>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// HH:MM
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CheckInCommand {
    List,

    Show { id: i64 },

    /// Check a patient in now
    Create {
        #[arg(long)]
        patient: i64,

        #[arg(long)]
        doctor: i64,

        #[arg(long)]
        reason: String,

        /// Status flag sent to the server as given (true or false)
        #[arg(long, action = clap::ArgAction::Set)]
        status: bool,
    },

    Update {
        id: i64,

        #[arg(long)]
        doctor: Option<i64>,

        #[arg(long)]
        reason: Option<String>,

        /// Status flag sent to the server as given (true or false)
        #[arg(long)]
        status: Option<bool>,

        /// Set the check-out time to now
        #[arg(long)]
        check_out: bool,
    },

    Delete {
        id: i64,

        #[arg(short, long)]
        yes: bool,
    },
}
