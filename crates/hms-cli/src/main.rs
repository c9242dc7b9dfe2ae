//! HMS CLI - Main entry point

use clap::{CommandFactory, Parser};
use hms_cli::api::ApiClient;
use hms_cli::auth::{Credentials, SqliteStore};
use hms_cli::commands;
use hms_cli::config::Config;
use hms_cli::display::print_field_errors;
use hms_cli::{
    AppointmentCommand, CheckInCommand, Cli, Commands, ConfigCommand, DoctorCommand,
    PatientCommand, TokenCommand,
};
use hms_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use std::sync::Arc;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    if cli.command.is_none() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    // A .env file in the working directory may provide HMS_* and LOG_* values
    dotenvy::dotenv().ok();

    // Quiet by default; LOG_* variables take precedence over the flag
    let base = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("hms")
        .build();
    let log_config = LogConfig::from_env_with(base.clone()).unwrap_or(base);

    // The CLI works without logging
    let _log_guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e.user_message());
        if let Some(errors) = e.field_errors() {
            print_field_errors(errors);
        }
        process::exit(1);
    }
}

fn credentials(cli: &Cli, config: &Config) -> hms_cli::Result<Credentials> {
    if cli.no_persist {
        return Ok(Credentials::in_memory());
    }

    let store = SqliteStore::open(config.session_db_path()?)?;
    Ok(Credentials::new(Arc::new(store)))
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> hms_cli::Result<()> {
    let Some(ref command) = cli.command else {
        unreachable!("Command should have been validated in main");
    };

    let mut config = Config::from_env()?;
    if let Some(ref url) = cli.api_url {
        config = config.with_api_url(url.clone());
    }
    debug!(
        api_url = %config.api_url(),
        session_db = ?config.session_db,
        "Resolved configuration"
    );

    if let Commands::Config {
        command: ConfigCommand::Show,
    } = command
    {
        return commands::config::show(&config).await;
    }

    let credentials = credentials(cli, &config)?;

    if let Commands::Logout = command {
        return commands::logout::run(&credentials).await;
    }

    let client = ApiClient::from_config(&config, credentials)?;

    match command {
        Commands::Login { email, password } => {
            commands::login::run(&client, email.clone(), password.clone()).await
        },

        Commands::Register(args) => commands::register::run(&client, args.clone()).await,

        Commands::Token { command } => match command {
            TokenCommand::Refresh => commands::token::refresh(&client).await,
        },

        Commands::Status => commands::status::run(&client).await,

        Commands::Patients { command } => match command {
            PatientCommand::List => commands::patients::list(&client).await,
            PatientCommand::Show { id } => commands::patients::show(&client, *id).await,
            PatientCommand::Create(args) => {
                commands::patients::create(&client, args.clone()).await
            },
            PatientCommand::Update { id, changes } => {
                commands::patients::update(&client, *id, changes.clone()).await
            },
            PatientCommand::Delete { id, yes } => {
                commands::patients::delete(&client, *id, *yes).await
            },
            PatientCommand::Vitals { command } => {
                commands::patients::vitals(&client, command.clone()).await
            },
            PatientCommand::Records { command } => {
                commands::patients::records(&client, command.clone()).await
            },
            PatientCommand::Contact { command } => {
                commands::patients::contact(&client, command.clone()).await
            },
        },

        Commands::Doctors { command } => match command {
            DoctorCommand::List => commands::doctors::list(&client).await,
            DoctorCommand::Show { id } => commands::doctors::show(&client, *id).await,
            DoctorCommand::Create(args) => commands::doctors::create(&client, args.clone()).await,
            DoctorCommand::Update { id, changes } => {
                commands::doctors::update(&client, *id, changes.clone()).await
            },
            DoctorCommand::Delete { id, yes } => {
                commands::doctors::delete(&client, *id, *yes).await
            },
        },

        Commands::Appointments { command } => match command {
            AppointmentCommand::List => commands::appointments::list(&client).await,
            AppointmentCommand::Show { id } => commands::appointments::show(&client, *id).await,
            AppointmentCommand::Book(args) => {
                commands::appointments::book(&client, args.clone()).await
            },
            AppointmentCommand::Update {
                id,
                doctor,
                date,
                time,
                reason,
                completed,
            } => {
                commands::appointments::update(
                    &client,
                    *id,
                    *doctor,
                    *date,
                    time.clone(),
                    reason.clone(),
                    *completed,
                )
                .await
            },
            AppointmentCommand::Delete { id, yes } => {
                commands::appointments::delete(&client, *id, *yes).await
            },
        },

        Commands::CheckIns { command } => match command {
            CheckInCommand::List => commands::check_ins::list(&client).await,
            CheckInCommand::Show { id } => commands::check_ins::show(&client, *id).await,
            CheckInCommand::Create {
                patient,
                doctor,
                reason,
                status,
            } => {
                commands::check_ins::create(&client, *patient, *doctor, reason.clone(), *status)
                    .await
            },
            CheckInCommand::Update {
                id,
                doctor,
                reason,
                status,
                check_out,
            } => {
                commands::check_ins::update(
                    &client,
                    *id,
                    *doctor,
                    reason.clone(),
                    *status,
                    *check_out,
                )
                .await
            },
            CheckInCommand::Delete { id, yes } => {
                commands::check_ins::delete(&client, *id, *yes).await
            },
        },

        // Handled above without a client
        Commands::Logout | Commands::Config { .. } => Ok(()),
    }
}
