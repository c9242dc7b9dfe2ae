//! HMS Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared utilities for the HMS workspace.
//!
//! - **Error Handling**: the shared [`HmsError`] type
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//! - **Dates**: birth-date arithmetic and the date formats the backend speaks
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use hms_common::dates::age_on;
//!
//! let born = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
//! assert_eq!(age_on(born, today), 33);
//! ```

pub mod dates;
pub mod error;
pub mod logging;

pub use error::{HmsError, Result};
