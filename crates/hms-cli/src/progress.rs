//! Busy indicators for in-flight requests
//!
//! A spinner is shown while a request runs and is cleared when its guard
//! drops, whether the request succeeded, failed, or the future was dropped.

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Clears its spinner on drop
pub struct BusyGuard {
    spinner: ProgressBar,
}

impl BusyGuard {
    pub fn start(message: &str) -> Self {
        Self {
            spinner: create_spinner(message),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}

/// Run `fut` with a spinner showing `message`
pub async fn busy<F, T>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let _guard = BusyGuard::start(message);
    fut.await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_busy_returns_inner_value() {
        let value = busy("Working...", async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_busy_clears_on_error() {
        let result: Result<(), &str> = busy("Working...", async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn test_guard_finishes_spinner() {
        let guard = BusyGuard::start("Saving...");
        let spinner = guard.spinner.clone();
        drop(guard);
        assert!(spinner.is_finished());
    }
}
