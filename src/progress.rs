//! Spinner display for long-running steps

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while waiting on the favicon service or the packaging tool
#[derive(Clone)]
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a spinner with an initial message
    pub fn new(message: impl Into<String>) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Replace the spinner message with the latest progress line
    pub fn update(&self, message: impl Into<String>) {
        self.pb.set_message(message.into());
    }

    /// Stop with a success message
    pub fn succeed(&self, message: impl Into<String>) {
        self.pb
            .finish_with_message(format!("{} {}", console::style("✔").green(), message.into()));
    }

    /// Stop with a warning message
    pub fn warn(&self, message: impl Into<String>) {
        self.pb.finish_with_message(format!(
            "{} {}",
            console::style("⚠").yellow(),
            message.into()
        ));
    }

    /// Stop with a failure message
    pub fn fail(&self, message: impl Into<String>) {
        self.pb
            .abandon_with_message(format!("{} {}", console::style("✖").red(), message.into()));
    }
}
