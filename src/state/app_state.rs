//! Application state definitions

use std::time::{Duration, Instant};

/// Which part of the screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Form,
    Confirmation,
}

/// Lifecycle of one registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Waiting out the simulated latency; input is disabled
    Submitting,
    Confirmed,
}

/// Severity tag of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, lifetime: Duration) -> bool {
        self.shown_at.elapsed() >= lifetime
    }
}

/// Reset confirmation awaiting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingReset {
    /// true = "Reset" highlighted, false = "Cancel"
    pub selected_option: bool,
}

impl PendingReset {
    pub fn toggle(&mut self) {
        self.selected_option = !self.selected_option;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Section::default(), Section::Form);
        assert_eq!(SubmissionPhase::default(), SubmissionPhase::Editing);
        assert!(!PendingReset::default().selected_option);
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Saved", Severity::Info);
        assert!(!toast.is_expired(Duration::from_secs(3)));
        assert!(toast.is_expired(Duration::ZERO));
    }

    #[test]
    fn test_pending_reset_toggle() {
        let mut pending = PendingReset::default();
        pending.toggle();
        assert!(pending.selected_option);
        pending.toggle();
        assert!(!pending.selected_option);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Success.label(), "success");
        assert_eq!(Severity::Error.label(), "error");
        assert_eq!(Severity::Info.label(), "info");
    }
}
