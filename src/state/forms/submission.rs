//! Submission lifecycle state

use chrono::{DateTime, Local};

/// Effective phase derived from the submission flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Flags describing where the current submission stands.
///
/// Fields are private so `is_submitting` and `is_submitted` can never be set
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    is_submitting: bool,
    is_submitted: bool,
    error: Option<String>,
    submitted_at: Option<DateTime<Local>>,
}

impl SubmissionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn submitting() -> Self {
        Self {
            is_submitting: true,
            ..Self::default()
        }
    }

    pub fn succeeded(at: DateTime<Local>) -> Self {
        Self {
            is_submitted: true,
            submitted_at: Some(at),
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Local time the last successful submission completed
    pub fn submitted_at(&self) -> Option<DateTime<Local>> {
        self.submitted_at
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.is_submitting {
            SubmissionPhase::Submitting
        } else if self.is_submitted {
            SubmissionPhase::Succeeded
        } else if self.error.is_some() {
            SubmissionPhase::Failed
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Label for the send button
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}
