//! Contact form submissions.
//!
//! Validation lives here; persistence is whatever [`SubmissionSink`] the
//! caller plugs in.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"))
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Failed to save submission: {0}")]
    Sink(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl ContactSubmission {
    /// Checks required fields, then the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        if !email_regex().is_match(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Where accepted submissions go, e.g. a database table.
pub trait SubmissionSink {
    fn store(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Logs submissions instead of storing them, for when no database is
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn store(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        log::info!(
            "contact form submission (no database configured): {} {} <{}>",
            submission.first_name,
            submission.last_name,
            submission.email
        );
        Ok(())
    }
}

/// Validates and stores a submission. Invalid submissions never reach the
/// sink.
pub fn submit(
    sink: &impl SubmissionSink,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    submission.validate()?;
    sink.store(submission)
}
