use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static email pattern"));

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 8;

/// What keeps a lead form from being submitted.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldIssue {
    #[error("full name needs at least 2 characters")]
    NameTooShort,
    #[error("phone needs at least 8 characters")]
    PhoneTooShort,
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("attendance was not confirmed")]
    AttendanceUnconfirmed,
}

/// Body of the lead request, sent as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub can_attend: bool,
}

impl LeadForm {
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.full_name.trim().chars().count() < MIN_NAME_CHARS {
            issues.push(FieldIssue::NameTooShort);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_CHARS {
            issues.push(FieldIssue::PhoneTooShort);
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            issues.push(FieldIssue::InvalidEmail);
        }
        if !self.can_attend {
            issues.push(FieldIssue::AttendanceUnconfirmed);
        }
        issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }
}
