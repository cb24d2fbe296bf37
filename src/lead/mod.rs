mod form;
mod submit;

pub use submit::{post_lead, LeadAction, LeadSubmission, SubmitStatus};
