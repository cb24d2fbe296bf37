use std::rc::Rc;

use gloo_net::http::Request;
use thiserror::Error;
use yew::prelude::*;

use super::form::LeadForm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn is_pending(self) -> bool {
        self == SubmitStatus::Pending
    }

    /// Every error collapses into `Failed`.
    pub fn settle(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(_) => SubmitStatus::Failed,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode lead: {0}")]
    Encode(String),
    #[error("lead request failed: {0}")]
    Transport(String),
    #[error("lead endpoint answered with status {0}")]
    Rejected(u16),
}

pub fn check_response(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// Sends one lead to `endpoint`. No retry.
pub async fn post_lead(endpoint: &str, form: &LeadForm) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(form)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    check_response(response.ok(), response.status())
}

/// Lead form contents plus where its submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadSubmission {
    pub form: LeadForm,
    pub status: SubmitStatus,
}

pub enum LeadAction {
    FullName(String),
    Phone(String),
    Email(String),
    CanAttend(bool),
    Start,
    Finish(Result<(), SubmitError>),
}

impl LeadSubmission {
    pub fn can_submit(&self) -> bool {
        self.form.is_valid() && !self.status.is_pending()
    }
}

impl Reducible for LeadSubmission {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::FullName(value) => next.form.full_name = value,
            LeadAction::Phone(value) => next.form.phone = value,
            LeadAction::Email(value) => next.form.email = value,
            LeadAction::CanAttend(value) => next.form.can_attend = value,
            LeadAction::Start => {
                if !self.can_submit() {
                    return self;
                }
                next.status = SubmitStatus::Pending;
            }
            LeadAction::Finish(result) => {
                if !self.status.is_pending() {
                    return self;
                }
                // Either outcome is terminal and discards what was typed.
                next.status = SubmitStatus::settle(&result);
                next.form = LeadForm::default();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn valid() -> LeadForm {
        LeadForm {
            full_name: "Al".into(),
            phone: "12345678".into(),
            email: "a@b.co".into(),
            can_attend: true,
        }
    }

    fn ready() -> Rc<LeadSubmission> {
        Rc::new(LeadSubmission {
            form: valid(),
            status: SubmitStatus::Idle,
        })
    }

    async fn answer(ok: bool, status: u16) -> Result<(), SubmitError> {
        check_response(ok, status)
    }

    async fn unreachable_host() -> Result<(), SubmitError> {
        Err(SubmitError::Transport("connection refused".into()))
    }

    #[test]
    fn ok_response_succeeds_and_clears_the_form() {
        let pending = ready().reduce(LeadAction::Start);
        assert_eq!(pending.status, SubmitStatus::Pending);

        let done = pending.reduce(LeadAction::Finish(block_on(answer(true, 201))));
        assert_eq!(done.status, SubmitStatus::Succeeded);
        assert_eq!(done.form, LeadForm::default());
    }

    #[test]
    fn error_status_fails_and_discards_input() {
        let pending = ready().reduce(LeadAction::Start);
        let done = pending.reduce(LeadAction::Finish(block_on(answer(false, 500))));
        assert_eq!(done.status, SubmitStatus::Failed);
        assert_eq!(done.form, LeadForm::default());
    }

    #[test]
    fn network_error_fails() {
        let pending = ready().reduce(LeadAction::Start);
        let done = pending.reduce(LeadAction::Finish(block_on(unreachable_host())));
        assert_eq!(done.status, SubmitStatus::Failed);
        assert_eq!(done.form, LeadForm::default());
    }

    #[test]
    fn settle_has_two_outcomes() {
        assert_eq!(SubmitStatus::settle(&Ok(())), SubmitStatus::Succeeded);
        for err in [
            SubmitError::Encode("bad".into()),
            SubmitError::Transport("offline".into()),
            SubmitError::Rejected(404),
        ] {
            assert_eq!(SubmitStatus::settle(&Err(err)), SubmitStatus::Failed);
        }
    }

    #[test]
    fn pending_blocks_a_second_start() {
        let pending = ready().reduce(LeadAction::Start);
        assert!(!pending.can_submit());
        let again = pending.clone().reduce(LeadAction::Start);
        assert!(Rc::ptr_eq(&pending, &again));
    }

    #[test]
    fn invalid_form_cannot_start() {
        let state = Rc::new(LeadSubmission::default());
        let next = state.reduce(LeadAction::Start);
        assert_eq!(next.status, SubmitStatus::Idle);
    }

    #[test]
    fn failed_submission_needs_fresh_input() {
        let failed = ready()
            .reduce(LeadAction::Start)
            .reduce(LeadAction::Finish(Err(SubmitError::Rejected(502))));
        assert!(!failed.can_submit());
        assert_eq!(failed.clone().reduce(LeadAction::Start).status, SubmitStatus::Failed);

        let refilled = failed
            .reduce(LeadAction::FullName("Al".into()))
            .reduce(LeadAction::Phone("12345678".into()))
            .reduce(LeadAction::Email("a@b.co".into()))
            .reduce(LeadAction::CanAttend(true));
        assert_eq!(refilled.reduce(LeadAction::Start).status, SubmitStatus::Pending);
    }

    #[test]
    fn stray_finish_is_ignored() {
        let idle = ready();
        let next = idle.clone().reduce(LeadAction::Finish(Ok(())));
        assert_eq!(next.status, SubmitStatus::Idle);
    }

    #[test]
    fn edits_update_fields() {
        let state = Rc::new(LeadSubmission::default())
            .reduce(LeadAction::FullName("Dana Levi".into()))
            .reduce(LeadAction::Phone("0521234567".into()))
            .reduce(LeadAction::Email("dana@example.com".into()))
            .reduce(LeadAction::CanAttend(true));
        assert!(state.can_submit());
    }

    #[test]
    fn rejected_status_is_reported() {
        let err = check_response(false, 503).unwrap_err();
        assert_eq!(err.to_string(), "lead endpoint answered with status 503");
    }
}
