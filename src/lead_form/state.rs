use crate::domain::{phone, FieldErrors, LeadSubmission};
use crate::constant::FALLBACK_MESSAGE;
use crate::error::SubmitError;

/// Where one form instance is in its submission lifecycle.
///
/// `Idle -> Sending -> {Sent | Error}`; `Error` may go back to `Sending`,
/// `Sent` is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Sent => "sent",
            SubmissionStatus::Error(_) => "error",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionStatus::Sending => "Sending…",
            SubmissionStatus::Sent => "Submitted",
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => "Submit",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Named field updates. Each replaces the whole field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetCompany(String),
    SetEmail(String),
    /// Raw keystroke input; stored with the phone mask applied.
    SetPhone(String),
    SetMessage(String),
}

/// What a call to submit ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
    Invalid(FieldErrors),
    /// A submission is already on the wire; nothing was sent.
    InFlight,
    /// The form was already submitted; nothing was sent.
    AlreadySent,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub submission: LeadSubmission,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        let lead = &mut self.submission;
        match action {
            FormAction::SetName(value) => lead.name = value,
            FormAction::SetCompany(value) => lead.company = value,
            FormAction::SetEmail(value) => lead.email = value,
            FormAction::SetPhone(value) => lead.phone = phone::format_phone(&value),
            FormAction::SetMessage(value) => lead.message = value,
        }
    }

    /// Validates and moves to `Sending`, handing back the lead to post.
    /// Refuses while a request is in flight or once the lead was sent.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitOutcome> {
        match self.status {
            SubmissionStatus::Sending => return Err(SubmitOutcome::InFlight),
            SubmissionStatus::Sent => return Err(SubmitOutcome::AlreadySent),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => {}
        }

        self.errors = self.submission.validate();
        if !self.errors.is_empty() {
            return Err(SubmitOutcome::Invalid(self.errors.clone()));
        }

        self.status = SubmissionStatus::Sending;
        Ok(self.submission.clone())
    }

    /// The request was dropped before it finished: count it as a failure so
    /// the visitor can try again.
    pub fn abandon_submit(&mut self) {
        if self.status == SubmissionStatus::Sending {
            self.status = SubmissionStatus::Error(FALLBACK_MESSAGE.to_string());
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                SubmitOutcome::Sent
            }
            Err(e) => {
                let message = e.to_string();
                self.status = SubmissionStatus::Error(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
