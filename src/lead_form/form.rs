use crate::domain::{FieldErrors, LeadSubmission};
use crate::lead_form::{FormAction, FormState, LeadClient, SubmissionStatus, SubmitOutcome};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One lead form instance.
///
/// Methods take `&self` so the form can be shared between the task driving
/// the UI and the one awaiting the request. The state lock is never held
/// across an `.await`.
#[derive(Debug, Default)]
pub struct LeadForm {
    state: Mutex<FormState>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // FormState has no invariant a panicking holder could break halfway
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn dispatch(&self, action: FormAction) {
        self.state().apply(action);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.state().errors.clone()
    }

    pub fn submission(&self) -> LeadSubmission {
        self.state().submission.clone()
    }

    /// Validates and posts the lead at most once per call.
    ///
    /// A call made while another is in flight, or after the lead was sent,
    /// returns immediately without touching the network.
    #[tracing::instrument(name = "Submitting the lead form", skip(self, client))]
    pub async fn submit(&self, client: &LeadClient) -> SubmitOutcome {
        let begin = self.state().begin_submit();
        let lead = match begin {
            Ok(lead) => lead,
            Err(outcome) => {
                tracing::debug!("Submit short-circuited: {:?}", outcome);
                return outcome;
            }
        };

        let mut pending = PendingSubmit {
            form: self,
            finished: false,
        };
        let result = client.post_lead(&lead).await;
        pending.finished = true;
        self.state().finish_submit(result)
    }
}

/// Lives across the request. Dropped unfinished means the caller gave up on
/// the future, and the form must not stay in `Sending`.
struct PendingSubmit<'a> {
    form: &'a LeadForm,
    finished: bool,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("Lead submission was cancelled before it completed");
            self.form.state().abandon_submit();
        }
    }
}
