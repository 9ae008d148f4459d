//! The visitor-side half of lead intake: form state, validation and the
//! request to the intake endpoint.

mod client;
mod form;
mod state;

pub use client::LeadClient;
pub use form::LeadForm;
pub use state::{FormAction, FormState, SubmissionStatus, SubmitOutcome};
