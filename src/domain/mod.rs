mod lead_email;
mod lead_field;
mod lead_submission;
mod mailbox;
pub mod phone;

pub use lead_email::LeadEmail;
pub use lead_field::{FieldErrors, LeadField};
pub use lead_submission::LeadSubmission;
pub use mailbox::{InvalidReason, Mailbox};
