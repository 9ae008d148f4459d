use crate::domain::{LeadEmail, LeadSubmission, Mailbox};
use crate::email_client::EmailClient;
use crate::error::ContactError;
use crate::request::ContactData;
use crate::startup::LeadRecipient;
use crate::{telemetry, utils};
use actix_web::{web, HttpResponse};
use anyhow::Context;

/// Turns one lead into one email to the operator.
///
/// No server-side validation happens here: whatever arrives is forwarded,
/// blank fields and all.
#[tracing::instrument(
    name = "Submitting a new lead",
    skip(body, email_client, recipient),
    fields(lead_company = tracing::field::Empty)
)]
pub async fn submit_lead(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<LeadRecipient>,
) -> Result<HttpResponse, ContactError> {
    let lead: LeadSubmission = ContactData::from_slice(&body)
        .map_err(|e| {
            tracing::error!("Failed to parse lead submission: {:?}", e);
            ContactError::Parse(e)
        })?
        .into();
    telemetry::record_field("lead_company", &lead.company);

    let email = LeadEmail::compose(&lead);
    send_lead_email(&email_client, &recipient.0, &email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to deliver lead email: {:?}", e);
            e
        })
        .context("Failed to deliver the lead email.")?;

    Ok(utils::ok_json())
}

#[tracing::instrument(
    name = "Send a lead email to the operator",
    skip(email_client, recipient, email),
    fields(recipient = %recipient.address())
)]
async fn send_lead_email(
    email_client: &EmailClient,
    recipient: &Mailbox,
    email: &LeadEmail,
) -> Result<(), reqwest::Error> {
    email_client
        .send_email(recipient, &email.subject, &email.html, &email.text)
        .await
}
