use crate::constant::{CLIENT_TIMEOUT_SECS, CONTACT_PATH, FALLBACK_MESSAGE};
use crate::domain::LeadSubmission;
use crate::error::{BizErrorEnum, SubmitError};
use crate::request::ServerReply;
use reqwest::{Client, Url};
use std::time::Duration;

/// Posts leads to the intake endpoint.
#[derive(Debug, Clone)]
pub struct LeadClient {
    http_client: Client,
    endpoint: Url,
}

impl LeadClient {
    pub fn new(base_url: &str) -> Result<Self, BizErrorEnum> {
        Self::with_timeout(base_url, Duration::from_secs(CLIENT_TIMEOUT_SECS))
    }

    /// Once `timeout` elapses the request is abandoned and reported as a
    /// transport failure, whatever the server ends up doing with it.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, BizErrorEnum> {
        let endpoint = Url::parse(base_url)
            .map_err(|e| {
                tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
                BizErrorEnum::ParseUrlError(e.to_string())
            })?
            .join(CONTACT_PATH)
            .map_err(|e| {
                tracing::error!("Url failed to join {}: {:?}", CONTACT_PATH, e);
                BizErrorEnum::JoinUrlError(e.to_string())
            })?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BizErrorEnum::BuildHttpClientError)?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    #[cfg(test)]
    pub(crate) fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends the lead once, with the phone reduced to digits.
    #[tracing::instrument(name = "Posting a lead to the intake endpoint", skip(self, lead))]
    pub async fn post_lead(&self, lead: &LeadSubmission) -> Result<(), SubmitError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&lead.normalized())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Lead request did not complete: {:?}", e);
                SubmitError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read the intake response: {:?}", e);
            SubmitError::Transport(e)
        })?;
        let reply = ServerReply::from_slice(&body);

        if !status.is_success() {
            tracing::warn!("Intake endpoint answered {}", status);
            let message = reply
                .error_message()
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        if reply.marks_failure() {
            tracing::warn!("Intake endpoint reported a failure with status {}", status);
            let message = reply
                .error_message()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(SubmitError::Failed(message));
        }

        Ok(())
    }
}
