use crate::constant::EMAILS_PATH;
use crate::domain::Mailbox;
use crate::error::BizErrorEnum;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

/// Client for the transactional email provider's HTTP API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    sender: Mailbox,
    endpoint: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: Mailbox,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, BizErrorEnum> {
        let endpoint = Url::parse(&base_url)
            .map_err(|e| {
                tracing::error!("Failed to parse url: url={}, e={:?}", &base_url, e);
                BizErrorEnum::ParseUrlError(e.to_string())
            })?
            .join(EMAILS_PATH)
            .map_err(|e| {
                tracing::error!("Url failed to join {}: {:?}", EMAILS_PATH, e);
                BizErrorEnum::JoinUrlError(e.to_string())
            })?;
        let http_client = Client::builder()
            // a slow provider must not hold the request forever
            .timeout(timeout)
            .build()
            .map_err(BizErrorEnum::BuildHttpClientError)?;
        Ok(EmailClient {
            http_client,
            sender,
            endpoint,
            authorization_token,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &Mailbox,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let from = self.sender.to_string();
        let to = [recipient.to_string()];
        let request_body = SendEmailRequest {
            from: &from,
            to: &to,
            subject,
            html: html_content,
            text: text_content,
        };
        self.http_client
            .post(self.endpoint.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}
