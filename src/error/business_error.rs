use crate::domain::InvalidReason;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE CONFIGURED MAILBOXES
    #[error("Sender email is invalid: {0}")]
    InvalidSenderEmail(#[source] InvalidReason),

    #[error("Recipient email is invalid: {0}")]
    InvalidRecipientEmail(#[source] InvalidReason),

    // VALIDATE URL
    #[error("Url is incorrect: {0}")]
    ParseUrlError(String),

    #[error("Url join path error: {0}")]
    JoinUrlError(String),

    // STARTUP
    #[error("Failed to build an http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable: {0}")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
