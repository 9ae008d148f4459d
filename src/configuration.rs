use crate::constant::{
    API_KEY_VAR, FROM_EMAIL_VAR, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT, TO_EMAIL_VAR,
};
use crate::domain::Mailbox;
use crate::error::BizErrorEnum;
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Mailbox, BizErrorEnum> {
        Mailbox::parse(self.sender_email.clone()).map_err(|e| {
            tracing::error!("Invalid sender email {:?}: {}", self.sender_email, e);
            BizErrorEnum::InvalidSenderEmail(e)
        })
    }

    pub fn recipient(&self) -> Result<Mailbox, BizErrorEnum> {
        Mailbox::parse(self.recipient_email.clone()).map_err(|e| {
            tracing::error!("Invalid recipient email {:?}: {}", self.recipient_email, e);
            BizErrorEnum::InvalidRecipientEmail(e)
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Layers, lowest priority first:
/// `base.yaml`, `{APP_ENVIRONMENT}.yaml`, `APP_*` variables
/// (e.g. `APP_APPLICATION__PORT`), then the provider variables
/// `RESEND_API_KEY`, `LEADS_FROM_EMAIL` and `LEADS_TO_EMAIL`.
pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("email_client.authorization_token", provider_var(API_KEY_VAR))
        .and_then(|builder| {
            builder.set_override_option("email_client.sender_email", provider_var(FROM_EMAIL_VAR))
        })
        .and_then(|builder| {
            builder.set_override_option("email_client.recipient_email", provider_var(TO_EMAIL_VAR))
        })
        .and_then(|builder| builder.build())
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;

    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// Blank values count as unset.
fn provider_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
