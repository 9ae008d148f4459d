use crate::domain::LeadSubmission;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `POST /api/contact`.
///
/// Parsing is deliberately permissive: a missing, `null` or non-string field
/// becomes an empty string and never fails the request.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ContactData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
}

impl ContactData {
    /// A JSON `null` body counts as an empty object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let data: Option<ContactData> = serde_json::from_slice(body)?;
        Ok(data.unwrap_or_default())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

impl From<ContactData> for LeadSubmission {
    fn from(data: ContactData) -> Self {
        LeadSubmission {
            name: data.name,
            company: data.company,
            email: data.email,
            phone: data.phone,
            message: data.message,
        }
    }
}
