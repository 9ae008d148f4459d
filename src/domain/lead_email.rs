use crate::constant::{BLANK_PLACEHOLDER, SUBJECT_PREFIX};
use crate::domain::{LeadField, LeadSubmission};
use crate::utils;

/// The message the operator receives for one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl LeadEmail {
    pub fn compose(lead: &LeadSubmission) -> Self {
        let subject = if utils::is_blank(&lead.company) {
            SUBJECT_PREFIX.to_string()
        } else {
            format!("{} — {}", SUBJECT_PREFIX, lead.company.trim())
        };

        let mut html = String::from("<h2>New Lead</h2>\n");
        let mut text = String::new();
        for field in LeadField::ALL {
            let value = or_placeholder(lead.value(field));
            let escaped = htmlescape::encode_minimal(value);
            match field {
                LeadField::Message => html.push_str(&format!(
                    "<p><strong>{}:</strong><br/>{}</p>\n",
                    field.label(),
                    escaped.replace('\n', "<br/>")
                )),
                _ => html.push_str(&format!(
                    "<p><strong>{}:</strong> {}</p>\n",
                    field.label(),
                    escaped
                )),
            }
            text.push_str(&format!("{}: {}\n", field.label(), value));
        }

        Self {
            subject,
            html,
            text: text.trim_end().to_string(),
        }
    }
}

fn or_placeholder(value: &str) -> &str {
    if utils::is_blank(value) {
        BLANK_PLACEHOLDER
    } else {
        value
    }
}
