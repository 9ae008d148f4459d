use crate::domain::lead_field::{FieldErrors, LeadField};
use crate::domain::phone;
use crate::utils;
use serde::{Deserialize, Serialize};

/// A visitor's contact details. Lives only for the duration of one
/// submission and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadSubmission {
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Company => &self.company,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    /// Runs every field predicate and collects all failures at once.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in LeadField::ALL {
            if !self.passes(field) {
                errors.flag(field);
            }
        }
        errors
    }

    fn passes(&self, field: LeadField) -> bool {
        match field {
            LeadField::Phone => phone::is_complete(&self.phone),
            other => !utils::is_blank(self.value(other)),
        }
    }

    /// The payload as it goes over the wire: phone reduced to digits.
    pub fn normalized(&self) -> Self {
        Self {
            phone: phone::digits_only(&self.phone),
            ..self.clone()
        }
    }
}
