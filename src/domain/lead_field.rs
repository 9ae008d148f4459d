use crate::constant::REQUIRED;
use std::collections::BTreeSet;

/// The five fields of the lead form, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Company,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Message,
    ];

    /// Key used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Company => "company",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
        }
    }

    /// Human label, used by the form placeholders and the operator email.
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Company => "Company",
            LeadField::Email => "Email",
            LeadField::Phone => "Phone",
            LeadField::Message => "Message",
        }
    }
}

/// Per-field error flags produced by a full validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeSet<LeadField>);

impl FieldErrors {
    pub fn flag(&mut self, field: LeadField) {
        self.0.insert(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: LeadField) -> bool {
        self.0.contains(&field)
    }

    /// The indicator rendered under a failing field.
    pub fn message(&self, field: LeadField) -> Option<&'static str> {
        self.contains(field).then_some(REQUIRED)
    }

    pub fn iter(&self) -> impl Iterator<Item = LeadField> + '_ {
        self.0.iter().copied()
    }
}
