use std::fmt::{Display, Formatter};

#[derive(Debug, thiserror::Error)]
pub enum InvalidReason {
    #[error("Address is empty")]
    AddressIsEmpty,
    #[error("Address missing @ symbol")]
    AddressMissingAtSymbol,
    #[error("Address missing subject")]
    AddressMissingSubject,
    #[error("Address missing domain")]
    AddressMissingDomain,
    #[error("Address's format is not correct")]
    AddressFormatWrong,
    #[error("Display name is not followed by a closed <address>")]
    UnclosedAngleBracket,
}

/// An address the service sends from or to, optionally carrying a display
/// name: `leads@getseat.ai` or `SeatAI Leads <onboarding@resend.dev>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    display_name: Option<String>,
    address: String,
}

impl Mailbox {
    pub fn parse(value: String) -> Result<Self, InvalidReason> {
        let value = value.trim();
        if value.is_empty() {
            return Err(InvalidReason::AddressIsEmpty);
        }

        let (display_name, address) = match value.rfind('<') {
            Some(open) => {
                let address = value[open + 1..]
                    .strip_suffix('>')
                    .ok_or(InvalidReason::UnclosedAngleBracket)?
                    .trim();
                let name = value[..open].trim().trim_matches('"').trim();
                let name = (!name.is_empty()).then(|| name.to_string());
                (name, address)
            }
            None => (None, value),
        };

        Self::check_address(address)?;
        Ok(Self {
            display_name,
            address: address.to_string(),
        })
    }

    fn check_address(address: &str) -> Result<(), InvalidReason> {
        if address.is_empty() {
            return Err(InvalidReason::AddressIsEmpty);
        }

        let (user, domain) = address
            .rsplit_once('@')
            .ok_or(InvalidReason::AddressMissingAtSymbol)?;
        if domain.is_empty() {
            return Err(InvalidReason::AddressMissingDomain);
        }
        if user.is_empty() {
            return Err(InvalidReason::AddressMissingSubject);
        }

        if !validator::validate_email(address) {
            return Err(InvalidReason::AddressFormatWrong);
        }
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    #[cfg(test)]
    pub(crate) fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => f.write_str(&self.address),
        }
    }
}
