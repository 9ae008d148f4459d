mod contact_data;
mod envelope;

pub use contact_data::ContactData;
pub use envelope::*;
