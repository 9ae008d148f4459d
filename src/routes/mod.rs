mod contact;
mod health_check;

// re-export
pub use contact::*;
pub use health_check::*;
