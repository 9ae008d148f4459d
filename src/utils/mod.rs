mod response_util;
mod str_util;

pub use response_util::*;
pub use str_util::*;
