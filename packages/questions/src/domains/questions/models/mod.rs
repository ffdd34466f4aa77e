pub mod notification;
pub mod question;

pub use notification::*;
pub use question::*;
