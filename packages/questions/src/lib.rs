// Question Access & Notifications - Core
//
// Decides who may see a question and which notifications a question's
// lifecycle produces or retracts. Persistence, transport and HTTP live in the
// surrounding application and reach this crate through explicit calls.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
