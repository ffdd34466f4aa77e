// Common types shared across the question domain

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod machine;

pub use auth::{Actor, AuthError, QuestionAbility};
pub use entity_ids::*;
pub use id::Id;
pub use machine::Machine;
