//! Question domain: visibility policy and lifecycle notifications.

pub mod commands;
pub mod effects;
pub mod events;
pub mod lifecycle;
pub mod machines;
pub mod models;
pub mod policy;
pub mod replay;

// Re-export commonly used types
pub use commands::NotificationCommand;
pub use effects::{NotificationEffect, NotificationOutcome};
pub use events::QuestionEvent;
pub use lifecycle::QuestionLifecycle;
pub use machines::QuestionNotificationMachine;
pub use models::{
    Notification, NotificationIntent, NotificationKind, Question, SuppressionEvent,
};
pub use policy::QuestionPolicy;
