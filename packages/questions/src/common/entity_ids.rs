//! Typed ID definitions for the question domain.

pub use super::id::Id;

/// Marker type for User entities (askers, recipients, viewers).
pub struct User;

/// Marker type for Question entities.
pub struct Question;

/// Marker type for stored Notification rows.
pub struct Notification;

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Question entities.
pub type QuestionId = Id<Question>;

/// Typed ID for Notification rows.
pub type NotificationId = Id<Notification>;
