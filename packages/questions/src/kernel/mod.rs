// Infrastructure seams for the question domain
//
// Traits here are INFRASTRUCTURE only - no business logic. Deciding what to
// notify lives in domains/questions/machines.rs.

pub mod notification_store;

pub use notification_store::{InMemoryNotificationStore, NotificationStore};
