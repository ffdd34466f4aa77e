use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::common::UserId;
use crate::domains::questions::models::{Notification, NotificationIntent, SuppressionEvent};

// =============================================================================
// Notification store trait (Infrastructure - persistence + delivery)
// =============================================================================

#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist a notification for its target
    ///
    /// Returns `false` when the store already holds a notification with the
    /// same idempotency key for that user and dropped this one.
    async fn deliver(&self, intent: &NotificationIntent) -> Result<bool>;

    /// Delete pending "new question" notifications matching `(target, question_id)`
    ///
    /// Returns how many rows were removed.
    async fn suppress(&self, event: &SuppressionEvent) -> Result<usize>;

    /// All notifications for a user, newest first
    async fn notifications_for(&self, user: UserId) -> Result<Vec<Notification>>;
}

// =============================================================================
// In-memory implementation
// =============================================================================

/// Notification store backed by a sharded in-process map
///
/// With dedup on, delivery is insert-or-ignore on `(recipient, idempotency_key)`.
#[derive(Debug)]
pub struct InMemoryNotificationStore {
    rows: DashMap<UserId, Vec<Notification>>,
    dedupe: bool,
}

impl InMemoryNotificationStore {
    pub fn new(dedupe: bool) -> Self {
        Self {
            rows: DashMap::new(),
            dedupe,
        }
    }

    /// Users with a map entry, empty or not
    pub fn tracked_users(&self) -> usize {
        self.rows.len()
    }

    /// Total rows across all users
    pub fn len(&self) -> usize {
        self.rows.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Users holding at least one notification
    pub fn recipients(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self
            .rows
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| *entry.key())
            .collect();
        users.sort();
        users
    }
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn deliver(&self, intent: &NotificationIntent) -> Result<bool> {
        let notification = Notification::from_intent(intent);
        let mut rows = self.rows.entry(intent.target).or_default();

        if self.dedupe
            && rows
                .iter()
                .any(|row| row.idempotency_key == notification.idempotency_key)
        {
            debug!(
                recipient = %intent.target,
                key = %notification.idempotency_key,
                "Duplicate notification dropped"
            );
            return Ok(false);
        }

        rows.push(notification);
        Ok(true)
    }

    async fn suppress(&self, event: &SuppressionEvent) -> Result<usize> {
        let Some(mut rows) = self.rows.get_mut(&event.target) else {
            return Ok(0);
        };

        let before = rows.len();
        rows.retain(|row| !row.is_suppressed_by(event));
        let removed = before - rows.len();
        let emptied = rows.is_empty();
        // guard must go before touching the shard again
        drop(rows);

        if emptied {
            self.rows.remove_if(&event.target, |_, rows| rows.is_empty());
        }
        Ok(removed)
    }

    async fn notifications_for(&self, user: UserId) -> Result<Vec<Notification>> {
        let mut rows = self
            .rows
            .get(&user)
            .map(|rows| rows.value().clone())
            .unwrap_or_default();
        rows.reverse();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::QuestionId;
    use crate::domains::questions::models::NotificationKind;

    #[tokio::test]
    async fn test_dedupe_drops_repeated_intent() {
        let store = InMemoryNotificationStore::new(true);
        let intent = NotificationIntent::question_created(UserId::new(), QuestionId::new());

        assert!(store.deliver(&intent).await.unwrap());
        assert!(!store.deliver(&intent).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_default_store_dedupes() {
        let store = InMemoryNotificationStore::default();
        let intent = NotificationIntent::question_answered(UserId::new(), QuestionId::new());

        assert!(store.deliver(&intent).await.unwrap());
        assert!(!store.deliver(&intent).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_suppress_drops_emptied_recipient() {
        let store = InMemoryNotificationStore::new(true);
        let user = UserId::new();
        let question_id = QuestionId::new();

        store
            .deliver(&NotificationIntent::question_created(user, question_id))
            .await
            .unwrap();
        assert_eq!(store.tracked_users(), 1);

        let removed = store
            .suppress(&SuppressionEvent {
                target: user,
                question_id,
            })
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.tracked_users(), 0);
        assert!(store.recipients().is_empty());
        assert!(store.notifications_for(user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_without_dedupe_every_delivery_is_stored() {
        let store = InMemoryNotificationStore::new(false);
        let intent = NotificationIntent::question_created(UserId::new(), QuestionId::new());

        assert!(store.deliver(&intent).await.unwrap());
        assert!(store.deliver(&intent).await.unwrap());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_suppress_removes_only_pending_created_rows() {
        let store = InMemoryNotificationStore::new(true);
        let user = UserId::new();
        let question_id = QuestionId::new();
        let other_question = QuestionId::new();

        store
            .deliver(&NotificationIntent::question_created(user, question_id))
            .await
            .unwrap();
        store
            .deliver(&NotificationIntent::question_answered(user, question_id))
            .await
            .unwrap();
        store
            .deliver(&NotificationIntent::question_created(user, other_question))
            .await
            .unwrap();

        let removed = store
            .suppress(&SuppressionEvent {
                target: user,
                question_id,
            })
            .await
            .unwrap();

        assert_eq!(removed, 1);
        let remaining = store.notifications_for(user).await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|row| {
            row.question_id == other_question || row.kind == NotificationKind::QuestionAnswered
        }));
    }

    #[tokio::test]
    async fn test_suppress_for_unknown_user_is_zero() {
        let store = InMemoryNotificationStore::new(true);

        let removed = store
            .suppress(&SuppressionEvent {
                target: UserId::new(),
                question_id: QuestionId::new(),
            })
            .await
            .unwrap();

        assert_eq!(removed, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_notifications_newest_first() {
        let store = InMemoryNotificationStore::new(true);
        let user = UserId::new();
        let first = QuestionId::new();
        let second = QuestionId::new();

        store
            .deliver(&NotificationIntent::question_created(user, first))
            .await
            .unwrap();
        store
            .deliver(&NotificationIntent::question_created(user, second))
            .await
            .unwrap();

        let rows = store.notifications_for(user).await.unwrap();
        assert_eq!(rows[0].question_id, second);
        assert_eq!(rows[1].question_id, first);
        assert_eq!(store.recipients(), vec![user]);
    }
}
