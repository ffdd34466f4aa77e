use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{NotificationId, QuestionId, UserId};

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Sent to the recipient when someone asks them a question
    QuestionCreated,
    /// Sent to the asker when the recipient answers
    QuestionAnswered,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuestionCreated => f.write_str("question_created"),
            Self::QuestionAnswered => f.write_str("question_answered"),
        }
    }
}

/// Request to notify a user, decoupled from delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationIntent {
    pub target: UserId,
    pub kind: NotificationKind,
    pub question_id: QuestionId,
}

impl NotificationIntent {
    pub fn question_created(target: UserId, question_id: QuestionId) -> Self {
        Self {
            target,
            kind: NotificationKind::QuestionCreated,
            question_id,
        }
    }

    pub fn question_answered(target: UserId, question_id: QuestionId) -> Self {
        Self {
            target,
            kind: NotificationKind::QuestionAnswered,
            question_id,
        }
    }

    /// Key for downstream dedup, stable across replays of the same transition
    pub fn idempotency_key(&self) -> String {
        format!("{}:{}", self.kind, self.question_id)
    }
}

/// Instruction to drop pending `QuestionCreated` notifications for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionEvent {
    pub target: UserId,
    pub question_id: QuestionId,
}

/// Notification row as kept by a notification store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient: UserId,
    pub kind: NotificationKind,
    pub question_id: QuestionId,
    pub idempotency_key: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Materialize an intent into a row
    pub fn from_intent(intent: &NotificationIntent) -> Self {
        Self {
            id: NotificationId::new(),
            recipient: intent.target,
            kind: intent.kind,
            question_id: intent.question_id,
            idempotency_key: intent.idempotency_key(),
            created_at: Utc::now(),
        }
    }

    /// Whether a suppression for this question removes this row
    pub fn is_suppressed_by(&self, event: &SuppressionEvent) -> bool {
        self.recipient == event.target
            && self.question_id == event.question_id
            && self.kind == NotificationKind::QuestionCreated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotency_key_depends_on_kind_and_question() {
        let question_id = QuestionId::new();
        let created = NotificationIntent::question_created(UserId::new(), question_id);
        let answered = NotificationIntent::question_answered(UserId::new(), question_id);

        assert_eq!(
            created.idempotency_key(),
            format!("question_created:{}", question_id)
        );
        assert_ne!(created.idempotency_key(), answered.idempotency_key());
    }

    #[test]
    fn test_suppression_only_matches_created_rows_for_the_question() {
        let recipient = UserId::new();
        let question_id = QuestionId::new();
        let event = SuppressionEvent {
            target: recipient,
            question_id,
        };

        let created =
            Notification::from_intent(&NotificationIntent::question_created(recipient, question_id));
        let answered =
            Notification::from_intent(&NotificationIntent::question_answered(recipient, question_id));
        let other = Notification::from_intent(&NotificationIntent::question_created(
            recipient,
            QuestionId::new(),
        ));

        assert!(created.is_suppressed_by(&event));
        assert!(!answered.is_suppressed_by(&event));
        assert!(!other.is_suppressed_by(&event));
    }
}
