use serde::{Deserialize, Serialize};

use super::models::{NotificationIntent, SuppressionEvent};
use crate::common::{QuestionId, UserId};

/// Question domain commands - intent for notification IO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum NotificationCommand {
    /// Persist and dispatch a notification
    Notify(NotificationIntent),

    /// Delete pending "new question" notifications
    Suppress(SuppressionEvent),
}

impl NotificationCommand {
    pub fn target(&self) -> UserId {
        match self {
            Self::Notify(intent) => intent.target,
            Self::Suppress(event) => event.target,
        }
    }

    pub fn question_id(&self) -> QuestionId {
        match self {
            Self::Notify(intent) => intent.question_id,
            Self::Suppress(event) => event.question_id,
        }
    }

    /// Dedup key for delivery. Suppressions are naturally idempotent and carry none.
    pub fn idempotency_key(&self) -> Option<String> {
        match self {
            Self::Notify(intent) => Some(intent.idempotency_key()),
            Self::Suppress(_) => None,
        }
    }
}

impl From<NotificationIntent> for NotificationCommand {
    fn from(intent: NotificationIntent) -> Self {
        Self::Notify(intent)
    }
}

impl From<SuppressionEvent> for NotificationCommand {
    fn from(event: SuppressionEvent) -> Self {
        Self::Suppress(event)
    }
}
