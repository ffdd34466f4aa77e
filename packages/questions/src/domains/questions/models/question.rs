use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{QuestionId, UserId};

/// Question snapshot - an immutable view of a question at one point in time
///
/// Relations (`from`, `to`) are resolved by the question store before the
/// snapshot reaches the policy or the notification machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Asker. `None` for questions asked by signed-out visitors.
    pub from: Option<UserId>,
    /// Recipient and owner of the question.
    pub to: UserId,
    pub content: String,
    /// `None` until the recipient answers.
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub is_ignored: bool,
    #[serde(default)]
    pub is_reported: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a fresh, unanswered question
    pub fn new(from: Option<UserId>, to: UserId, content: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            from,
            to,
            content: content.into(),
            answer: None,
            is_ignored: false,
            is_reported: false,
            views: 0,
            answered_at: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the recipient has answered
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Ignored or reported questions are hidden from everyone, owner included
    pub fn is_suppressed(&self) -> bool {
        self.is_ignored || self.is_reported
    }

    /// A question a user asked themselves is an update shared on their own
    /// profile rather than a direct question
    pub fn is_shared_update(&self) -> bool {
        self.from == Some(self.to)
    }

    /// Whether `user` is the recipient of this question
    pub fn is_owned_by(&self, user: Option<UserId>) -> bool {
        user == Some(self.to)
    }

    // =========================================================================
    // Transitions (produce the next snapshot)
    // =========================================================================

    /// Record the recipient's answer
    pub fn answered(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self.answered_at = Some(Utc::now());
        self
    }

    pub fn ignored(mut self) -> Self {
        self.is_ignored = true;
        self
    }

    pub fn reported(mut self) -> Self {
        self.is_reported = true;
        self
    }

    /// Count one more view
    pub fn viewed(mut self) -> Self {
        self.views = self.views.saturating_add(1);
        self
    }
}
