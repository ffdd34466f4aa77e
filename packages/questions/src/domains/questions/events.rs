use serde::{Deserialize, Serialize};

use super::models::Question;
use crate::common::QuestionId;

/// Question domain events - FACT EVENTS ONLY
///
/// Each event is a committed transition reported by the question store.
/// Snapshots are taken after the write; `Updated` carries the snapshot from
/// immediately before it so the machine can see what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QuestionEvent {
    /// A question (or a shared update) was stored
    Created { question: Question },

    /// A stored question changed
    Updated { old: Question, new: Question },

    /// A question was removed
    Deleted { question: Question },
}

impl QuestionEvent {
    /// Build the event for a committed write
    ///
    /// No previous snapshot means the question was just created.
    pub fn transition(old: Option<Question>, new: Question) -> Self {
        match old {
            None => Self::Created { question: new },
            Some(old) => Self::Updated { old, new },
        }
    }

    pub fn question_id(&self) -> QuestionId {
        match self {
            Self::Created { question } | Self::Deleted { question } => question.id,
            Self::Updated { new, .. } => new.id,
        }
    }
}
