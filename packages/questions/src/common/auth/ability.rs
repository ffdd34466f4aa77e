use serde::{Deserialize, Serialize};
use std::fmt;

/// Abilities a viewer can request on a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionAbility {
    /// See the question (and its answer, if any)
    View,

    /// Answer the question (the recipient only)
    Answer,

    /// Hide the question from the recipient's inbox
    Ignore,

    /// Flag the question for moderation
    Report,
}

impl fmt::Display for QuestionAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::View => "view",
            Self::Answer => "answer",
            Self::Ignore => "ignore",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}
