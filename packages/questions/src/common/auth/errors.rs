use thiserror::Error;

use super::QuestionAbility;
use crate::common::QuestionId;

/// Authorization errors for question access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Permission denied: cannot {ability} question {question_id}")]
    Forbidden {
        ability: QuestionAbility,
        question_id: QuestionId,
    },
}
