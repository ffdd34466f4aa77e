//! Question access policy.
//!
//! Every check is a pure function of the viewer and a question snapshot.
//! Suppression (ignored or reported) overrides ownership and answer state.

use crate::common::{QuestionAbility, UserId};

use super::models::Question;

/// Visibility and moderation rules for questions
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionPolicy;

impl QuestionPolicy {
    /// Whether `viewer` may see `question`
    ///
    /// Answered questions are public. Unanswered ones are visible to their
    /// recipient only. Ignored or reported questions are visible to nobody.
    pub fn can_view(&self, viewer: Option<UserId>, question: &Question) -> bool {
        if question.is_suppressed() {
            return false;
        }

        question.is_answered() || question.is_owned_by(viewer)
    }

    /// Whether `viewer` may answer (or edit the answer of) `question`
    pub fn can_answer(&self, viewer: Option<UserId>, question: &Question) -> bool {
        question.is_owned_by(viewer) && !question.is_suppressed()
    }

    /// Whether `viewer` may ignore `question`
    pub fn can_ignore(&self, viewer: Option<UserId>, question: &Question) -> bool {
        question.is_owned_by(viewer)
    }

    /// Whether `viewer` may report `question`
    ///
    /// Recipients ignore instead of reporting.
    pub fn can_report(&self, viewer: Option<UserId>, question: &Question) -> bool {
        viewer.is_some() && !question.is_owned_by(viewer) && !question.is_reported
    }

    /// Dispatch on an ability
    pub fn allows(&self, ability: QuestionAbility, viewer: Option<UserId>, question: &Question) -> bool {
        match ability {
            QuestionAbility::View => self.can_view(viewer, question),
            QuestionAbility::Answer => self.can_answer(viewer, question),
            QuestionAbility::Ignore => self.can_ignore(viewer, question),
            QuestionAbility::Report => self.can_report(viewer, question),
        }
    }
}
