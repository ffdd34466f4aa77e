use tracing::debug;

use super::{AuthError, QuestionAbility};
use crate::common::entity_ids::UserId;
use crate::domains::questions::{Question, QuestionPolicy};

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::viewer(session.user_id())
///     .can(QuestionAbility::View)
///     .on(&question)
///     .check()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    viewer: Option<UserId>,
}

impl Actor {
    /// Create an actor for the current viewer
    ///
    /// # Arguments
    /// * `viewer` - The signed-in user, or `None` for an anonymous visitor
    pub fn viewer(viewer: Option<UserId>) -> Self {
        Self { viewer }
    }

    /// Create an actor for an anonymous visitor
    pub fn anonymous() -> Self {
        Self { viewer: None }
    }

    /// Specify what ability the actor needs
    pub fn can(self, ability: QuestionAbility) -> AbilityBuilder {
        AbilityBuilder {
            viewer: self.viewer,
            ability,
        }
    }
}

/// Builder after specifying ability
#[derive(Debug, Clone, Copy)]
pub struct AbilityBuilder {
    viewer: Option<UserId>,
    ability: QuestionAbility,
}

impl AbilityBuilder {
    /// Specify the question the ability applies to
    pub fn on(self, question: &Question) -> Authorization<'_> {
        Authorization {
            viewer: self.viewer,
            ability: self.ability,
            question,
        }
    }
}

/// A fully specified authorization request
#[derive(Debug, Clone, Copy)]
pub struct Authorization<'a> {
    viewer: Option<UserId>,
    ability: QuestionAbility,
    question: &'a Question,
}

impl Authorization<'_> {
    /// Evaluate the policy without building an error
    pub fn allowed(&self) -> bool {
        QuestionPolicy.allows(self.ability, self.viewer, self.question)
    }

    /// Perform the authorization check
    ///
    /// An anonymous viewer who is denied gets `AuthenticationRequired`, since
    /// signing in might change the outcome. A signed-in viewer gets `Forbidden`.
    pub fn check(self) -> Result<(), AuthError> {
        if self.allowed() {
            return Ok(());
        }

        debug!(
            question_id = %self.question.id,
            ability = %self.ability,
            anonymous = self.viewer.is_none(),
            "question access denied"
        );

        match self.viewer {
            None => Err(AuthError::AuthenticationRequired),
            Some(_) => Err(AuthError::Forbidden {
                ability: self.ability,
                question_id: self.question.id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_can_answer() {
        let owner = UserId::new();
        let question = Question::new(Some(UserId::new()), owner, "Favourite crate?");

        let result = Actor::viewer(Some(owner))
            .can(QuestionAbility::Answer)
            .on(&question)
            .check();

        assert!(result.is_ok());
    }

    #[test]
    fn test_anonymous_denied_requires_authentication() {
        let question = Question::new(None, UserId::new(), "Unanswered");

        let result = Actor::anonymous()
            .can(QuestionAbility::View)
            .on(&question)
            .check();

        assert_eq!(result, Err(AuthError::AuthenticationRequired));
    }

    #[test]
    fn test_signed_in_denied_is_forbidden() {
        let question = Question::new(None, UserId::new(), "Unanswered");

        let result = Actor::viewer(Some(UserId::new()))
            .can(QuestionAbility::View)
            .on(&question)
            .check();

        assert_eq!(
            result,
            Err(AuthError::Forbidden {
                ability: QuestionAbility::View,
                question_id: question.id,
            })
        );
    }

    #[test]
    fn test_allowed_matches_check() {
        let owner = UserId::new();
        let question = Question::new(None, owner, "Ignore me");

        let auth = Actor::viewer(Some(owner))
            .can(QuestionAbility::Ignore)
            .on(&question);

        assert!(auth.allowed());
        assert!(auth.check().is_ok());
    }
}
