//! Test fixtures for building question snapshots and lifecycles.

#![allow(dead_code)]

use std::sync::Arc;

use questions_core::common::UserId;
use questions_core::domains::questions::{Question, QuestionLifecycle};
use questions_core::kernel::InMemoryNotificationStore;

/// Asker, recipient and a bystander
pub struct Cast {
    pub asker: UserId,
    pub recipient: UserId,
    pub stranger: UserId,
}

impl Cast {
    pub fn new() -> Self {
        Self {
            asker: UserId::new(),
            recipient: UserId::new(),
            stranger: UserId::new(),
        }
    }

    /// Question from `asker` to `recipient`
    pub fn question(&self) -> Question {
        Question::new(Some(self.asker), self.recipient, "What are you working on?")
    }

    /// Question from a signed-out visitor to `recipient`
    pub fn anonymous_question(&self) -> Question {
        Question::new(None, self.recipient, "Who reads these?")
    }

    /// Update `recipient` shares on their own profile
    pub fn shared_update(&self) -> Question {
        Question::new(Some(self.recipient), self.recipient, "New blog post is up")
    }

    /// Every viewer worth checking, anonymous included
    pub fn viewers(&self) -> Vec<Option<UserId>> {
        vec![
            None,
            Some(self.asker),
            Some(self.recipient),
            Some(self.stranger),
        ]
    }
}

/// Every combination of answered/ignored/reported for a base question
pub fn all_states(base: &Question) -> Vec<Question> {
    let mut states = Vec::new();
    for answered in [false, true] {
        for ignored in [false, true] {
            for reported in [false, true] {
                let mut question = base.clone();
                if answered {
                    question = question.answered("An answer");
                }
                question.is_ignored = ignored;
                question.is_reported = reported;
                states.push(question);
            }
        }
    }
    states
}

pub fn lifecycle(
    dedupe: bool,
) -> (
    Arc<InMemoryNotificationStore>,
    QuestionLifecycle<InMemoryNotificationStore>,
) {
    let store = Arc::new(InMemoryNotificationStore::new(dedupe));
    let lifecycle = QuestionLifecycle::new(store.clone());
    (store, lifecycle)
}
