use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use super::effects::{NotificationEffect, NotificationOutcome};
use super::events::QuestionEvent;
use super::machines::QuestionNotificationMachine;
use super::models::Question;
use crate::common::Machine;
use crate::kernel::NotificationStore;

/// Wires the notification machine to a notification store
///
/// The question store calls [`apply`](Self::apply) right after committing a
/// write, once per transition and in commit order for a given question.
pub struct QuestionLifecycle<S: NotificationStore + ?Sized> {
    machine: QuestionNotificationMachine,
    effect: NotificationEffect,
    store: Arc<S>,
}

impl<S: NotificationStore + ?Sized> QuestionLifecycle<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            machine: QuestionNotificationMachine::new(),
            effect: NotificationEffect,
            store,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Decide on an event and execute the resulting commands in order
    pub async fn apply(&mut self, event: &QuestionEvent) -> Result<Vec<NotificationOutcome>> {
        let commands = self.machine.decide(event);
        debug!(
            machine = self.machine.name(),
            question_id = %event.question_id(),
            commands = commands.len(),
            "Question transition decided"
        );

        self.effect.execute_batch(commands, self.store.as_ref()).await
    }

    /// Convenience for callers holding raw before/after snapshots
    pub async fn react_on(&mut self, old: Option<Question>, new: Question) -> Result<Vec<NotificationOutcome>> {
        self.apply(&QuestionEvent::transition(old, new)).await
    }
}
