use tracing::{debug, info};

use super::commands::NotificationCommand;
use super::events::QuestionEvent;
use super::models::{NotificationIntent, Question, SuppressionEvent};
use crate::common::Machine;

/// Question notification machine
///
/// Decides which notifications a question transition produces and which
/// pending ones it retracts. Holds no state: every decision depends only on
/// the snapshots carried by the event, so replaying a transition yields the
/// same commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionNotificationMachine;

impl QuestionNotificationMachine {
    pub fn new() -> Self {
        Self
    }

    /// Explicit transition entry point for a committed write
    pub fn react_on(&self, old: Option<&Question>, new: &Question) -> Vec<NotificationCommand> {
        match old {
            None => self.on_created(new),
            Some(old) => self.on_updated(old, new),
        }
    }

    pub fn on_created(&self, question: &Question) -> Vec<NotificationCommand> {
        if question.is_shared_update() {
            debug!(question_id = %question.id, "Shared update created, nobody to notify");
            return Vec::new();
        }

        info!(
            question_id = %question.id,
            recipient = %question.to,
            "Question created, notifying recipient"
        );
        vec![NotificationIntent::question_created(question.to, question.id).into()]
    }

    pub fn on_updated(&self, old: &Question, new: &Question) -> Vec<NotificationCommand> {
        // Newly ignored or newly reported → same as deleted. A question that
        // stays suppressed with no new flag has nothing to retract and must
        // not notify.
        let newly_ignored = new.is_ignored && !old.is_ignored;
        let newly_reported = new.is_reported && !old.is_reported;
        if newly_ignored || newly_reported {
            info!(
                question_id = %new.id,
                ignored = new.is_ignored,
                reported = new.is_reported,
                "Question suppressed, retracting notifications"
            );
            return self.on_deleted(new);
        }

        if new.is_suppressed() {
            debug!(question_id = %new.id, "Question still suppressed, nothing to do");
            return Vec::new();
        }

        if old.is_answered() || !new.is_answered() {
            debug!(question_id = %new.id, "Question updated without being answered");
            return Vec::new();
        }

        let mut commands: Vec<NotificationCommand> = vec![SuppressionEvent {
            target: new.to,
            question_id: new.id,
        }
        .into()];

        match new.from {
            Some(asker) if !new.is_shared_update() => {
                info!(
                    question_id = %new.id,
                    asker = %asker,
                    "Question answered, notifying asker"
                );
                commands.push(NotificationIntent::question_answered(asker, new.id).into());
            }
            Some(_) => {
                debug!(question_id = %new.id, "Shared update answered, asker is the recipient");
            }
            None => {
                debug!(question_id = %new.id, "Anonymous question answered, no asker to notify");
            }
        }

        commands
    }

    pub fn on_deleted(&self, question: &Question) -> Vec<NotificationCommand> {
        vec![SuppressionEvent {
            target: question.to,
            question_id: question.id,
        }
        .into()]
    }
}

impl Machine for QuestionNotificationMachine {
    type Event = QuestionEvent;
    type Command = NotificationCommand;

    fn decide(&mut self, event: &QuestionEvent) -> Vec<NotificationCommand> {
        match event {
            QuestionEvent::Created { question } => self.on_created(question),
            QuestionEvent::Updated { old, new } => self.on_updated(old, new),
            QuestionEvent::Deleted { question } => {
                info!(question_id = %question.id, "Question deleted, retracting notifications");
                self.on_deleted(question)
            }
        }
    }

    fn name(&self) -> &'static str {
        "question_notifications"
    }
}
