//! Question notification effect - executes machine output against a store
//!
//! Effects are stateless: each command carries everything needed to run it.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use super::commands::NotificationCommand;
use super::models::{NotificationIntent, SuppressionEvent};
use crate::kernel::NotificationStore;

/// What executing one command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NotificationOutcome {
    Delivered { intent: NotificationIntent },
    /// The store already held this notification
    Duplicate { intent: NotificationIntent },
    Suppressed { event: SuppressionEvent, removed: usize },
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NotificationEffect;

impl NotificationEffect {
    pub async fn execute<S>(&self, command: NotificationCommand, store: &S) -> Result<NotificationOutcome>
    where
        S: NotificationStore + ?Sized,
    {
        match command {
            NotificationCommand::Notify(intent) => {
                let stored = store.deliver(&intent).await.with_context(|| {
                    format!(
                        "Failed to deliver {} notification for question {}",
                        intent.kind, intent.question_id
                    )
                })?;

                if stored {
                    info!(
                        recipient = %intent.target,
                        kind = %intent.kind,
                        question_id = %intent.question_id,
                        "Notification delivered"
                    );
                    Ok(NotificationOutcome::Delivered { intent })
                } else {
                    Ok(NotificationOutcome::Duplicate { intent })
                }
            }
            NotificationCommand::Suppress(event) => {
                let removed = store.suppress(&event).await.with_context(|| {
                    format!(
                        "Failed to suppress notifications for question {}",
                        event.question_id
                    )
                })?;

                info!(
                    recipient = %event.target,
                    question_id = %event.question_id,
                    removed,
                    "Pending notifications suppressed"
                );
                Ok(NotificationOutcome::Suppressed { event, removed })
            }
        }
    }

    /// Execute commands in order, stopping at the first failure
    ///
    /// Not transactional: commands that ran before a failure stay applied.
    pub async fn execute_batch<S>(
        &self,
        commands: Vec<NotificationCommand>,
        store: &S,
    ) -> Result<Vec<NotificationOutcome>>
    where
        S: NotificationStore + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(commands.len());
        for command in commands {
            outcomes.push(self.execute(command, store).await?);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{QuestionId, UserId};
    use crate::kernel::InMemoryNotificationStore;
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_execute_reports_duplicates() {
        let store = InMemoryNotificationStore::new(true);
        let intent = NotificationIntent::question_created(UserId::new(), QuestionId::new());

        let first = NotificationEffect
            .execute(NotificationCommand::Notify(intent.clone()), &store)
            .await
            .unwrap();
        let second = NotificationEffect
            .execute(NotificationCommand::Notify(intent.clone()), &store)
            .await
            .unwrap();

        assert_eq!(first, NotificationOutcome::Delivered { intent: intent.clone() });
        assert_eq!(second, NotificationOutcome::Duplicate { intent });
    }

    struct FailingStore;

    #[async_trait]
    impl NotificationStore for FailingStore {
        async fn deliver(&self, _intent: &NotificationIntent) -> Result<bool> {
            anyhow::bail!("store offline")
        }

        async fn suppress(&self, _event: &SuppressionEvent) -> Result<usize> {
            Ok(0)
        }

        async fn notifications_for(
            &self,
            _user: UserId,
        ) -> Result<Vec<crate::domains::questions::models::Notification>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_batch_is_fail_fast() {
        let question_id = QuestionId::new();
        let commands = vec![
            NotificationCommand::Suppress(SuppressionEvent {
                target: UserId::new(),
                question_id,
            }),
            NotificationCommand::Notify(NotificationIntent::question_answered(
                UserId::new(),
                question_id,
            )),
        ];

        let err = NotificationEffect
            .execute_batch(commands, &FailingStore)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to deliver question_answered"));
        assert!(format!("{:#}", err).contains("store offline"));
    }
}
