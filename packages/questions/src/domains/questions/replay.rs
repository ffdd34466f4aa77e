//! Replay recorded question transitions through the lifecycle.
//!
//! Input is JSON lines, one [`QuestionEvent`] per line. Blank lines and lines
//! starting with `#` are skipped.

use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::effects::NotificationOutcome;
use super::events::QuestionEvent;
use super::lifecycle::QuestionLifecycle;
use crate::kernel::NotificationStore;

/// Outcomes of one replayed line
#[derive(Debug, Clone, Serialize)]
pub struct ReplayedTransition {
    pub line: usize,
    pub event: &'static str,
    pub outcomes: Vec<NotificationOutcome>,
}

/// Replay every event from `reader`, stopping at the first bad line
pub async fn replay<R, S>(reader: R, lifecycle: &mut QuestionLifecycle<S>) -> Result<Vec<ReplayedTransition>>
where
    R: BufRead,
    S: NotificationStore + ?Sized,
{
    let mut replayed = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: QuestionEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("Line {} is not a valid question event", line_no))?;
        let outcomes = lifecycle
            .apply(&event)
            .await
            .with_context(|| format!("Failed to apply line {}", line_no))?;

        debug!(line = line_no, outcomes = outcomes.len(), "Transition replayed");
        replayed.push(ReplayedTransition {
            line: line_no,
            event: event_name(&event),
            outcomes,
        });
    }

    Ok(replayed)
}

fn event_name(event: &QuestionEvent) -> &'static str {
    match event {
        QuestionEvent::Created { .. } => "created",
        QuestionEvent::Updated { .. } => "updated",
        QuestionEvent::Deleted { .. } => "deleted",
    }
}
