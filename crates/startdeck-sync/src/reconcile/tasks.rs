//! Task reconciler

use startdeck_core::domain::{LocalId, RemoteId, Task};
use startdeck_core::ports::WireTask;

use super::EntityReconciler;

/// Reconciler for the task entity family
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskReconciler;

impl EntityReconciler for TaskReconciler {
    type Local = Task;
    type Wire = WireTask;

    fn to_wire(&self, local: &[Task]) -> Vec<WireTask> {
        local
            .iter()
            .map(|task| WireTask {
                id: task.remote_id.as_ref().map(|r| r.as_str().to_string()),
                offline_id: Some(task.local_id.as_str().to_string()),
                text: task.text.clone(),
                category: task.category.clone(),
                date: task.date,
                notes: task.notes.clone(),
                priority: task.priority,
                completed: task.completed,
                order: task.order,
            })
            .collect()
    }

    fn from_wire(&self, wire: &[WireTask]) -> Vec<Task> {
        wire.iter()
            .map(|record| Task {
                local_id: reconciled_local_id(record.offline_id.as_deref(), record.id.as_deref()),
                remote_id: record
                    .id
                    .as_deref()
                    .and_then(|id| RemoteId::new(id).ok()),
                text: record.text.clone(),
                category: record.category.clone(),
                date: record.date,
                notes: record.notes.clone(),
                priority: record.priority,
                completed: record.completed,
                order: record.order,
            })
            .collect()
    }
}

/// `offline_id ?? id`, minting a fresh id only when the record carries
/// neither (a server record with no usable identity still needs a render key)
pub(crate) fn reconciled_local_id(offline_id: Option<&str>, id: Option<&str>) -> LocalId {
    offline_id
        .and_then(|s| LocalId::new(s).ok())
        .or_else(|| id.and_then(|s| LocalId::new(s).ok()))
        .unwrap_or_else(LocalId::generate)
}
