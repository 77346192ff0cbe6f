use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use taskboard_core::{BoardConfig, TaskboardError, TaskboardResult};
use taskboard_domain::{DragEnd, DropTarget, TaskFields, TaskStore};
use taskboard_sync::TaskSync;

use crate::notice::Notice;

/// What a reconcile pass did, so the embedding event loop knows whether a
/// re-render is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The move was applied and confirmed by the server.
    Applied,
    /// Nothing to do: no drop target, unknown task, or a plain self-drop.
    NoOp,
    /// The sync failed; the store was restored and a notice raised.
    RolledBack,
}

/// One operator's board for one session.
///
/// Owns the task store (the single rendering input for the presentation
/// layer) and a sync handle. All mutation goes through [`load`] and
/// [`reconcile`]. The session is driven from a single event loop; reconcile
/// holds `&mut self` across its one suspension point (the remote call), so
/// one gesture is handled at a time. Overlapping gestures across loop turns
/// each snapshot the then-current state; their completions may interleave
/// and the last write wins.
///
/// [`load`]: BoardSession::load
/// [`reconcile`]: BoardSession::reconcile
pub struct BoardSession {
    store: TaskStore,
    sync: Arc<dyn TaskSync>,
    notice: Option<Notice>,
    notice_ttl: Duration,
    update_on_self_drop: bool,
}

impl BoardSession {
    pub fn new(sync: Arc<dyn TaskSync>, config: &BoardConfig) -> Self {
        Self {
            store: TaskStore::new(),
            sync,
            notice: None,
            notice_ttl: config.notice_ttl(),
            update_on_self_drop: config.update_on_self_drop,
        }
    }

    /// Populate the store from a full-list fetch. Called once per session;
    /// the CRUD screens refresh by calling it again.
    pub async fn load(&mut self) -> TaskboardResult<usize> {
        let tasks = self
            .sync
            .fetch_tasks(None, None)
            .await
            .map_err(TaskboardError::from)?;
        let count = tasks.len();
        self.store.replace_all(tasks);
        debug!("loaded {} tasks", count);
        Ok(count)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Drop the notice once its TTL has passed. Call once per event-loop
    /// tick.
    pub fn tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.is_expired(self.notice_ttl))
        {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Map a drag-end gesture onto the store and the remote record.
    ///
    /// Resolves the drop target, applies the move optimistically, issues the
    /// full-record update, and restores the pre-drag snapshot if the sync
    /// fails. Lookup misses abort silently: they reflect a stale gesture,
    /// not a recoverable condition.
    pub async fn reconcile(&mut self, event: DragEnd) -> ReconcileOutcome {
        let Some(active) = self.store.get(event.active_id).cloned() else {
            debug!("drag ended for unknown task {}", event.active_id);
            return ReconcileOutcome::NoOp;
        };

        let Some(over_id) = event.over_id.as_deref() else {
            // Gesture settled without a target; the view is already correct.
            return ReconcileOutcome::NoOp;
        };
        let Some(target) = DropTarget::resolve(over_id) else {
            debug!("drop target {:?} is neither a lane nor a task", over_id);
            return ReconcileOutcome::NoOp;
        };

        let (target_lane, index_within_lane) = match target {
            // Dropping on a lane appends to its current order.
            DropTarget::Lane(lane) => (lane, self.store.lane_len(lane)),
            DropTarget::Task(over_task_id) => {
                if over_task_id == event.active_id && !self.update_on_self_drop {
                    // Same lane, same position: nothing changed.
                    return ReconcileOutcome::NoOp;
                }
                let Some(over) = self.store.get(over_task_id) else {
                    debug!("drop target task {} not in store", over_task_id);
                    return ReconcileOutcome::NoOp;
                };
                let lane = over.status;
                let Some(index) = self.store.lane_index_of(over_task_id) else {
                    return ReconcileOutcome::NoOp;
                };
                // The active task takes over this position; displaced tasks
                // shift by one.
                (lane, index)
            }
        };

        // A same-lane reorder still issues the update: the payload carries
        // the full current field values either way.
        let previous = self.store.snapshot();
        self.store
            .move_task(event.active_id, target_lane, index_within_lane);
        debug!(
            "moved task {} to {} [{}] (optimistic)",
            event.active_id, target_lane, index_within_lane
        );

        let mut fields = TaskFields::from(&active);
        fields.status = target_lane;

        match self.sync.update_task(event.active_id, &fields).await {
            Ok(_) => {
                self.notice = None;
                ReconcileOutcome::Applied
            }
            Err(err) => {
                warn!(
                    "sync failed for task {}: {}; rolling back",
                    event.active_id, err
                );
                self.store.restore(previous);
                self.notice = Some(Notice::new(err.to_string()));
                ReconcileOutcome::RolledBack
            }
        }
    }
}
