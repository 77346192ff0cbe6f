use serde::{Deserialize, Serialize};

use crate::lane::TaskStatus;
use crate::task::{Task, TaskId};

/// Ordered collection of tasks; the single source of truth for lane
/// membership and intra-lane order.
///
/// There is no explicit position field. A lane's order is the order of its
/// members within the underlying collection, so filtering by status always
/// yields a stable sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Point-in-time copy of store state, taken before an optimistic mutation so
/// a failed sync can restore it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    tasks: Vec<Task>,
}

impl StoreSnapshot {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Populate the store from a full-list fetch, discarding current state.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: StoreSnapshot) {
        self.tasks = snapshot.tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn lane_tasks(&self, lane: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status == lane)
    }

    pub fn lane_len(&self, lane: TaskStatus) -> usize {
        self.lane_tasks(lane).count()
    }

    /// A task's current index within its own lane.
    pub fn lane_index_of(&self, id: TaskId) -> Option<usize> {
        let lane = self.get(id)?.status;
        self.lane_tasks(lane).position(|t| t.id == id)
    }

    /// Move a task to `target_lane` so that it lands at `index_within_lane`
    /// among that lane's members. An index at or past the end of the lane
    /// appends. Returns `false`, leaving the store untouched, if `id` is not
    /// present.
    ///
    /// Never drops or duplicates a task: the collection's cardinality is the
    /// same before and after.
    pub fn move_task(
        &mut self,
        id: TaskId,
        target_lane: TaskStatus,
        index_within_lane: usize,
    ) -> bool {
        let Some(current) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        let mut task = self.tasks.remove(current);
        task.status = target_lane;
        let at = self.insertion_index(target_lane, index_within_lane);
        self.tasks.insert(at, task);
        true
    }

    /// Index in the underlying collection at which an insert lands a task at
    /// `index_within_lane` among `lane`'s members. Past-the-end indexes
    /// resolve to just after the lane's last member, or the end of the
    /// collection when the lane is empty.
    fn insertion_index(&self, lane: TaskStatus, index_within_lane: usize) -> usize {
        let mut seen = 0;
        let mut after_last = self.tasks.len();
        for (i, task) in self.tasks.iter().enumerate() {
            if task.status == lane {
                if seen == index_within_lane {
                    return i;
                }
                seen += 1;
                after_last = i + 1;
            }
        }
        after_last
    }
}
