use uuid::Uuid;

use crate::lane::TaskStatus;
use crate::task::TaskId;

/// End of a drag gesture, as raised by the presentation layer.
///
/// `active_id` is always a task id. `over_id` is a raw drop-target
/// identifier: a lane id, another task's id, or `None` when the gesture
/// settled without a target.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub active_id: TaskId,
    pub over_id: Option<String>,
}

impl DragEnd {
    pub fn onto(active_id: TaskId, over_id: impl Into<String>) -> Self {
        Self {
            active_id,
            over_id: Some(over_id.into()),
        }
    }

    pub fn without_target(active_id: TaskId) -> Self {
        Self {
            active_id,
            over_id: None,
        }
    }
}

/// A drop target, disambiguated once up front. Lane-id membership is tested
/// before anything is treated as a task id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Lane(TaskStatus),
    Task(TaskId),
}

impl DropTarget {
    pub fn resolve(over_id: &str) -> Option<Self> {
        if let Some(lane) = TaskStatus::from_lane_id(over_id) {
            return Some(DropTarget::Lane(lane));
        }
        Uuid::parse_str(over_id).ok().map(DropTarget::Task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_id_resolves_to_lane() {
        assert_eq!(
            DropTarget::resolve("in_progress"),
            Some(DropTarget::Lane(TaskStatus::InProgress))
        );
    }

    #[test]
    fn test_task_id_resolves_to_task() {
        let id = Uuid::new_v4();
        assert_eq!(
            DropTarget::resolve(&id.to_string()),
            Some(DropTarget::Task(id))
        );
    }

    #[test]
    fn test_garbage_resolves_to_nothing() {
        assert_eq!(DropTarget::resolve("not-a-lane-or-task"), None);
        assert_eq!(DropTarget::resolve(""), None);
    }

    #[test]
    fn test_lane_membership_is_checked_first() {
        // All lane ids fail UUID parsing anyway, but the membership test
        // must come first so the union is resolved exactly once.
        for lane in crate::lane::LANES {
            assert_eq!(
                DropTarget::resolve(lane.lane_id()),
                Some(DropTarget::Lane(lane))
            );
        }
    }
}
