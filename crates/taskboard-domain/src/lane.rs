use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status, doubling as the lane identifier. The board is a fixed,
/// ordered partition over this set; lanes are not persisted entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// All lanes in board order.
pub const LANES: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

impl TaskStatus {
    /// The wire and drop-target identifier for this lane.
    pub fn lane_id(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Lane heading, consumed by the presentation layer as a rendering input.
    pub fn lane_title(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Membership test against the fixed lane-id set.
    pub fn from_lane_id(id: &str) -> Option<Self> {
        LANES.into_iter().find(|lane| lane.lane_id() == id)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lane_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_order_is_fixed() {
        assert_eq!(
            LANES,
            [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
        );
    }

    #[test]
    fn test_lane_id_round_trip() {
        for lane in LANES {
            assert_eq!(TaskStatus::from_lane_id(lane.lane_id()), Some(lane));
        }
    }

    #[test]
    fn test_unknown_lane_id() {
        assert_eq!(TaskStatus::from_lane_id("archived"), None);
        assert_eq!(TaskStatus::from_lane_id(""), None);
        assert_eq!(TaskStatus::from_lane_id("Todo"), None);
    }

    #[test]
    fn test_wire_format_is_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);

        let parsed: TaskStatus = serde_json::from_str(r#""done""#).unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }
}
