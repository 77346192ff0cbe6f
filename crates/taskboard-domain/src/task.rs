use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lane::TaskStatus;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// The unit of work tracked on the board.
///
/// Descriptive attributes (`description`, `priority`, `due_date`,
/// `assignee_id`) are carried through moves unchanged. `created_at` and
/// `updated_at` are server-managed: populated on load, never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            status,
            priority: None,
            due_date: None,
            assignee_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// The full set of mutable fields, sent as a PUT-style replace. Always the
/// complete record, never a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_id: Option<Uuid>,
}

impl From<&Task> for TaskFields {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            assignee_id: task.assignee_id,
        }
    }
}

impl TaskFields {
    /// Rebuild a task record from these fields, for servers that acknowledge
    /// an update with an empty body.
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            assignee_id: self.assignee_id,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":"c5f6db25-7a8c-4f4e-9b52-bd3a5c0b0a6e","title":"Fix broken door","status":"todo"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.title, "Fix broken door");
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.description.is_none());
        assert!(task.priority.is_none());
        assert!(task.due_date.is_none());
        assert!(task.assignee_id.is_none());
    }

    #[test]
    fn test_deserialize_full_record_with_server_timestamps() {
        let json = r#"{
            "id": "c5f6db25-7a8c-4f4e-9b52-bd3a5c0b0a6e",
            "title": "Lubricate hinges",
            "description": "And tighten screws",
            "status": "in_progress",
            "priority": "high",
            "due_date": "2024-12-31",
            "assignee_id": "7d7bfb35-9f0c-4d22-a7b8-33a1c3ba0a11",
            "created_at": "2024-11-01T09:30:00Z",
            "updated_at": "2024-11-02T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.priority, Some(TaskPriority::High));
        assert_eq!(task.due_date.unwrap().to_string(), "2024-12-31");
        assert!(task.created_at.is_some());
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_fields_carry_everything_except_server_state() {
        let mut task = Task::new("Paint fence", TaskStatus::Todo);
        task.description = Some("White, two coats".to_string());
        task.priority = Some(TaskPriority::Low);
        task.created_at = Some(Utc::now());

        let fields = TaskFields::from(&task);
        assert_eq!(fields.title, "Paint fence");
        assert_eq!(fields.description.as_deref(), Some("White, two coats"));
        assert_eq!(fields.status, TaskStatus::Todo);
        assert_eq!(fields.priority, Some(TaskPriority::Low));

        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_fields_echo_round_trip() {
        let mut task = Task::new("Replace bulb", TaskStatus::Done);
        task.priority = Some(TaskPriority::Medium);

        let echoed = TaskFields::from(&task).into_task(task.id);
        assert_eq!(echoed.id, task.id);
        assert_eq!(echoed.title, task.title);
        assert_eq!(echoed.status, task.status);
        assert_eq!(echoed.priority, task.priority);
    }
}
