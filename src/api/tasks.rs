//! Task Calls

use serde::{Deserialize, Serialize};

use super::http::{HttpApi, Method, Resource};
use super::ApiResult;
use crate::models::{Interval, NewTask, Priority, Task, TaskId, TaskStatus, TaskStatusChange};

#[derive(Deserialize)]
struct TaskListEnvelope {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskEnvelope<T> {
    task: T,
}

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    user_id: i64,
    title: &'a str,
    description: &'a str,
    interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    assigned_to: Option<&'a str>,
    priority: Priority,
}

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

pub(super) async fn list(api: &HttpApi, user_id: i64, status: TaskStatus) -> ApiResult<Vec<Task>> {
    let url = api.url(
        Resource::Tasks,
        None,
        &[("user_id", user_id.to_string()), ("status", status.as_str().to_string())],
    );
    let envelope: TaskListEnvelope = api.get(url).await?;
    Ok(envelope.tasks)
}

pub(super) async fn create(api: &HttpApi, user_id: i64, task: &NewTask) -> ApiResult<Task> {
    let url = api.url(Resource::Tasks, None, &[]);
    let envelope: TaskEnvelope<Task> = api.send(Method::Post, url, &CreateTaskBody::new(user_id, task)).await?;
    Ok(envelope.task)
}

/// The task id travels as a path segment
pub(super) async fn update_status(api: &HttpApi, task_id: &TaskId, status: TaskStatus) -> ApiResult<TaskStatusChange> {
    let url = api.url(Resource::Tasks, Some(&task_id.0), &[]);
    let envelope: TaskEnvelope<TaskStatusChange> = api.send(Method::Put, url, &StatusBody { status }).await?;
    Ok(envelope.task)
}

impl<'a> CreateTaskBody<'a> {
    fn new(user_id: i64, task: &'a NewTask) -> Self {
        Self {
            user_id,
            title: &task.title,
            description: &task.description,
            interval: task.interval,
            assigned_to: task.assigned_to.as_deref(),
            priority: task.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body() {
        let task = NewTask {
            title: "Stretch".to_string(),
            description: String::new(),
            interval: Interval::Hourly,
            assigned_to: None,
            priority: Priority::Low,
        };
        assert_eq!(
            serde_json::to_string(&CreateTaskBody::new(3, &task)).unwrap(),
            r#"{"user_id":3,"title":"Stretch","description":"","interval":"1hour","priority":"low"}"#
        );
    }

    #[test]
    fn test_create_body_with_assignee() {
        let task = NewTask {
            title: "Review".to_string(),
            description: "PR #12".to_string(),
            interval: Interval::Daily,
            assigned_to: Some("@kim".to_string()),
            priority: Priority::High,
        };
        let json: serde_json::Value = serde_json::to_value(CreateTaskBody::new(1, &task)).unwrap();
        assert_eq!(json["assigned_to"], "@kim");
        assert_eq!(json["interval"], "daily");
    }

    #[test]
    fn test_status_body() {
        let body = StatusBody { status: TaskStatus::Completed };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"completed"}"#);
    }

    #[test]
    fn test_list_envelope() {
        let json = r#"{"tasks": [{"id": "1", "title": "a", "description": null, "interval": "daily",
                       "status": "active", "priority": "medium", "reminderCount": 0,
                       "createdAt": "2024-05-01T10:00:00", "completedAt": null}]}"#;
        let envelope: TaskListEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.tasks.len(), 1);
        assert_eq!(envelope.tasks[0].description, None);
    }
}
