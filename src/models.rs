//! Frontend Models
//!
//! Data structures matching the TaskMaster backend payloads.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Task identifier. The backend sends it as a string in listings and as a
/// number in status-update responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(TaskId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "💤 Low",
            Priority::Medium => "⚡ Medium",
            Priority::High => "🔥 High",
        }
    }
}

/// Reminder cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    #[default]
    #[serde(rename = "30min")]
    HalfHourly,
    #[serde(rename = "1hour")]
    Hourly,
    #[serde(rename = "2hours")]
    TwoHourly,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "custom")]
    Custom,
}

impl Interval {
    pub const ALL: [Interval; 5] = [
        Interval::HalfHourly,
        Interval::Hourly,
        Interval::TwoHourly,
        Interval::Daily,
        Interval::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::HalfHourly => "30min",
            Interval::Hourly => "1hour",
            Interval::TwoHourly => "2hours",
            Interval::Daily => "daily",
            Interval::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::HalfHourly => "⏰ Every 30 minutes",
            Interval::Hourly => "⏰ Every hour",
            Interval::TwoHourly => "⏰ Every 2 hours",
            Interval::Daily => "📅 Every day",
            Interval::Custom => "⚙️ Custom schedule",
        }
    }
}

/// Player profile (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub level: u32,
    pub xp: u32,
    // The update endpoint answers with raw column names
    #[serde(rename = "totalCompleted", alias = "total_completed", default)]
    pub total_completed: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(rename = "createdAt", default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub interval: Interval,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub reminder_count: u32,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

/// Partial task returned by a status update
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskStatusChange {
    pub id: TaskId,
    pub status: TaskStatus,
    #[serde(default, alias = "completedAt", deserialize_with = "timestamp::optional")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Fields sent when creating a task
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub interval: Interval,
    pub assigned_to: Option<String>,
    pub priority: Priority,
}

/// Editable form state for a task that does not exist yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub interval: Interval,
    pub assigned_to: String,
    pub priority: Priority,
}

/// One change made in the creation form
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Title(String),
    Description(String),
    Interval(Interval),
    Priority(Priority),
    Assignee(String),
}

impl TaskDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Title(title) => self.title = title,
            DraftEdit::Description(description) => self.description = description,
            DraftEdit::Interval(interval) => self.interval = interval,
            DraftEdit::Priority(priority) => self.priority = priority,
            DraftEdit::Assignee(assignee) => self.assigned_to = assignee,
        }
    }

    /// Validated creation request, or None when the title is blank
    pub fn to_new_task(&self) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let assignee = self.assigned_to.trim();
        Some(NewTask {
            title: title.to_string(),
            description: self.description.clone(),
            interval: self.interval,
            assigned_to: (!assignee.is_empty()).then(|| assignee.to_string()),
            priority: self.priority,
        })
    }
}

/// Achievement with per-user progress (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(deserialize_with = "clamped_percent")]
    pub progress: u8,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Raw counter returned by a progress bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AchievementProgress {
    pub progress: u32,
    pub unlocked: bool,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(s) => Ok(s),
        Raw::Int(n) => Ok(n.to_string()),
    }
}

fn clamped_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// Backend timestamps are either RFC 3339 or naive ISO-8601 in UTC
pub(crate) mod timestamp {
    use super::*;

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s))),
        }
    }
}
