//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! is the only writer; components read fields through the generated
//! accessors.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Achievement, Task, TaskDraft, TaskId, TaskStatus, User};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tasks,
    Create,
    Stats,
    Achievements,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Tasks, Tab::Create, Tab::Stats, Tab::Achievements];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Tasks => "📋 My tasks",
            Tab::Create => "➕ Create",
            Tab::Stats => "📊 Statistics",
            Tab::Achievements => "🏆 Achievements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Validation,
}

/// A toast message shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Everything the page shows, cached for the session
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Acting user, once loaded
    pub user: Option<User>,
    /// Loaded tasks of every fetched status
    pub tasks: Vec<Task>,
    pub achievements: Vec<Achievement>,
    /// Task creation form
    pub draft: TaskDraft,
    /// True only while a load that shows the spinner is running
    pub loading: bool,
    pub active_tab: Tab,
    pub notices: Vec<Notice>,
    /// Tasks with a completion request pending
    pub in_flight: HashSet<TaskId>,
    pub next_notice_id: u64,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

/// Mark a loaded task completed. Returns false if the task is not loaded.
pub fn store_mark_completed(store: &PageStore, task_id: &TaskId, at: DateTime<Utc>) -> bool {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| &task.id == task_id)
        .map(|task| {
            task.status = TaskStatus::Completed;
            task.completed_at = Some(at);
        })
        .is_some()
}

/// Append a notice and return its id
pub fn store_push_notice(store: &PageStore, kind: NoticeKind, title: &str, body: &str) -> u64 {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id + 1);
    store.notices().write().push(Notice {
        id,
        kind,
        title: title.to_string(),
        body: body.to_string(),
    });
    id
}

/// Remove a notice by ID
pub fn store_remove_notice(store: &PageStore, notice_id: u64) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Priority};

    fn task(id: &str) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("Task {}", id),
            description: None,
            interval: Interval::Daily,
            assigned_to: None,
            status: TaskStatus::Active,
            priority: Priority::Medium,
            reminder_count: 0,
            created_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = PageState::new();
        assert!(state.loading);
        assert_eq!(state.active_tab, Tab::Tasks);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_mark_completed() {
        let store = Store::new(PageState::new());
        store.tasks().set(vec![task("1"), task("2")]);
        let now = Utc::now();

        assert!(store_mark_completed(&store, &TaskId::from("2"), now));
        assert!(!store_mark_completed(&store, &TaskId::from("9"), now));

        let tasks = store.tasks().get_untracked();
        assert_eq!(tasks[0].status, TaskStatus::Active);
        assert_eq!(tasks[1].status, TaskStatus::Completed);
        assert_eq!(tasks[1].completed_at, Some(now));
    }

    #[test]
    fn test_notice_ids_are_unique() {
        let store = Store::new(PageState::new());
        let a = store_push_notice(&store, NoticeKind::Success, "a", "");
        let b = store_push_notice(&store, NoticeKind::Error, "b", "");
        assert_ne!(a, b);

        store_remove_notice(&store, a);
        let c = store_push_notice(&store, NoticeKind::Validation, "c", "");
        assert!(c > b);

        let titles: Vec<_> = store.notices().get_untracked().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }
}
