//! Page Controller
//!
//! Owns the page state and sequences backend calls: the initial load,
//! task completion and task creation. Every mutation ends with a full
//! reload so the cache converges on what the backend says.

use std::rc::Rc;

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;
use thiserror::Error;

use crate::api::{ApiError, TaskMasterApi};
use crate::config::AppConfig;
use crate::models::{DraftEdit, Task, TaskId, TaskStatus, User};
use crate::store::{
    store_mark_completed, store_push_notice, store_remove_notice, NoticeKind, PageState, PageStateStoreFields,
    PageStore, Tab,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("no user loaded")]
    NoUser,
    #[error("task {0} is already being completed")]
    InFlight(TaskId),
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),
}

/// A failed completion, and whether the status update had gone through
struct Completion {
    err: ControllerError,
    status_changed: bool,
}

pub struct PageController<A> {
    api: Rc<A>,
    config: Rc<AppConfig>,
    store: PageStore,
}

impl<A> Clone for PageController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            config: Rc::clone(&self.config),
            store: self.store,
        }
    }
}

impl<A: TaskMasterApi> PageController<A> {
    pub fn new(api: A, config: AppConfig) -> Self {
        Self {
            api: Rc::new(api),
            config: Rc::new(config),
            store: Store::new(PageState::new()),
        }
    }

    pub fn store(&self) -> PageStore {
        self.store
    }

    // ========================
    // Loading
    // ========================

    /// Initial load: shows the loading screen while it runs
    pub async fn load(&self) -> Result<(), ControllerError> {
        self.store.loading().set(true);
        let result = self.refresh().await;
        self.store.loading().set(false);
        result
    }

    /// Same sequence as [`Self::load`] without the loading screen
    pub async fn refresh(&self) -> Result<(), ControllerError> {
        let result = self.fetch_all().await;
        if let Err(err) = &result {
            log::error!("[CONTROLLER] Failed to load data: {}", err);
            self.notify(NoticeKind::Error, "Load failed", "Could not load your data");
        }
        result
    }

    async fn fetch_all(&self) -> Result<(), ControllerError> {
        let user = self.resolve_user().await?;
        let user_id = user.id;
        self.store.user().set(Some(user));

        let mut tasks = Vec::new();
        for status in &self.config.loaded_statuses {
            tasks.extend(self.api.list_tasks(user_id, *status).await?);
        }
        log::debug!("[CONTROLLER] Loaded {} tasks for user {}", tasks.len(), user_id);
        self.store.tasks().set(tasks);

        let achievements = self.api.list_achievements(user_id).await?;
        self.store.achievements().set(achievements);
        Ok(())
    }

    async fn resolve_user(&self) -> Result<User, ControllerError> {
        let session = &self.config.session;
        match self.api.get_user(session.telegram_id).await {
            Ok(user) => Ok(user),
            Err(err) if self.config.lookup_fallback.should_create(&err) => {
                log::info!("[CONTROLLER] No user for telegram id {} ({}), creating", session.telegram_id, err);
                Ok(self.api.create_user(session.telegram_id, session.username.as_deref()).await?)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn user_id(&self) -> Option<i64> {
        self.store.user().with_untracked(|user| user.as_ref().map(|u| u.id))
    }

    // ========================
    // Mutations
    // ========================

    /// Complete a task, award XP, record achievement progress and reload.
    /// A second request for a task that is pending or already completed is
    /// rejected.
    pub async fn complete_task(&self, task_id: &TaskId) -> Result<(), ControllerError> {
        let Some(user_id) = self.user_id() else {
            self.notify(NoticeKind::Error, "Error", "Could not complete the task");
            return Err(ControllerError::NoUser);
        };
        if self.is_completed(task_id) {
            log::warn!("[CONTROLLER] Task {} is already completed", task_id);
            return Err(ControllerError::AlreadyCompleted(task_id.clone()));
        }
        if !self.store.in_flight().write().insert(task_id.clone()) {
            log::warn!("[CONTROLLER] Task {} is already being completed", task_id);
            return Err(ControllerError::InFlight(task_id.clone()));
        }

        let result = self.apply_completion(user_id, task_id).await;
        self.store.in_flight().write().remove(task_id);

        match result {
            Ok(()) => {
                let xp = self.config.rewards.completion_xp;
                self.notify(NoticeKind::Success, "🎉 Task completed!", &format!("+{} XP. Keep it up!", xp));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(Completion { err, status_changed }) => {
                log::error!("[CONTROLLER] Failed to complete task {}: {}", task_id, err);
                self.notify(NoticeKind::Error, "Error", "Could not complete the task");
                // The backend already holds the new status
                if status_changed {
                    let _ = self.refresh().await;
                }
                Err(err)
            }
        }
    }

    async fn apply_completion(&self, user_id: i64, task_id: &TaskId) -> Result<(), Completion> {
        let rewards = &self.config.rewards;
        let change = self
            .api
            .update_task_status(task_id, TaskStatus::Completed)
            .await
            .map_err(|err| Completion { err: err.into(), status_changed: false })?;
        let failed = |err: ApiError| Completion { err: err.into(), status_changed: true };

        let user = self.api.update_user(user_id, rewards.completion_xp, true).await.map_err(failed)?;
        self.store.user().set(Some(user));

        self.api
            .bump_achievement_progress(user_id, rewards.task_completed_achievement, rewards.progress_increment)
            .await
            .map_err(failed)?;

        let completed_at = change.completed_at.unwrap_or_else(Utc::now);
        if !store_mark_completed(&self.store, task_id, completed_at) {
            log::debug!("[CONTROLLER] Completed task {} was not in the cache", task_id);
        }
        Ok(())
    }

    fn is_completed(&self, task_id: &TaskId) -> bool {
        self.store
            .tasks()
            .with_untracked(|tasks| tasks.iter().any(|t| &t.id == task_id && t.status == TaskStatus::Completed))
    }

    /// Create a task from the draft form
    pub async fn create_task(&self) -> Result<Task, ControllerError> {
        let draft = self.store.draft().get_untracked();
        let Some(new_task) = draft.to_new_task() else {
            self.notify(NoticeKind::Validation, "Oops! 😅", "Task title cannot be empty");
            return Err(ControllerError::EmptyTitle);
        };
        let Some(user_id) = self.user_id() else {
            self.notify(NoticeKind::Error, "Error", "Could not create the task");
            return Err(ControllerError::NoUser);
        };

        let created = match self.api.create_task(user_id, &new_task).await {
            Ok(task) => task,
            Err(err) => {
                log::error!("[CONTROLLER] Failed to create task: {}", err);
                self.notify(NoticeKind::Error, "Error", "Could not create the task");
                return Err(err.into());
            }
        };
        log::info!("[CONTROLLER] Created task {}", created.id);

        let rewards = &self.config.rewards;
        if let Err(err) = self
            .api
            .bump_achievement_progress(user_id, rewards.task_created_achievement, rewards.progress_increment)
            .await
        {
            // The task exists either way; progress is not retried
            log::warn!(
                "[CONTROLLER] Progress for achievement {} not recorded: {}",
                rewards.task_created_achievement,
                err
            );
        }

        // Keep whatever was typed while the request was pending
        if self.store.draft().with_untracked(|current| *current == draft) {
            self.store.draft().set(Default::default());
        }
        self.notify(NoticeKind::Success, "✨ Task created!", "The bot will start sending reminders");
        let _ = self.refresh().await;
        Ok(created)
    }

    // ========================
    // Local State
    // ========================

    pub fn edit_draft(&self, edit: DraftEdit) {
        self.store.draft().write().apply(edit);
    }

    pub fn select_tab(&self, tab: Tab) {
        self.store.active_tab().set(tab);
    }

    pub fn dismiss_notice(&self, notice_id: u64) {
        store_remove_notice(&self.store, notice_id);
    }

    fn notify(&self, kind: NoticeKind, title: &str, body: &str) {
        store_push_notice(&self.store, kind, title, body);
    }
}
