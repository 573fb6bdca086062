//! Backend API
//!
//! Typed bindings to the three TaskMaster backend functions (users, tasks,
//! achievements), organized by resource. Every call is a single attempt:
//! no retry, no timeout. None of the operations are idempotent.

mod error;
mod http;
mod users;
mod tasks;
mod achievements;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{Achievement, AchievementProgress, NewTask, Task, TaskId, TaskStatus, TaskStatusChange, User};

pub use error::{ApiError, ApiResult};
pub use http::HttpApi;

/// Operations the page needs from the backend.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TaskMasterApi {
    /// Look up a user by Telegram id. A missing user is `ApiError::NotFound`.
    async fn get_user(&self, telegram_id: i64) -> ApiResult<User>;

    async fn create_user(&self, telegram_id: i64, username: Option<&str>) -> ApiResult<User>;

    /// Add XP (and optionally count a completed task); level is recomputed server-side
    async fn update_user(&self, user_id: i64, xp_increment: u32, complete_task: bool) -> ApiResult<User>;

    async fn list_tasks(&self, user_id: i64, status: TaskStatus) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, user_id: i64, task: &NewTask) -> ApiResult<Task>;

    async fn update_task_status(&self, task_id: &TaskId, status: TaskStatus) -> ApiResult<TaskStatusChange>;

    async fn list_achievements(&self, user_id: i64) -> ApiResult<Vec<Achievement>>;

    async fn bump_achievement_progress(
        &self,
        user_id: i64,
        achievement_id: i64,
        increment: u32,
    ) -> ApiResult<AchievementProgress>;
}

#[async_trait(?Send)]
impl TaskMasterApi for HttpApi {
    async fn get_user(&self, telegram_id: i64) -> ApiResult<User> {
        users::get(self, telegram_id).await
    }

    async fn create_user(&self, telegram_id: i64, username: Option<&str>) -> ApiResult<User> {
        users::create(self, telegram_id, username).await
    }

    async fn update_user(&self, user_id: i64, xp_increment: u32, complete_task: bool) -> ApiResult<User> {
        users::update(self, user_id, xp_increment, complete_task).await
    }

    async fn list_tasks(&self, user_id: i64, status: TaskStatus) -> ApiResult<Vec<Task>> {
        tasks::list(self, user_id, status).await
    }

    async fn create_task(&self, user_id: i64, task: &NewTask) -> ApiResult<Task> {
        tasks::create(self, user_id, task).await
    }

    async fn update_task_status(&self, task_id: &TaskId, status: TaskStatus) -> ApiResult<TaskStatusChange> {
        tasks::update_status(self, task_id, status).await
    }

    async fn list_achievements(&self, user_id: i64) -> ApiResult<Vec<Achievement>> {
        achievements::list(self, user_id).await
    }

    async fn bump_achievement_progress(
        &self,
        user_id: i64,
        achievement_id: i64,
        increment: u32,
    ) -> ApiResult<AchievementProgress> {
        achievements::bump_progress(self, user_id, achievement_id, increment).await
    }
}
