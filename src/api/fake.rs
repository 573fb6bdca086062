//! In-Memory Backend
//!
//! A fake `TaskMasterApi` for controller tests. It keeps users, tasks and
//! achievement counters in memory, applies the same rules the real backend
//! does, records every call and can be told to fail a given operation.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use super::{ApiError, ApiResult, TaskMasterApi};
use crate::models::{
    Achievement, AchievementProgress, NewTask, Task, TaskId, TaskStatus, TaskStatusChange, User,
};

/// Units of progress needed to unlock any fake achievement
const REQUIRED_COUNT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    GetUser,
    CreateUser,
    UpdateUser,
    ListTasks,
    CreateTask,
    UpdateTaskStatus,
    ListAchievements,
    BumpAchievement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetUser(i64),
    CreateUser(i64, Option<String>),
    UpdateUser { user_id: i64, xp_increment: u32, complete_task: bool },
    ListTasks(i64, TaskStatus),
    CreateTask(i64, String),
    UpdateTaskStatus(TaskId, TaskStatus),
    ListAchievements(i64),
    BumpAchievement { user_id: i64, achievement_id: i64, increment: u32 },
}

impl Call {
    fn op(&self) -> Op {
        match self {
            Call::GetUser(_) => Op::GetUser,
            Call::CreateUser(..) => Op::CreateUser,
            Call::UpdateUser { .. } => Op::UpdateUser,
            Call::ListTasks(..) => Op::ListTasks,
            Call::CreateTask(..) => Op::CreateTask,
            Call::UpdateTaskStatus(..) => Op::UpdateTaskStatus,
            Call::ListAchievements(_) => Op::ListAchievements,
            Call::BumpAchievement { .. } => Op::BumpAchievement,
        }
    }
}

#[derive(Default)]
struct Backend {
    users: Vec<User>,
    /// (owner user id, task)
    tasks: Vec<(i64, Task)>,
    achievements: Vec<(i64, String, String)>,
    /// (user id, achievement id) -> raw count
    progress: HashMap<(i64, i64), u32>,
    next_user_id: i64,
    next_task_id: u32,
}

#[derive(Default)]
pub struct FakeApi {
    backend: RefCell<Backend>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Op, ApiError>>,
    interleave: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        {
            let mut backend = api.backend.borrow_mut();
            backend.next_user_id = 1;
            backend.next_task_id = 1;
            backend.achievements = vec![
                (1, "First steps".to_string(), "Create your first tasks".to_string()),
                (2, "Finisher".to_string(), "Complete tasks".to_string()),
            ];
        }
        api
    }

    /// Yield to the executor at the start of every call
    pub fn interleaved(mut self) -> Self {
        self.interleave = true;
        self
    }

    pub fn with_user(self, telegram_id: i64) -> Self {
        {
            let mut backend = self.backend.borrow_mut();
            let id = backend.next_user_id;
            backend.next_user_id += 1;
            backend.users.push(User {
                id,
                telegram_id,
                username: Some("existing".to_string()),
                level: 1,
                xp: 0,
                total_completed: 0,
                streak: 0,
                created_at: Some(Utc::now()),
            });
        }
        self
    }

    pub fn with_task(self, user_id: i64, title: &str, status: TaskStatus) -> Self {
        {
            let mut backend = self.backend.borrow_mut();
            let id = backend.next_task_id;
            backend.next_task_id += 1;
            backend.tasks.push((user_id, fake_task(id, title, status)));
        }
        self
    }

    pub fn fail(&self, op: Op, err: ApiError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn clear_failure(&self, op: Op) {
        self.failures.borrow_mut().remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.borrow().iter().filter(|c| c.op() == op).count()
    }

    pub fn task_status(&self, id: &TaskId) -> Option<TaskStatus> {
        self.backend
            .borrow()
            .tasks
            .iter()
            .find(|(_, t)| &t.id == id)
            .map(|(_, t)| t.status)
    }

    pub fn user_xp(&self, user_id: i64) -> Option<u32> {
        self.backend.borrow().users.iter().find(|u| u.id == user_id).map(|u| u.xp)
    }

    async fn record(&self, call: Call) -> ApiResult<()> {
        if self.interleave {
            tokio::task::yield_now().await;
        }
        let op = call.op();
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn fake_task(id: u32, title: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId(id.to_string()),
        title: title.to_string(),
        description: None,
        interval: Default::default(),
        assigned_to: None,
        status,
        priority: Default::default(),
        reminder_count: 0,
        created_at: Some(Utc::now()),
        completed_at: None,
    }
}

#[async_trait(?Send)]
impl TaskMasterApi for FakeApi {
    async fn get_user(&self, telegram_id: i64) -> ApiResult<User> {
        self.record(Call::GetUser(telegram_id)).await?;
        self.backend
            .borrow()
            .users
            .iter()
            .find(|u| u.telegram_id == telegram_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    async fn create_user(&self, telegram_id: i64, username: Option<&str>) -> ApiResult<User> {
        self.record(Call::CreateUser(telegram_id, username.map(str::to_string))).await?;
        let mut backend = self.backend.borrow_mut();
        let user = User {
            id: backend.next_user_id,
            telegram_id,
            username: username.map(str::to_string),
            level: 1,
            xp: 0,
            total_completed: 0,
            streak: 0,
            created_at: Some(Utc::now()),
        };
        backend.next_user_id += 1;
        backend.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, user_id: i64, xp_increment: u32, complete_task: bool) -> ApiResult<User> {
        self.record(Call::UpdateUser { user_id, xp_increment, complete_task }).await?;
        let mut backend = self.backend.borrow_mut();
        let user = backend
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
        if user.xp + xp_increment >= user.level * 100 {
            user.level += 1;
        }
        user.xp += xp_increment;
        if complete_task {
            user.total_completed += 1;
        }
        Ok(user.clone())
    }

    async fn list_tasks(&self, user_id: i64, status: TaskStatus) -> ApiResult<Vec<Task>> {
        self.record(Call::ListTasks(user_id, status)).await?;
        Ok(self
            .backend
            .borrow()
            .tasks
            .iter()
            .filter(|(owner, t)| *owner == user_id && t.status == status)
            .map(|(_, t)| t.clone())
            .collect())
    }

    async fn create_task(&self, user_id: i64, task: &NewTask) -> ApiResult<Task> {
        self.record(Call::CreateTask(user_id, task.title.clone())).await?;
        let mut backend = self.backend.borrow_mut();
        let id = backend.next_task_id;
        backend.next_task_id += 1;
        let mut created = fake_task(id, &task.title, TaskStatus::Active);
        created.description = Some(task.description.clone());
        created.interval = task.interval;
        created.assigned_to = task.assigned_to.clone();
        created.priority = task.priority;
        backend.tasks.push((user_id, created.clone()));
        Ok(created)
    }

    async fn update_task_status(&self, task_id: &TaskId, status: TaskStatus) -> ApiResult<TaskStatusChange> {
        self.record(Call::UpdateTaskStatus(task_id.clone(), status)).await?;
        let mut backend = self.backend.borrow_mut();
        let (_, task) = backend
            .tasks
            .iter_mut()
            .find(|(_, t)| &t.id == task_id)
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
        task.status = status;
        if status == TaskStatus::Completed {
            task.completed_at = Some(Utc::now());
        }
        Ok(TaskStatusChange {
            id: task.id.clone(),
            status,
            completed_at: task.completed_at,
        })
    }

    async fn list_achievements(&self, user_id: i64) -> ApiResult<Vec<Achievement>> {
        self.record(Call::ListAchievements(user_id)).await?;
        let backend = self.backend.borrow();
        Ok(backend
            .achievements
            .iter()
            .map(|(id, title, description)| {
                let count = backend.progress.get(&(user_id, *id)).copied().unwrap_or(0);
                Achievement {
                    id: id.to_string(),
                    title: title.clone(),
                    description: description.clone(),
                    icon: "Trophy".to_string(),
                    progress: (count * 100 / REQUIRED_COUNT).min(100) as u8,
                    unlocked: count >= REQUIRED_COUNT,
                    unlocked_at: None,
                }
            })
            .collect())
    }

    async fn bump_achievement_progress(
        &self,
        user_id: i64,
        achievement_id: i64,
        increment: u32,
    ) -> ApiResult<AchievementProgress> {
        self.record(Call::BumpAchievement { user_id, achievement_id, increment }).await?;
        let mut backend = self.backend.borrow_mut();
        if !backend.achievements.iter().any(|(id, ..)| *id == achievement_id) {
            return Err(ApiError::NotFound("Achievement not found".to_string()));
        }
        let count = backend.progress.entry((user_id, achievement_id)).or_insert(0);
        *count += increment;
        Ok(AchievementProgress {
            progress: *count,
            unlocked: *count >= REQUIRED_COUNT,
        })
    }
}
