//! Derived Statistics
//!
//! Numbers computed from the loaded cache for display. Nothing here is
//! authoritative: level and XP thresholds belong to the backend.

use chrono::{Datelike, Duration, NaiveDate, TimeZone};

use crate::models::{Interval, Task, TaskStatus, User};

/// XP per level used for the progress bar
pub const XP_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total_completed: u32,
    pub active_reminders: usize,
    pub overdue_count: usize,
    pub streak: u32,
}

impl TaskStats {
    /// Counts come from the task list, totals from the user record
    pub fn derive(user: Option<&User>, tasks: &[Task]) -> Self {
        Self {
            total_completed: user.map_or(0, |u| u.total_completed),
            active_reminders: count_status(tasks, TaskStatus::Active),
            overdue_count: count_status(tasks, TaskStatus::Overdue),
            streak: user.map_or(0, |u| u.streak),
        }
    }
}

pub fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

/// Display hint for the level bar (`level * 100` is a client approximation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub percent: u8,
    pub remaining: u32,
}

impl LevelProgress {
    pub fn new(level: u32, xp: u32) -> Self {
        let level = level.max(1);
        let next_level_xp = level.saturating_mul(XP_PER_LEVEL);
        let percent = (u64::from(xp) * 100 / u64::from(next_level_xp)).min(100) as u8;
        Self {
            level,
            xp,
            next_level_xp,
            percent,
            remaining: next_level_xp.saturating_sub(xp),
        }
    }

    pub fn for_user(user: Option<&User>) -> Self {
        user.map_or_else(|| Self::new(1, 0), |u| Self::new(u.level, u.xp))
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// Completions on one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCompletions {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
    /// Relative to the busiest day of the window
    pub percent: u8,
}

/// The seven days ending with `today`, oldest first. Completion times are
/// bucketed by their calendar day in `tz`.
pub fn weekly_completions<Tz: TimeZone>(tasks: &[Task], today: NaiveDate, tz: &Tz) -> Vec<DayCompletions> {
    let days: Vec<NaiveDate> = (0..7).rev().map(|back| today - Duration::days(back)).collect();
    let counts: Vec<usize> = days
        .iter()
        .map(|day| {
            tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .filter_map(|t| t.completed_at)
                .filter(|at| at.with_timezone(tz).date_naive() == *day)
                .count()
        })
        .collect();
    let busiest = counts.iter().copied().max().unwrap_or(0);

    days.into_iter()
        .zip(counts)
        .map(|(date, count)| DayCompletions {
            label: date.weekday().to_string(),
            date,
            count,
            percent: if busiest == 0 { 0 } else { (count * 100 / busiest) as u8 },
        })
        .collect()
}

/// Number of loaded tasks per interval, most used first
pub fn interval_breakdown(tasks: &[Task]) -> Vec<(Interval, usize)> {
    let mut breakdown: Vec<(Interval, usize)> = Interval::ALL
        .into_iter()
        .map(|interval| (interval, tasks.iter().filter(|t| t.interval == interval).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    // Stable sort keeps the declaration order for ties
    breakdown.sort_by(|a, b| b.1.cmp(&a.1));
    breakdown
}
