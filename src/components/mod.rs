//! UI Components
//!
//! Presentational Leptos components. They read signals and report user
//! intent through callbacks; none of them talks to the backend.

mod progress_bar;
mod user_header;
mod stats_cards;
mod tab_bar;
mod task_list;
mod create_task_form;
mod stats_tab;
mod achievements_tab;
mod toast_stack;
mod session_log;

pub use progress_bar::ProgressBar;
pub use user_header::UserHeader;
pub use stats_cards::StatsCards;
pub use tab_bar::TabBar;
pub use task_list::TaskList;
pub use create_task_form::CreateTaskForm;
pub use stats_tab::StatsTab;
pub use achievements_tab::AchievementsTab;
pub use toast_stack::ToastStack;
pub use session_log::SessionLog;
