//! Task List Component
//!
//! Cards for every task that is not completed yet, or an empty-state
//! message when there are none.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::models::{Priority, Task, TaskId, TaskStatus};

/// What the list shows for a given cache
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Empty,
    Tasks(Vec<Task>),
}

pub fn list_content(tasks: &[Task]) -> ListContent {
    let pending: Vec<Task> = tasks.iter().filter(|t| t.is_pending()).cloned().collect();
    if pending.is_empty() {
        ListContent::Empty
    } else {
        ListContent::Tasks(pending)
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge priority-high",
        Priority::Medium => "badge priority-medium",
        Priority::Low => "badge priority-low",
    }
}

fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✅",
        TaskStatus::Overdue => "⚠️",
        TaskStatus::Active => "🕒",
    }
}

/// A single task card
#[component]
fn TaskCard(
    task: Task,
    #[prop(into)] pending: Signal<bool>,
    on_complete: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id.clone();
    let overdue = task.status == TaskStatus::Overdue;
    let description = task.description.clone().filter(|d| !d.is_empty());

    view! {
        <div class=if overdue { "task-card overdue" } else { "task-card" }>
            <div class="task-main">
                <div class="task-title-row">
                    <span class="task-status">{status_icon(task.status)}</span>
                    <h3 class="task-title">{task.title.clone()}</h3>
                    <span class=priority_class(task.priority)>{task.priority.label()}</span>
                    {overdue.then(|| view! { <span class="badge overdue">"Overdue"</span> })}
                </div>

                {description.map(|d| view! { <p class="task-description">{d}</p> })}

                <div class="task-meta">
                    <span class="task-interval">{task.interval.label()}</span>
                    {task.assigned_to.clone().map(|who| view! { <span>"👤 " {who}</span> })}
                    <span>"🔔 " {task.reminder_count} " reminders"</span>
                </div>
            </div>

            <button
                class="complete-btn"
                disabled=move || pending.get()
                on:click=move |_| on_complete.run(id.clone())
            >
                {move || if pending.get() { "…" } else { "✓ Done" }}
            </button>
        </div>
    }
}

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] in_flight: Signal<HashSet<TaskId>>,
    #[prop(into)] on_complete: Callback<TaskId>,
) -> impl IntoView {
    view! {
        <section class="task-list">
            {move || match tasks.with(|t| list_content(t)) {
                ListContent::Empty => view! {
                    <div class="empty-state">
                        <div class="empty-icon">"🎉"</div>
                        <h3>"All tasks completed!"</h3>
                        <p>"Create a new task to keep leveling up"</p>
                    </div>
                }.into_any(),
                ListContent::Tasks(pending_tasks) => view! {
                    <For
                        each=move || pending_tasks.clone()
                        key=|task| (task.id.clone(), task.status)
                        children=move |task| {
                            let id = task.id.clone();
                            let pending = Signal::derive(move || in_flight.with(|set| set.contains(&id)));
                            view! { <TaskCard task=task pending=pending on_complete=on_complete /> }
                        }
                    />
                }.into_any(),
            }}
        </section>
    }
}
