//! Stats Cards Component
//!
//! Four counters under the header.

use leptos::prelude::*;

use crate::stats::TaskStats;

#[component]
fn StatCard(
    icon: &'static str,
    label: &'static str,
    class: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <div class="stat-icon">{icon}</div>
            <div>
                <p class="stat-value">{move || value.get()}</p>
                <p class="stat-label">{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatsCards(#[prop(into)] stats: Signal<TaskStats>) -> impl IntoView {
    view! {
        <div class="stats-cards">
            <StatCard
                icon="✅"
                label="Completed"
                class="completed"
                value=Signal::derive(move || stats.get().total_completed.to_string())
            />
            <StatCard
                icon="🔔"
                label="Active"
                class="active"
                value=Signal::derive(move || stats.get().active_reminders.to_string())
            />
            <StatCard
                icon="⚠️"
                label="Overdue"
                class="overdue"
                value=Signal::derive(move || stats.get().overdue_count.to_string())
            />
            <StatCard
                icon="🔥"
                label="Day streak"
                class="streak"
                value=Signal::derive(move || stats.get().streak.to_string())
            />
        </div>
    }
}
