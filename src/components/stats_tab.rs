//! Stats Tab Component
//!
//! Weekly completion chart, reminder interval breakdown and the archive
//! counter. Everything is derived from the loaded tasks.

use chrono::Local;
use leptos::prelude::*;

use super::ProgressBar;
use crate::models::Task;
use crate::stats::{interval_breakdown, weekly_completions};

#[component]
pub fn StatsTab(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] total_completed: Signal<u32>,
) -> impl IntoView {
    let week = Memo::new(move |_| tasks.with(|t| weekly_completions(t, Local::now().date_naive(), &Local)));
    let intervals = Memo::new(move |_| tasks.with(|t| interval_breakdown(t)));

    view! {
        <section class="stats-tab">
            <div class="card">
                <h3>"📈 Weekly progress"</h3>
                <div class="week-chart">
                    {move || week.get().into_iter().map(|day| view! {
                        <div class="week-day">
                            <div class="week-day-row">
                                <span class="week-day-label">{day.label.clone()}</span>
                                <span class="week-day-count">{format!("{} completed", day.count)}</span>
                            </div>
                            <ProgressBar percent=day.percent class="thick" />
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h3>"🎯 Reminder intervals"</h3>
                    {move || {
                        let rows = intervals.get();
                        if rows.is_empty() {
                            view! { <p class="muted">"No tasks yet"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="interval-list">
                                    {rows.into_iter().map(|(interval, count)| view! {
                                        <li>
                                            <span class="interval-name">{interval.label()}</span>
                                            <span class="badge">{count}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </div>

                <div class="card archive">
                    <h3>"📅 Task archive"</h3>
                    <div class="archive-icon">"🗄️"</div>
                    <p class="muted">{move || format!("Tasks completed: {}", total_completed.get())}</p>
                </div>
            </div>
        </section>
    }
}
