//! Session Log Component
//!
//! Collapsible footer listing what the session logger captured, for bug
//! reports from users who have no developer console.

use leptos::prelude::*;
use log::Level;
use session_logger::LogLine;

/// CSS class and text for each captured line, oldest first
pub fn log_rows(lines: &[LogLine]) -> Vec<(&'static str, String)> {
    lines
        .iter()
        .map(|line| {
            let class = match line.level {
                Level::Error => "log-line error",
                Level::Warn => "log-line warn",
                Level::Info => "log-line info",
                Level::Debug | Level::Trace => "log-line debug",
            };
            (class, line.to_string())
        })
        .collect()
}

#[component]
pub fn SessionLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<LogLine>::new());

    // Snapshot on open; the buffer itself is not reactive
    let toggle = move |_| {
        if !open.get_untracked() {
            set_lines.set(session_logger::recent_lines());
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <footer class="session-log">
            <button type="button" class="link-btn" on:click=toggle>
                {move || if open.get() { "Hide session log" } else { "Show session log" }}
            </button>
            <Show when=move || open.get()>
                <div class="session-log-lines">
                    {move || lines.with(|l| log_rows(l)).into_iter().map(|(class, text)| view! {
                        <div class=class>{text}</div>
                    }).collect_view()}
                    {move || lines.with(|l| l.is_empty()).then(|| view! { <p class="muted">"Nothing logged yet"</p> })}
                </div>
            </Show>
        </footer>
    }
}
