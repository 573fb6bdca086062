//! User Header Component
//!
//! Title plus the level badge and XP bar.

use leptos::prelude::*;

use super::ProgressBar;
use crate::stats::LevelProgress;

#[component]
pub fn UserHeader(
    #[prop(into)] progress: Signal<LevelProgress>,
    #[prop(into)] username: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <header class="user-header">
            <div>
                <h1 class="app-title">"TaskMaster Bot 🎮"</h1>
                <p class="app-subtitle">
                    {move || match username.get() {
                        Some(name) => format!("Hi, {}! Turn tasks into achievements!", name),
                        None => "Turn tasks into achievements!".to_string(),
                    }}
                </p>
            </div>

            <div class="level-card">
                <div class="level-badge">{move || progress.get().level}</div>
                <div class="level-details">
                    <div class="level-row">
                        <span class="level-label">{move || format!("Level {}", progress.get().level)}</span>
                        <span class="level-xp">
                            {move || {
                                let p = progress.get();
                                format!("{}/{} XP", p.xp, p.next_level_xp)
                            }}
                        </span>
                    </div>
                    <ProgressBar percent=Signal::derive(move || progress.get().percent) />
                    <p class="level-remaining">
                        {move || format!("Next level in {} XP", progress.get().remaining)}
                    </p>
                </div>
            </div>
        </header>
    }
}
