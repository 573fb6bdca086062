//! Achievements Tab Component

use leptos::prelude::*;

use super::ProgressBar;
use crate::models::Achievement;

/// Emoji for an icon name sent by the backend
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Trophy" => "🏆",
        "Star" => "⭐",
        "Flame" => "🔥",
        "Target" => "🎯",
        "Zap" => "⚡",
        "Award" | "Medal" => "🏅",
        "Crown" => "👑",
        "Rocket" => "🚀",
        "CheckCircle" | "CheckCircle2" => "✅",
        "Calendar" => "📅",
        "Clock" => "⏰",
        _ => "🎖️",
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let card_class = if achievement.unlocked { "achievement-card unlocked" } else { "achievement-card locked" };

    view! {
        <div class=card_class>
            <div class="achievement-icon">{icon_glyph(&achievement.icon)}</div>
            <div class="achievement-body">
                <div class="achievement-title-row">
                    <h3>{achievement.title.clone()}</h3>
                    {achievement.unlocked.then(|| view! { <span class="badge gold">"✓ Unlocked"</span> })}
                </div>
                <p class="muted">{achievement.description.clone()}</p>
                <div class="achievement-progress-row">
                    <span>"Progress"</span>
                    <span class="achievement-percent">{format!("{}%", achievement.progress)}</span>
                </div>
                <ProgressBar percent=achievement.progress />
            </div>
        </div>
    }
}

#[component]
pub fn AchievementsTab(#[prop(into)] achievements: Signal<Vec<Achievement>>) -> impl IntoView {
    view! {
        <section class="achievements-tab">
            <div class="achievement-grid">
                <For
                    each=move || achievements.get()
                    key=|a| (a.id.clone(), a.progress, a.unlocked)
                    children=|achievement| view! { <AchievementCard achievement=achievement /> }
                />
            </div>

            <div class="card encouragement">
                <div class="sparkle">"✨"</div>
                <h3>"Keep it up! 🚀"</h3>
                <p class="muted">"Complete tasks to unlock new achievements"</p>
            </div>
        </section>
    }
}
