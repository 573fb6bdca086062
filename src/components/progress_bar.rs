//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `percent` (0-100)
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<u8>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("progress {}", class)>
            <div
                class="progress-fill"
                style=move || format!("width: {}%;", percent.get().min(100))
            ></div>
        </div>
    }
}
