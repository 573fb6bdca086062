//! Tab Bar Component
//!
//! Switches between the four page sections.

use leptos::prelude::*;

use crate::store::Tab;

#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if active.get() == tab { "tab active" } else { "tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| on_select.run(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
