//! TaskMaster App
//!
//! Root component. Owns the page controller and wires store fields to the
//! view components.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::{
    AchievementsTab, CreateTaskForm, SessionLog, StatsCards, StatsTab, TabBar, TaskList, ToastStack,
    UserHeader,
};
use crate::controller::PageController;
use crate::models::{DraftEdit, TaskId};
use crate::stats::{LevelProgress, TaskStats};
use crate::store::{PageStateStoreFields, Tab};

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner">"🎮"</div>
            <p>"Loading…"</p>
        </div>
    }
}

#[component]
pub fn App(controller: PageController<HttpApi>) -> impl IntoView {
    let store = controller.store();
    // The controller holds `Rc`s, so it lives in local storage
    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            // Failures are already shown as notices
            let _ = ctrl.load().await;
        });
    });

    // Derived view state
    let loading = Signal::derive(move || store.loading().get());
    let progress = Signal::derive(move || store.user().with(|u| LevelProgress::for_user(u.as_ref())));
    let username = Signal::derive(move || store.user().with(|u| u.as_ref().and_then(|u| u.username.clone())));
    let stats = Signal::derive(move || {
        let tasks = store.tasks().read();
        store.user().with(|u| TaskStats::derive(u.as_ref(), &tasks))
    });
    let total_completed = Signal::derive(move || store.user().with(|u| u.as_ref().map_or(0, |u| u.total_completed)));
    let tasks = Signal::derive(move || store.tasks().get());
    let in_flight = Signal::derive(move || store.in_flight().get());
    let draft = Signal::derive(move || store.draft().get());
    let achievements = Signal::derive(move || store.achievements().get());
    let active_tab = Signal::derive(move || store.active_tab().get());
    let notices = Signal::derive(move || store.notices().get());

    // User intents
    let on_complete = Callback::new(move |task_id: TaskId| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            let _ = ctrl.complete_task(&task_id).await;
        });
    });
    let on_create = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            let _ = ctrl.create_task().await;
        });
    });
    let on_edit = Callback::new(move |edit: DraftEdit| controller.with_value(|c| c.edit_draft(edit)));
    let on_select = Callback::new(move |tab: Tab| controller.with_value(|c| c.select_tab(tab)));
    let on_dismiss = Callback::new(move |id: u64| controller.with_value(|c| c.dismiss_notice(id)));

    view! {
        <div class="app-layout">
            <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen /> }>
                <main class="main-content">
                    <UserHeader progress=progress username=username />
                    <StatsCards stats=stats />
                    <TabBar active=active_tab on_select=on_select />

                    {move || match active_tab.get() {
                        Tab::Tasks => view! {
                            <TaskList tasks=tasks in_flight=in_flight on_complete=on_complete />
                        }.into_any(),
                        Tab::Create => view! {
                            <CreateTaskForm draft=draft on_edit=on_edit on_submit=on_create />
                        }.into_any(),
                        Tab::Stats => view! {
                            <StatsTab tasks=tasks total_completed=total_completed />
                        }.into_any(),
                        Tab::Achievements => view! {
                            <AchievementsTab achievements=achievements />
                        }.into_any(),
                    }}
                </main>
            </Show>

            <SessionLog />
            <ToastStack notices=notices on_dismiss=on_dismiss />
        </div>
    }
}
