//! Create Task Form Component
//!
//! Controlled form over the draft held in the page store. Every keystroke is
//! sent back as a `DraftEdit`; submission is handled by the controller.

use leptos::prelude::*;

use crate::models::{DraftEdit, Interval, Priority, TaskDraft};

#[component]
pub fn CreateTaskForm(
    #[prop(into)] draft: Signal<TaskDraft>,
    #[prop(into)] on_edit: Callback<DraftEdit>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="create-task-form" on:submit=submit>
            <h2>"New task"</h2>

            <label class="field">
                <span>"Title"</span>
                <input
                    type="text"
                    placeholder="e.g. Drink a glass of water"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| on_edit.run(DraftEdit::Title(event_target_value(&ev)))
                />
            </label>

            <label class="field">
                <span>"Description"</span>
                <textarea
                    rows="3"
                    placeholder="Optional details"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| on_edit.run(DraftEdit::Description(event_target_value(&ev)))
                ></textarea>
            </label>

            <div class="field-row">
                <label class="field">
                    <span>"Reminder interval"</span>
                    <select
                        prop:value=move || draft.with(|d| d.interval.as_str())
                        on:change=move |ev| {
                            if let Some(interval) = Interval::parse(&event_target_value(&ev)) {
                                on_edit.run(DraftEdit::Interval(interval));
                            }
                        }
                    >
                        {Interval::ALL.into_iter().map(|interval| view! {
                            <option
                                value=interval.as_str()
                                selected=move || draft.with(|d| d.interval == interval)
                            >
                                {interval.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="field">
                    <span>"Priority"</span>
                    <select
                        prop:value=move || draft.with(|d| d.priority.as_str())
                        on:change=move |ev| {
                            if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                on_edit.run(DraftEdit::Priority(priority));
                            }
                        }
                    >
                        {Priority::ALL.into_iter().map(|priority| view! {
                            <option
                                value=priority.as_str()
                                selected=move || draft.with(|d| d.priority == priority)
                            >
                                {priority.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <label class="field">
                <span>"Assign to"</span>
                <input
                    type="text"
                    placeholder="@username (optional)"
                    prop:value=move || draft.with(|d| d.assigned_to.clone())
                    on:input=move |ev| on_edit.run(DraftEdit::Assignee(event_target_value(&ev)))
                />
            </label>

            <button type="submit" class="primary-btn">"✨ Create task"</button>
        </form>
    }
}
