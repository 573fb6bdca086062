//! Toast Stack Component
//!
//! Renders pending notices. Each toast removes itself after a delay or when
//! clicked.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{Notice, NoticeKind};

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 4_000;

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast success",
        NoticeKind::Error => "toast error",
        NoticeKind::Validation => "toast warning",
    }
}

#[component]
fn Toast(notice: Notice, on_dismiss: Callback<u64>) -> impl IntoView {
    let id = notice.id;
    Timeout::new(TOAST_MILLIS, move || on_dismiss.run(id)).forget();

    view! {
        <div class=kind_class(notice.kind) role="status" on:click=move |_| on_dismiss.run(id)>
            <strong class="toast-title">{notice.title}</strong>
            {(!notice.body.is_empty()).then(|| view! { <p class="toast-body">{notice.body}</p> })}
        </div>
    }
}

#[component]
pub fn ToastStack(
    #[prop(into)] notices: Signal<Vec<Notice>>,
    #[prop(into)] on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice on_dismiss=on_dismiss /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes_differ() {
        let classes = [
            kind_class(NoticeKind::Success),
            kind_class(NoticeKind::Error),
            kind_class(NoticeKind::Validation),
        ];
        assert_eq!(classes[0], "toast success");
        assert_ne!(classes[1], classes[2]);
    }
}
