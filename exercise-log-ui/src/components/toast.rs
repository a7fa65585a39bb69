//! Toast Notification Component
//!
//! Shows the success and error notices held in [`GlobalState`]. Notices
//! clear themselves after a timeout or when dismissed.

use leptos::*;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2" role="status">
            {move || {
                state.success.get().map(|msg| view! {
                    <Notice message=msg kind=NoticeKind::Success dismiss=state.success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <Notice message=msg kind=NoticeKind::Error dismiss=state.error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum NoticeKind {
    Success,
    Error,
}

#[component]
fn Notice(
    message: String,
    kind: NoticeKind,
    dismiss: RwSignal<Option<String>>,
) -> impl IntoView {
    let (icon, bg_class) = match kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                class="ml-2 text-white/70 hover:text-white"
                title="Dismiss"
                on:click=move |_| dismiss.set(None)
            >
                "×"
            </button>
        </div>
    }
}
