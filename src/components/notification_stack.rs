//! Stack of toast notifications, newest on top.

use leptos::prelude::*;

use crate::state::admin::Event;
use crate::state::notify::{Notification, NotificationId, NotifyPhase};
use crate::util::dispatch::Dispatcher;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let ids = Memo::new(move |_| {
        state.with(|s| s.notifications().map(|c| c.iter().map(|n| n.id).collect::<Vec<_>>()).unwrap_or_default())
    });

    view! {
        <div class="admin-notify-root" aria-live="polite">
            <For each=move || ids.get() key=|id| *id let:id>
                <NotificationCard id/>
            </For>
        </div>
    }
}

/// One toast. Content is fixed at creation; only phase and the copy label change.
#[component]
fn NotificationCard(id: NotificationId) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let snapshot = Memo::new(move |_| state.with(|s| s.notifications().and_then(|c| c.get(id).cloned())));
    let phase = move || snapshot.with(|n| n.as_ref().map_or(NotifyPhase::Leaving, |n| n.phase));
    let copied = move || snapshot.with(|n| n.as_ref().is_some_and(|n| n.copied));

    let width = state.with_untracked(|s| s.config().tx_display_width);
    let Some(note) = snapshot.get_untracked() else {
        return ().into_any();
    };
    let Notification { kind, title, message, .. } = note.clone();
    let tx = note.tx_ref.clone().zip(note.display_tx(width));

    view! {
        <div
            class=format!("admin-notify {}", kind.class())
            class:show=move || phase() == NotifyPhase::Shown
            style:pointer-events=move || if phase() == NotifyPhase::Leaving { "none" } else { "auto" }
        >
            <div class="notify-icon">{kind.icon()}</div>
            <div class="notify-body">
                <div class="notify-title">{title}</div>
                <div class="notify-msg">{message}</div>
                {tx
                    .map(|(full, shown)| {
                        view! {
                            <div class="notify-msg">
                                <small>
                                    "TX: "
                                    <span class="notify-tx" data-tx=full>
                                        {shown}
                                    </span>
                                    " "
                                    <button
                                        class="btn btn-sm btn-link btn-copy-tx"
                                        on:click=move |_| dispatcher.dispatch(Event::NotifyCopy(id))
                                    >
                                        {move || if copied() { "Copied" } else { "Copy" }}
                                    </button>
                                </small>
                            </div>
                        }
                    })}
            </div>
            <div class="notify-actions">
                <button
                    class="notify-close"
                    aria-label="Close"
                    on:click=move |_| dispatcher.dispatch(Event::NotifyDismiss(id))
                >
                    "×"
                </button>
            </div>
        </div>
    }
    .into_any()
}
