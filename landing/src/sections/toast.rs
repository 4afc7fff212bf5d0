use lead_capture::{NOTIFICATION_TTL, Notification, NotificationKind};
use leptos::prelude::*;

use crate::dialog::use_lead_dialog;

#[component]
pub fn Toast() -> impl IntoView {
    let dialog = use_lead_dialog();
    // tracks the whole notification so a replacement re-renders the bar
    let current = Memo::new(move |_| dialog.controller.with(|c| c.notification().cloned()));

    move || {
        current.get().map(|notification| {
            let Notification { kind, title, message, .. } = notification;
            let icon = match kind {
                NotificationKind::Success => "✓",
                NotificationKind::Error => "✕",
            };
            let bar_style = format!("animation-duration: {}ms", NOTIFICATION_TTL.as_millis());
            view! {
                <div class="toast-container" role="status" aria-live="polite">
                    <div class=format!("toast {}", kind.as_label())>
                        <div class="toast-body">
                            <span class="toast-icon">{icon}</span>
                            <div class="toast-text">
                                <h3 class="toast-title">{title}</h3>
                                <p class="toast-message">{message}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Fechar"
                                on:click=move |_| dialog.dismiss_notification()
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="toast-progress">
                            <div class="toast-progress-bar" style=bar_style></div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
