use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::state::{use_app_actions, use_app_state, Notification, NotificationKind};
use crate::APP_CONFIG;

const FALLBACK_DISMISS: Duration = Duration::from_millis(4_000);

fn accent_classes(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
        NotificationKind::Error => ("border-red-500 bg-red-50", "text-red-700"),
        NotificationKind::Warning => ("border-amber-500 bg-amber-50", "text-amber-700"),
        NotificationKind::Info => ("border-slate-500 bg-slate-50", "text-slate-700"),
    }
}

fn title(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "Success",
        NotificationKind::Error => "Error",
        NotificationKind::Warning => "Warning",
        NotificationKind::Info => "Notice",
    }
}

#[component]
fn Toast(notification: Notification) -> Element {
    let actions = use_app_actions();
    let id = notification.id;

    use_future(move || async move {
        let lifetime = APP_CONFIG
            .get()
            .map(|config| config.toast_dismiss)
            .unwrap_or(FALLBACK_DISMISS);
        let millis = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
        actions.dismiss_notification(id);
    });

    let (container_class, accent_text) = accent_classes(notification.kind);
    let heading = title(notification.kind);

    rsx! {
        div { class: format!("pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {}", container_class),
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: format!("text-sm font-semibold {}", accent_text), "{heading}" }
                    p { class: "text-xs text-slate-700", "{notification.message}" }
                }
                button {
                    class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                    onclick: move |_| actions.dismiss_notification(id),
                    "Close"
                }
            }
        }
    }
}

#[component]
pub fn NotificationCenter() -> Element {
    let notifications = use_app_state().read().notifications.clone();

    if notifications.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
            for notification in notifications {
                Toast { key: "{notification.id}", notification: notification.clone() }
            }
        }
    }
}
