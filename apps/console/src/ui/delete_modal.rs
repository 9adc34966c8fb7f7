use dioxus::prelude::*;

use crate::hooks::reports::confirm_delete;
use crate::state::{use_app_actions, DeleteState};

/// Confirmation dialog for the report selected for deletion.
#[component]
pub fn DeleteModal(delete: DeleteState) -> Element {
    let actions = use_app_actions();

    let Some(report) = delete.target else {
        return rsx! { Fragment {} };
    };
    let busy = delete.in_flight;

    rsx! {
        div { class: "fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50",
            div { class: "w-full max-w-md rounded-lg bg-white shadow-xl",
                header { class: "flex items-center justify-between border-b border-gray-200 px-5 py-4",
                    h3 { class: "text-lg font-semibold text-gray-900", "Confirm Deletion" }
                    button {
                        class: "text-gray-400 hover:text-gray-600",
                        disabled: busy,
                        onclick: move |_| actions.cancel_delete(),
                        "✕"
                    }
                }
                div { class: "p-6 text-center",
                    h3 { class: "mb-5 text-lg font-normal text-gray-500",
                        "Are you sure you want to delete report {report.unique_id}?"
                    }
                    div { class: "flex justify-center gap-4",
                        button {
                            class: "rounded-lg bg-red-600 px-4 py-2 text-sm font-semibold text-white hover:bg-red-500 disabled:opacity-50",
                            disabled: busy,
                            onclick: move |_| confirm_delete(actions),
                            if busy { "Deleting..." } else { "Yes, delete it" }
                        }
                        button {
                            class: "rounded-lg border border-gray-300 bg-white px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 disabled:opacity-50",
                            disabled: busy,
                            onclick: move |_| actions.cancel_delete(),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
