use dioxus::prelude::*;

use crate::hooks::reports::{export_reports, use_report_loader};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::delete_modal::DeleteModal;
use crate::ui::filters::FilterBar;
use crate::ui::stats::StatsCards;
use crate::ui::table::ReportTable;
use crate::APP_CONFIG;

#[component]
pub fn ReportsPage() -> Element {
    use_report_loader();

    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();

    if let Some(err) = snapshot.list.load_error.as_ref() {
        return rsx! {
            div { class: "py-12 text-center text-red-500",
                "Error: {err}. Please try reloading the page."
            }
        };
    }

    let (incentive_rate, create_url) = APP_CONFIG
        .get()
        .map(|config| (config.incentive_rate, config.create_report_url.clone()))
        .unwrap_or_default();

    let list = snapshot.list;
    let export_source = list.reports.clone();

    let body = if list.is_loading {
        rsx! {
            div { class: "py-12 text-center",
                span {
                    class: "inline-block h-10 w-10 animate-spin rounded-full border-4 border-cyan-600 border-t-transparent",
                    aria_label: "Loading reports...",
                }
                p { class: "mt-3 text-gray-600", "Loading reports..." }
            }
        }
    } else if list.reports.is_empty() {
        rsx! {
            div { class: "rounded-lg bg-white py-12 text-center",
                h3 { class: "mb-2 text-xl font-semibold", "No Reports Found" }
                p { class: "mb-4 text-gray-600", "Try adjusting your filters or create a new report." }
            }
        }
    } else {
        rsx! {
            ReportTable { reports: list.reports.clone(), incentive_rate: incentive_rate }
        }
    };

    rsx! {
        div { class: "p-4",
            h1 { class: "mb-6 text-3xl font-bold text-gray-800", "Coconut Disease Monitoring" }

            StatsCards { stats: list.stats.clone() }
            FilterBar { filters: snapshot.filters.clone() }

            div { class: "mb-6 flex flex-col items-center justify-between gap-4 md:flex-row",
                div { class: "flex items-center gap-2",
                    a {
                        class: "rounded-lg bg-cyan-600 px-4 py-2 text-sm font-semibold text-white hover:bg-cyan-500",
                        href: "{create_url}",
                        "New Report"
                    }
                    button {
                        class: "rounded-lg bg-pink-600 px-4 py-2 text-sm font-semibold text-white hover:bg-pink-500",
                        onclick: move |_| export_reports(actions, &export_source),
                        "Export Data"
                    }
                }
            }

            {body}

            DeleteModal { delete: snapshot.delete.clone() }
        }
    }
}
