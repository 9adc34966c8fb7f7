use dioxus::prelude::*;

use crate::format::{format_percentage, format_report_date, format_rupees, local_offset};
use crate::hooks::reports::download_pdf;
use crate::models::Report;
use crate::state::use_app_actions;

const HEAD_CELL: &str = "px-6 py-3 text-left text-xs font-semibold uppercase tracking-wider text-gray-700";
const CELL: &str = "px-6 py-4 align-top text-sm text-gray-700";

#[component]
pub fn ReportTable(reports: Vec<Report>, incentive_rate: u64) -> Element {
    rsx! {
        div { class: "overflow-x-auto rounded-lg bg-white shadow",
            table { class: "min-w-[1200px] w-full divide-y divide-gray-200",
                thead { class: "bg-gray-50",
                    tr {
                        th { class: HEAD_CELL, "Report ID" }
                        th { class: HEAD_CELL, "Submitted By" }
                        th { class: HEAD_CELL, "Location" }
                        th { class: HEAD_CELL, "Status" }
                        th { class: HEAD_CELL, "Plants" }
                        th { class: HEAD_CELL, "Incentive" }
                        th { class: HEAD_CELL, "Actions" }
                    }
                }
                tbody { class: "divide-y divide-gray-200",
                    for report in reports {
                        ReportRow { key: "{report.id}", report: report.clone(), incentive_rate: incentive_rate }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportRow(report: Report, incentive_rate: u64) -> Element {
    let actions = use_app_actions();

    let created = report
        .created_at
        .as_deref()
        .map(|raw| format_report_date(raw, local_offset()))
        .unwrap_or_default();
    let percentage = format_percentage(report.affected_percentage());
    let badge = report.severity().badge_classes();
    let incentive = format_rupees(report.incentive(incentive_rate));

    let pdf_id = report.id.clone();
    let delete_target = report.clone();

    rsx! {
        tr { class: "bg-white hover:bg-gray-50",
            td { class: format!("{CELL} font-semibold text-gray-900"), "{report.unique_id}" }
            td { class: CELL,
                div { class: "flex flex-col",
                    span { class: "font-medium", "{report.full_name}" }
                    span { class: "text-sm text-gray-500", "{created}" }
                }
            }
            td { class: CELL,
                div { class: "flex flex-col",
                    span { "{report.district}" }
                    span { class: "text-sm text-gray-500", "{report.regional_division}" }
                }
            }
            td { class: CELL,
                span { class: format!("w-fit rounded-full px-3 py-1 text-xs font-medium {badge}"),
                    "{percentage}% Affected"
                }
            }
            td { class: CELL,
                div { class: "flex flex-col",
                    span { "Total: {report.number_of_plants}" }
                    span { class: "text-red-600", "Affected: {report.affected_plants}" }
                }
            }
            td { class: format!("{CELL} font-semibold"), "{incentive}" }
            td { class: CELL,
                div { class: "flex gap-2",
                    button {
                        class: "rounded bg-cyan-600 px-3 py-1 text-xs font-semibold text-white hover:bg-cyan-500",
                        onclick: move |_| download_pdf(actions, &pdf_id),
                        "PDF"
                    }
                    button {
                        class: "rounded bg-red-600 px-3 py-1 text-xs font-semibold text-white hover:bg-red-500",
                        title: "Delete report",
                        onclick: move |_| actions.request_delete(delete_target.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
