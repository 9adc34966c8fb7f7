use dioxus::prelude::*;

use crate::format::format_count;
use crate::stats::ReportStats;

#[component]
pub fn StatsCards(stats: ReportStats) -> Element {
    let inspected = format_count(stats.total_inspected);
    let affected = format_count(stats.total_affected);
    let percentage = format!("{}%", stats.percentage_label());

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-6",
            StatCard { label: "Total Inspected", value: inspected, accent: "bg-green-500" }
            StatCard { label: "Affected Trees", value: affected, accent: "bg-yellow-500" }
            StatCard { label: "Affected Percentage", value: percentage, accent: "bg-red-500" }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, accent: &'static str) -> Element {
    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-6 shadow-sm transition-shadow hover:shadow-lg",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "mb-1 text-gray-600", "{label}" }
                    h2 { class: "text-3xl font-bold text-gray-800", "{value}" }
                }
                span { class: format!("h-10 w-10 rounded-full opacity-80 {}", accent) }
            }
        }
    }
}
