use dioxus::prelude::*;

use crate::date_range::local_now;
use crate::models::TimeRange;
use crate::regions::{districts_for, PROVINCES};
use crate::state::{use_app_actions, FilterField, ReportFilters};

const LABEL_CLASS: &str = "mb-1 block text-sm font-medium text-gray-700";
const CONTROL_CLASS: &str = "w-full rounded-lg border border-slate-300 bg-gray-50 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-cyan-500 disabled:cursor-not-allowed disabled:opacity-50";

#[component]
pub fn FilterBar(filters: ReportFilters) -> Element {
    let actions = use_app_actions();

    let districts = districts_for(&filters.province);
    let no_province = filters.province.is_empty();
    let range_label = filters.time_range.label();
    let window = filters.time_range.date_range(local_now()).to_string();

    rsx! {
        div { class: "mb-6 rounded-lg bg-white p-4 shadow",
            div { class: "grid grid-cols-1 items-end gap-4 md:grid-cols-5",
                div {
                    label { class: LABEL_CLASS, "Province" }
                    select {
                        class: CONTROL_CLASS,
                        name: FilterField::Province.name(),
                        value: "{filters.province}",
                        onchange: move |evt| actions.set_filter(FilterField::Province, evt.value()),
                        option { value: "", "All Provinces" }
                        for province in PROVINCES {
                            option {
                                key: "{province}",
                                value: "{province}",
                                selected: filters.province == province,
                                "{province}"
                            }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "District" }
                    select {
                        class: CONTROL_CLASS,
                        name: FilterField::District.name(),
                        value: "{filters.district}",
                        disabled: no_province,
                        onchange: move |evt| actions.set_filter(FilterField::District, evt.value()),
                        option { value: "", "All Districts" }
                        for district in districts.iter() {
                            option {
                                key: "{district}",
                                value: "{district}",
                                selected: filters.district == *district,
                                "{district}"
                            }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Regional Division" }
                    input {
                        class: CONTROL_CLASS,
                        r#type: "text",
                        name: FilterField::RegionalDivision.name(),
                        placeholder: "Enter division",
                        value: "{filters.regional_division}",
                        oninput: move |evt| actions.set_filter(FilterField::RegionalDivision, evt.value()),
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Time Range" }
                    select {
                        class: CONTROL_CLASS,
                        name: FilterField::TimeRange.name(),
                        value: "{filters.time_range}",
                        onchange: move |evt| actions.set_filter(FilterField::TimeRange, evt.value()),
                        for range in TimeRange::ALL {
                            option {
                                key: "{range}",
                                value: "{range}",
                                selected: filters.time_range == range,
                                "{range.label()}"
                            }
                        }
                    }
                }
                div {
                    input {
                        class: CONTROL_CLASS,
                        r#type: "search",
                        name: FilterField::Search.name(),
                        placeholder: "Search reports...",
                        value: "{filters.search}",
                        oninput: move |evt| actions.set_filter(FilterField::Search, evt.value()),
                    }
                }
            }
            p { class: "mt-3 text-xs text-slate-500", "{range_label}: {window}" }
        }
    }
}
