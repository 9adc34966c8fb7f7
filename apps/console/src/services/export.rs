use crate::format::format_percentage;
use crate::models::Report;

const CSV_HEADER: &str = "report_id,submitted_by,created_at,province,district,regional_division,inspected,affected,affected_percentage,incentive";

/// One row per report, in list order. `incentive_rate` is rupees per affected
/// plant.
pub fn reports_to_csv(reports: &[Report], incentive_rate: u64) -> String {
    let mut rows = Vec::with_capacity(reports.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for report in reports {
        rows.push(
            [
                report.unique_id.clone(),
                report.full_name.clone(),
                report.created_at.clone().unwrap_or_default(),
                report.province.clone().unwrap_or_default(),
                report.district.clone(),
                report.regional_division.clone(),
                report.number_of_plants.to_string(),
                report.affected_plants.to_string(),
                format_percentage(report.affected_percentage()),
                report.incentive(incentive_rate).to_string(),
            ]
            .iter()
            .map(|value| csv_escape(value))
            .collect::<Vec<_>>()
            .join(","),
        );
    }

    rows.join("\n")
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
