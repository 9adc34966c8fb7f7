use serde::{Deserialize, Serialize};

use crate::models::{percentage_of, Report};

/// Totals shown in the statistics cards. Always rebuilt from the full list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_inspected: u64,
    pub total_affected: u64,
    pub affected_percentage: f64,
}

impl ReportStats {
    pub fn from_reports(reports: &[Report]) -> Self {
        let (total_inspected, total_affected) =
            reports.iter().fold((0u64, 0u64), |(inspected, affected), report| {
                (
                    inspected.saturating_add(report.number_of_plants),
                    affected.saturating_add(report.affected_plants),
                )
            });

        Self {
            total_inspected,
            total_affected,
            affected_percentage: percentage_of(total_affected, total_inspected),
        }
    }

    /// `"33.33"` style label; a bare `"0"` when nothing was inspected.
    pub fn percentage_label(&self) -> String {
        if self.total_inspected == 0 {
            "0".to_string()
        } else {
            format!("{:.2}", self.affected_percentage)
        }
    }
}
