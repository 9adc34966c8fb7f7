use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::models::Report;
use crate::services::{browser, export};
use crate::state::{use_app_actions, use_app_state, AppActions, NotificationKind};
use crate::{API_CLIENT, APP_CONFIG};

/// Refetches the report list whenever the filter snapshot changes. Each fetch
/// carries a generation token so late responses for older filters are dropped.
pub fn use_report_loader() {
    let actions = use_app_actions();
    let state = use_app_state();

    let filters = state.read().filters.clone();

    use_future(use_reactive!(|(filters,)| {
        async move {
            TimeoutFuture::new(0).await;

            let token = actions.begin_fetch();

            let Some(client) = API_CLIENT.get().cloned() else {
                tracing::warn!("report list requested before the API client was initialised");
                actions.apply_fetch_failure(token, "API client is not initialised".into());
                return;
            };

            tracing::info!(
                token,
                search = %filters.search,
                province = %filters.province,
                district = %filters.district,
                division = %filters.regional_division,
                time_range = %filters.time_range,
                "loading reports"
            );

            match client.list_reports(&filters).await {
                Ok(reports) => {
                    tracing::info!(token, count = reports.len(), "reports loaded");
                    actions.apply_reports(token, reports);
                }
                Err(err) => {
                    tracing::error!(token, status = ?err.status(), "report list fetch failed: {err}");
                    actions.apply_fetch_failure(token, err.to_string());
                }
            }
        }
    }));
}

/// Sends the DELETE for the report awaiting confirmation.
pub fn confirm_delete(actions: AppActions) {
    let Some(report_id) = actions.start_delete() else {
        return;
    };

    spawn(async move {
        let Some(client) = API_CLIENT.get().cloned() else {
            tracing::warn!("delete requested before the API client was initialised");
            actions.finish_delete(&report_id, false);
            return;
        };

        match client.delete_report(&report_id).await {
            Ok(()) => {
                tracing::info!(%report_id, "report deleted");
                actions.finish_delete(&report_id, true);
            }
            Err(err) => {
                tracing::error!(%report_id, status = ?err.status(), "report delete failed: {err}");
                actions.finish_delete(&report_id, false);
            }
        }
    });
}

pub fn download_pdf(actions: AppActions, report_id: &str) {
    let Some(client) = API_CLIENT.get() else {
        actions.notify(NotificationKind::Error, "API client is not initialised");
        return;
    };

    let url = client.report_pdf_url(report_id);
    if let Err(err) = browser::open_in_new_tab(&url) {
        tracing::error!(%url, "failed to open report pdf: {err:#}");
        actions.notify(NotificationKind::Error, "Failed to open report PDF");
    }
}

pub fn export_reports(actions: AppActions, reports: &[Report]) {
    if reports.is_empty() {
        actions.notify(NotificationKind::Warning, "No reports to export");
        return;
    }

    let rate = APP_CONFIG
        .get()
        .map(|config| config.incentive_rate)
        .unwrap_or_default();
    let content = export::reports_to_csv(reports, rate);

    match browser::download_text("reports.csv", &content, "text/csv;charset=utf-8") {
        Ok(()) => {
            actions.notify(
                NotificationKind::Success,
                format!("Exported {} reports", reports.len()),
            );
        }
        Err(err) => {
            tracing::error!("report export failed: {err:#}");
            actions.notify(NotificationKind::Error, "Failed to export reports");
        }
    }
}
