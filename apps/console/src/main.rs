#![allow(non_snake_case)]

mod api;
mod config;
mod date_range;
mod format;
mod hooks;
mod models;
mod regions;
mod services;
mod state;
mod stats;
mod ui;

use api::{ClientError, ReportsClient};
use config::{AppConfig, AppProfile};
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::{error, info};
use ui::notifications::NotificationCenter;
use ui::reports::ReportsPage;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<ReportsClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    init_logging(config.profile);
    bootstrap_infrastructure(config);
    launch(App);
}

fn init_logging(profile: AppProfile) {
    static INIT: std::sync::Once = std::sync::Once::new();
    let level = match profile {
        AppProfile::Dev => tracing::Level::DEBUG,
        AppProfile::Prod => tracing::Level::INFO,
    };
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) {
    let _ = APP_CONFIG.set(config.clone());

    match ReportsClient::new(config) {
        Ok(client) => {
            let _ = API_CLIENT.set(client);
            info!("reports client initialized");
        }
        Err(err) => {
            report_client_error("failed to initialize reports client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative min-h-screen bg-gray-100",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        ReportsPage {}
    }
}
