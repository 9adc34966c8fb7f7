use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_CREATE_REPORT_URL: &str = "/createReport";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TOAST_DISMISS_MS: u64 = 4_000;
const DEFAULT_INCENTIVE_RATE: u64 = 3_000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_token: Option<String>,
    pub profile: AppProfile,
    pub request_timeout: Duration,
    pub toast_dismiss: Duration,
    /// Rupees paid per affected plant.
    pub incentive_rate: u64,
    pub create_report_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_token: None,
            profile: AppProfile::Dev,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            toast_dismiss: Duration::from_millis(DEFAULT_TOAST_DISMISS_MS),
            incentive_rate: DEFAULT_INCENTIVE_RATE,
            create_report_url: DEFAULT_CREATE_REPORT_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("REPORTS_API_BASE_URL") {
            config.api_base_url = url;
        }

        if let Some(token) = lookup("REPORTS_AUTH_TOKEN").filter(|token| !token.trim().is_empty())
        {
            config.auth_token = Some(token);
        }

        config.profile = AppProfile::from_env(lookup("REPORTS_PROFILE"));

        if let Some(secs) =
            lookup("REPORTS_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(ms) =
            lookup("REPORTS_TOAST_DISMISS_MS").and_then(|value| value.parse::<u64>().ok())
        {
            config.toast_dismiss = Duration::from_millis(ms.max(1_000));
        }

        if let Some(rate) =
            lookup("REPORTS_INCENTIVE_RATE").and_then(|value| value.parse::<u64>().ok())
        {
            config.incentive_rate = rate;
        }

        if let Some(url) = lookup("REPORTS_CREATE_URL") {
            config.create_report_url = url;
        }

        config
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.trim()))
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "REPORTS_API_BASE_URL" => option_env!("REPORTS_API_BASE_URL"),
        "REPORTS_AUTH_TOKEN" => option_env!("REPORTS_AUTH_TOKEN"),
        "REPORTS_PROFILE" => option_env!("REPORTS_PROFILE"),
        "REPORTS_REQUEST_TIMEOUT_SECS" => option_env!("REPORTS_REQUEST_TIMEOUT_SECS"),
        "REPORTS_TOAST_DISMISS_MS" => option_env!("REPORTS_TOAST_DISMISS_MS"),
        "REPORTS_INCENTIVE_RATE" => option_env!("REPORTS_INCENTIVE_RATE"),
        "REPORTS_CREATE_URL" => option_env!("REPORTS_CREATE_URL"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}
