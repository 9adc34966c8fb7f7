use std::sync::Arc;

use anyhow::Context;
use reqwest::{header, Method, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{decode_report_list, Report};

pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP client for the inspection report endpoints.
#[derive(Clone)]
pub struct ReportsClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl ReportsClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let base_url = resolve_base_url(&config.api_base_url, page_origin().as_deref());

        let client = reqwest::Client::builder()
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    /// `GET /reports` with every filter field as a query parameter.
    pub async fn list_reports<TQuery>(&self, query: &TQuery) -> ClientResult<Vec<Report>>
    where
        TQuery: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, "reports").query(query);
        let (status, bytes) = self.send(builder).await?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status,
                body: bytes,
            });
        }

        Ok(decode_report_list(&bytes))
    }

    /// `DELETE /reports/{id}`. Any 2xx counts as success; the body is ignored.
    pub async fn delete_report(&self, report_id: &str) -> ClientResult<()> {
        let path = format!("reports/{report_id}");
        let builder = self.request(Method::DELETE, &path);
        let (status, bytes) = self.send(builder).await?;

        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::UnexpectedStatus {
                status,
                body: bytes,
            })
        }
    }

    pub fn report_pdf_url(&self, report_id: &str) -> String {
        self.join_path(&format!("reports/{report_id}/pdf"))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.join_path(path);
        let mut builder = self
            .inner
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.config.request_timeout);

        if let Some(token) = self.config.bearer_token() {
            builder = builder.header(header::AUTHORIZATION, token);
        }

        builder
    }

    fn join_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> ClientResult<(StatusCode, Vec<u8>)> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        Ok((status, bytes.to_vec()))
    }
}

/// Absolute API prefix without a trailing slash. Relative prefixes such as
/// `/api` are joined onto the page origin when one is known.
fn resolve_base_url(input: &str, origin: Option<&str>) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        return trimmed.to_string();
    }

    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            trimmed.trim_start_matches('/')
        ),
        None => trimmed.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {}", String::from_utf8_lossy(.body))]
    UnexpectedStatus { status: StatusCode, body: Vec<u8> },
    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
