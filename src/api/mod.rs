use crate::config::EnvConfig;
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    NotConfigured,
    Network,
    Http,
}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn not_configured() -> Self {
        Self {
            kind: ApiErrorKind::NotConfigured,
            message: "API base URL is not configured".to_string(),
        }
    }

    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Backend reachability as shown in the status card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ApiStatus {
    #[default]
    Idle,
    Ok,
    Error,
}

impl<T> From<&ApiResult<T>> for ApiStatus {
    fn from(res: &ApiResult<T>) -> Self {
        match res {
            Ok(_) => Self::Ok,
            Err(_) => Self::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    pub(crate) base_url: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    pub fn from_env(env: &EnvConfig) -> Self {
        Self::new(env.api_base_url.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> ApiResult<String> {
        let base = self.base_url.as_deref().ok_or_else(ApiError::not_configured)?;
        let base = base.trim_end_matches('/');
        if path.starts_with('/') {
            Ok(format!("{base}{path}"))
        } else {
            Ok(format!("{base}/{path}"))
        }
    }

    async fn get(&self, path: &str, ctx: &str) -> ApiResult<String> {
        let url = self.url(path)?;
        let res = reqwest::Client::new()
            .get(url)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::http(status, body, ctx))
        }
    }

    /// `GET /health`; any 2xx counts as healthy.
    pub async fn health(&self) -> ApiResult<()> {
        self.get("/health", "Health check failed").await.map(|_| ())
    }
}
