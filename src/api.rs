use anyhow::anyhow;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api_error::ApiError;
use crate::session::SessionStore;
use crate::AppConfig;

/// Decoded response payload: JSON when the server says so, raw text otherwise.
#[derive(Debug)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

/// The sole network boundary. Attaches `Content-Type: application/json` to
/// every request and `Authorization: Bearer <token>` whenever the injected
/// session holds a token.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(cfg: &AppConfig, session: SessionStore) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()?;
        let base_url = Url::parse(&cfg.base_url)?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiBody, ApiError> {
        let url = self.base_url.join(path)?;
        tracing::debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        let token = self.session.token();
        if !token.is_empty() {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req.send().await?;
        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = res.text().await?;

        // A failed response surfaces its body verbatim, whatever the content type.
        if !status.is_success() {
            return Err(ApiError::Request {
                status,
                message: text,
            });
        }

        if content_type.contains("application/json") {
            Ok(ApiBody::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ApiBody::Text(text))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.request(Method::GET, path, None).await?;
        decode(body)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let body = self.request(Method::POST, path, body).await?;
        decode(body)
    }
}

fn decode<T: DeserializeOwned>(body: ApiBody) -> Result<T, ApiError> {
    match body {
        ApiBody::Json(value) => Ok(serde_json::from_value(value)?),
        ApiBody::Text(text) => Err(anyhow!("expected a JSON response, got: {}", text).into()),
    }
}
