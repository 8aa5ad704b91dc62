//! Bridges API Gateway v2 HTTP events to the HTTP router.
//!
//! The router is served on an ephemeral loopback port and each event is
//! replayed against it with `reqwest`, so Lambda and the standalone server
//! share the exact same handlers and middleware.

use crate::utils::error::Result;
use axum::Router;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayV2Request {
    #[serde(default)]
    pub raw_path: String,
    #[serde(default)]
    pub raw_query_string: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    pub request_context: RequestContext,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    pub http: HttpDescription,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpDescription {
    pub method: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayV2Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("base64 encoded request bodies are not supported")]
    UnsupportedEncoding,

    #[error("forward request: {0}")]
    Transport(#[from] reqwest::Error),
}

// 這些標頭由 reqwest 重新計算
const SKIPPED_HEADERS: [&str; 2] = ["host", "content-length"];

#[derive(Debug, Clone)]
pub struct LambdaProxy {
    client: Client,
    base_url: String,
}

impl LambdaProxy {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Serves `router` on `127.0.0.1:0` in the background and returns a proxy to it.
    pub async fn start(router: Router) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("embedded server failed: {}", e);
            }
        });

        tracing::debug!(address = %address, "embedded server started");
        Ok(Self::new(format!("http://{}", address)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn forward(
        &self,
        event: ApiGatewayV2Request,
    ) -> std::result::Result<ApiGatewayV2Response, ProxyError> {
        if event.is_base64_encoded {
            return Err(ProxyError::UnsupportedEncoding);
        }

        let method = Method::from_bytes(event.request_context.http.method.as_bytes())
            .map_err(|_| ProxyError::InvalidMethod(event.request_context.http.method.clone()))?;

        let mut url = format!("{}{}", self.base_url, event.raw_path);
        if !event.raw_query_string.is_empty() {
            url.push('?');
            url.push_str(&event.raw_query_string);
        }

        let mut request = self.client.request(method, &url);
        for (name, value) in &event.headers {
            if !SKIPPED_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
                request = request.header(name, value);
            }
        }
        if let Some(body) = event.body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status_code = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.text().await?;

        Ok(ApiGatewayV2Response {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        })
    }
}

/// Flattens response headers for the v2 payload, joining repeated names with
/// ", ". Values that are not visible ASCII are skipped.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}
