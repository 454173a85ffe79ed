// src/infrastructure/http.rs
use crate::application::ports::http::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("tribune-core/", env!("CARGO_PKG_VERSION"));

/// [`HttpTransport`] over a shared `reqwest` connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, &url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let failed = |err: reqwest::Error| TransportError::Request {
            url: url.clone(),
            message: err.to_string(),
        };

        let response = builder.send().await.map_err(failed)?;
        let status = response.status();
        let body = response.bytes().await.map_err(failed)?;

        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "remote call finished");
        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}
