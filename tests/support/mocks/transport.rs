// tests/support/mocks/transport.rs
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use tribune_core::application::ports::http::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// リクエストを記録し、クロージャで応答を決める HTTP トランスポート
pub struct ScriptedTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// すべての呼び出しを接続エラーにする
    pub fn unreachable() -> Self {
        Self::new(|request| {
            Err(TransportError::Request {
                url: request.url.clone(),
                message: "connection refused".into(),
            })
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: HttpMethod, url_fragment: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url.contains(url_fragment))
            .count()
    }

    pub fn total(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// JSON ボディ付きのレスポンスを作る
pub fn json_response(status: u16, body: Value) -> Result<HttpResponse, TransportError> {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    };
    Ok(HttpResponse::new(
        status,
        reason,
        serde_json::to_vec(&body).unwrap(),
    ))
}
