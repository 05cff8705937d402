//! Common test utilities for scholar-client integration tests
//!
//! Provides a scripted in-process transport, a recording login redirect and a
//! minimal HTTP/1.1 server for exercising the reqwest transport.

#![allow(dead_code)]

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use scholar_client::{
    ApiRequest, ApiResponse, ClientConfig, HttpTransport, KeyValueStore, LoginRedirect,
    MemoryStore, ScholarApi,
};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

pub const BASE_URL: &str = "http://scholars.test/api";

type Handler =
    Arc<dyn Fn(ApiRequest) -> BoxFuture<'static, scholar_client::Result<ApiResponse>> + Send + Sync>;

/// In-process `HttpTransport` answering from per-route handlers
///
/// Routes are keyed by method and URL path. Every request is recorded before
/// it is dispatched; unrouted requests get a 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Handler>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route<F>(&self, method: Method, path: &str, handler: F)
    where
        F: Fn(&ApiRequest) -> ApiResponse + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        self.route_async(method, path, move |request| {
            let response = handler(&request);
            async move { Ok(response) }
        });
    }

    pub fn route_async<F, Fut>(&self, method: Method, path: &str, handler: F)
    where
        F: Fn(ApiRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = scholar_client::Result<ApiResponse>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |request: ApiRequest| handler(request).boxed());
        self.routes
            .lock()
            .insert((method, path.to_string()), handler);
    }

    /// Answer every request on the route with the same JSON body
    pub fn respond_json(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.route(method, path, move |_| ApiResponse::json_body(status, &body));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().clone()
    }

    pub fn sent_to(&self, method: &Method, path: &str) -> Vec<ApiRequest> {
        self.sent
            .lock()
            .iter()
            .filter(|r| &r.method == method && r.url.path() == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> scholar_client::Result<ApiResponse> {
        self.sent.lock().push(request.clone());

        let handler = self
            .routes
            .lock()
            .get(&(request.method.clone(), request.url.path().to_string()))
            .cloned();

        match handler {
            Some(handler) => handler(request.clone()).await,
            None => Ok(ApiResponse::json_body(
                StatusCode::NOT_FOUND,
                &serde_json::json!({"error": "Not found"}),
            )),
        }
    }
}

/// `LoginRedirect` that remembers every redirect
#[derive(Default)]
pub struct RecordingRedirect {
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self, login_url: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().push(login_url.to_string());
    }
}

/// Everything a test needs to drive a `ScholarApi` against a `MockTransport`
pub struct Harness {
    pub api: ScholarApi,
    pub transport: Arc<MockTransport>,
    pub store: Arc<MemoryStore>,
    pub redirect: Arc<RecordingRedirect>,
}

impl Harness {
    pub fn new() -> Self {
        let config = ClientConfig {
            base_url: BASE_URL.to_string(),
            ..Default::default()
        };
        let transport = MockTransport::new();
        let store = Arc::new(MemoryStore::new());
        let redirect = RecordingRedirect::new();

        let api = ScholarApi::builder(config)
            .transport(transport.clone())
            .store(store.clone())
            .redirect(redirect.clone())
            .build()
            .unwrap();

        Self {
            api,
            transport,
            store,
            redirect,
        }
    }

    /// Harness with an access and refresh token already stored
    pub fn with_session(access: &str, refresh: &str) -> Self {
        let harness = Self::new();
        harness.store.set("token", access).unwrap();
        harness.store.set("refreshToken", refresh).unwrap();
        harness
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }
}

/// Route answering 200 only for `Authorization: Bearer <token>`, else 401
pub fn require_token(transport: &MockTransport, method: Method, path: &str, token: &str, body: Value) {
    let expected = token.to_string();
    transport.route(method, path, move |request| {
        if request.bearer_token() == Some(expected.as_str()) {
            ApiResponse::json_body(StatusCode::OK, &body)
        } else {
            ApiResponse::json_body(
                StatusCode::UNAUTHORIZED,
                &serde_json::json!({"error": "Invalid or expired token"}),
            )
        }
    });
}

pub fn scholar_page_json() -> Value {
    serde_json::json!({
        "data": [{
            "id": "s1",
            "name": "Ada Lovelace",
            "gender": "F",
            "fieldOfResearch": "Mathematics",
            "yearOfBirth": 1915,
            "image": null,
            "featured": true,
            "visible": true,
            "deleted": false,
            "identity": "i1",
            "version": 1,
            "tags": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }],
        "pagination": {"page": 1, "pageSize": 20, "total": 1, "totalPages": 1}
    })
}

/// Request as seen on the wire by `MockHttpServer`
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Minimal HTTP/1.1 server returning one canned response per connection
pub struct MockHttpServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown: Arc<Notify>,
}

impl MockHttpServer {
    pub async fn start(status: u16, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let shutdown = Arc::new(Notify::new());

        let response = format!(
            "HTTP/1.1 {} Mock\r\ncontent-type: {}\r\ncontent-length: {}\r\nx-mock: yes\r\nconnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let requests_clone = requests.clone();
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                let requests = requests_clone.clone();
                                let response = response.clone();
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, requests, response).await;
                                });
                            }
                            Err(e) => {
                                eprintln!("Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_clone.notified() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            requests,
            shutdown,
        }
    }

    async fn handle_connection(
        mut stream: TcpStream,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
        response: String,
    ) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let head_end = loop {
            if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
                break pos;
            }
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let mut lines = head.split("\r\n");
        let mut request_line = lines.next().unwrap_or_default().split_whitespace();
        let method = request_line.next().unwrap_or_default().to_string();
        let target = request_line.next().unwrap_or_default().to_string();

        let headers: HashMap<String, String> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
            .collect();

        let content_length: usize = headers
            .get("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let mut body = buf[head_end + 4..].to_vec();
        while body.len() < content_length {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => body.extend_from_slice(&chunk[..n]),
            }
        }

        requests.lock().push(CapturedRequest {
            method,
            target,
            headers,
            body,
        });

        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }

    pub fn url(&self, path: &str) -> url::Url {
        url::Url::parse(&format!("http://{}{}", self.addr, path)).unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().clone()
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_waiters();
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
