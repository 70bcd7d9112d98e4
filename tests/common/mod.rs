#![allow(dead_code)]

use ai_video_gateway::Config;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// What the mock backend answers to every `/generate_video` call
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, serde_json::Value),
    Raw(StatusCode, &'static str),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// Stand-in for the video generation backend that records every body it receives
pub struct MockBackend {
    handle: JoinHandle<()>,
    pub port: u16,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockBackend {
    pub async fn start(reply: Reply) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/generate_video", post(mock_generate_video))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockBackend {
            handle,
            port,
            received,
        }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub async fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().await.clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn mock_generate_video(State(state): State<MockState>, body: String) -> Response {
    let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    state.received.lock().await.push(value);

    match state.reply {
        Reply::Json(status, body) => (status, axum::Json(body)).into_response(),
        Reply::Raw(status, body) => (status, body).into_response(),
    }
}

/// Test harness that runs the gateway in-process
pub struct TestServer {
    handle: JoinHandle<()>,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start(backend_url: String) -> Self {
        // Only open when debugging
        // tracing_subscriber::fmt::init();

        let port = portpicker::pick_unused_port().expect("No available port");
        let config = Config {
            listen_on_port: port,
            bind_address: "127.0.0.1".into(),
            backend_url,
            ..Default::default()
        };

        let handle = tokio::spawn(async move {
            ai_video_gateway::run(config).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        // Poll until server is ready
        for _ in 0..200 {
            if let Ok(response) = client
                .get(format!("http://127.0.0.1:{port}/health"))
                .send()
                .await
                && response.status().is_success()
            {
                break;
            }

            sleep(Duration::from_millis(10)).await;
        }

        TestServer {
            handle,
            port,
            client,
        }
    }

    /// Gateway in front of a fresh mock backend
    pub async fn with_backend(reply: Reply) -> (Self, MockBackend) {
        let backend = MockBackend::start(reply).await;
        let server = Self::start(backend.url()).await;
        (server, backend)
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub async fn generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/generate_video", self.url()))
            .json(&body)
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A loopback URL nothing is listening on
pub fn unreachable_url() -> String {
    let port = portpicker::pick_unused_port().expect("No available port");
    format!("http://127.0.0.1:{port}")
}
