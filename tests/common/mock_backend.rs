//! Mock recommendation backend for integration tests.
//!
//! Runs axum on a dedicated thread with its own tokio runtime so the
//! blocking client can be driven from plain `#[test]` functions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;

#[derive(Debug, Clone)]
struct StoredResponse {
    status: u16,
    body: String,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, StoredResponse>>,
    hits: Mutex<HashMap<String, u64>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        let handler_state = Arc::clone(&state);
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("tokio runtime");
            rt.block_on(async move {
                let app = Router::new().fallback(handle).with_state(handler_state);
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock backend");
                tx.send(listener.local_addr().expect("local addr"))
                    .expect("publish addr");
                axum::serve(listener, app).await.expect("serve mock backend");
            });
        });

        let addr = rx.recv().expect("mock backend address");
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Respond to `path` with 200 and the given JSON body.
    pub fn set_json(&self, path: &str, body: serde_json::Value) {
        self.state.routes.lock().unwrap().insert(
            path.to_string(),
            StoredResponse {
                status: 200,
                body: body.to_string(),
            },
        );
    }

    /// Respond to `path` with an error status and plain body.
    pub fn set_error(&self, path: &str, status: u16, body: &str) {
        self.state.routes.lock().unwrap().insert(
            path.to_string(),
            StoredResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    /// How many requests hit `path` so far.
    pub fn hits(&self, path: &str) -> u64 {
        self.state
            .hits
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }
}

async fn handle(State(state): State<Arc<MockState>>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    *state.hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let stored = state.routes.lock().unwrap().get(&path).cloned();
    match stored {
        Some(response) => Response::builder()
            .status(response.status)
            .header("content-type", "application/json")
            .body(Body::from(response.body))
            .expect("build mock response"),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("no mock response configured"))
            .expect("build mock 404"),
    }
}
