#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, RawQuery, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned behaviour for the fake A2A UI server, plus what it saw.
#[derive(Clone)]
pub struct MockServer {
    pub chat_status: StatusCode,
    pub chat_body: String,
    pub chat_delay: Duration,
    pub export_status: StatusCode,
    pub archive: Vec<u8>,
    chat_requests: Arc<Mutex<Vec<Value>>>,
    export_raw_queries: Arc<Mutex<Vec<String>>>,
    export_ids: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub fn replying(chat_body: Value) -> Self {
        Self {
            chat_status: StatusCode::OK,
            chat_body: chat_body.to_string(),
            chat_delay: Duration::ZERO,
            export_status: StatusCode::OK,
            archive: b"PKZIPDATA".to_vec(),
            chat_requests: Arc::default(),
            export_raw_queries: Arc::default(),
            export_ids: Arc::default(),
        }
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/api/chat", post(chat_handler))
            .route("/export/session", get(export_handler))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn chat_requests(&self) -> Vec<Value> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn export_raw_queries(&self) -> Vec<String> {
        self.export_raw_queries.lock().unwrap().clone()
    }

    pub fn export_ids(&self) -> Vec<String> {
        self.export_ids.lock().unwrap().clone()
    }
}

async fn chat_handler(
    State(server): State<MockServer>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    server.chat_requests.lock().unwrap().push(body);
    if !server.chat_delay.is_zero() {
        tokio::time::sleep(server.chat_delay).await;
    }
    (server.chat_status, server.chat_body.clone())
}

async fn export_handler(
    State(server): State<MockServer>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Vec<u8>) {
    server
        .export_raw_queries
        .lock()
        .unwrap()
        .push(raw.unwrap_or_default());
    if let Some(id) = params.get("conversation_id") {
        server.export_ids.lock().unwrap().push(id.clone());
    }
    (server.export_status, server.archive.clone())
}
