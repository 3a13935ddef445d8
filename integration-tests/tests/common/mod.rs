//! Shared test utilities for integration tests.
//!
//! Starts a real server on an ephemeral port over a JSON file in a temporary
//! directory and hands out a client pointed at it.

#![allow(dead_code)]

use anyhow::Result;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taskforce_server::infrastructure::server::{build_router, serve};
use taskforce_server::state::AppState;
use taskforce_server::store::JsonFileStore;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Integration test context: a running server and its backing file.
pub struct TestServer {
    /// Temporary directory holding the document
    pub temp_dir: TempDir,
    /// Address the server is bound to
    pub addr: SocketAddr,
    /// HTTP client
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl TestServer {
    /// Starts a server over a freshly seeded, empty document.
    pub async fn start() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = JsonFileStore::new(temp_dir.path().join("data.json"));
        store.ensure_exists().await?;
        Self::start_in(temp_dir).await
    }

    /// Starts a server over whatever `data.json` the directory holds, if any.
    pub async fn start_in(temp_dir: TempDir) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(temp_dir.path().join("data.json")));
        let state = Arc::new(AppState::with_store(store));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(serve(listener, build_router(state), async {
            let _ = rx.await;
        }));

        Ok(Self {
            temp_dir,
            addr,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle: Some(handle),
        })
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Path of the backing document.
    pub fn data_path(&self) -> PathBuf {
        self.temp_dir.path().join("data.json")
    }

    /// Reads the backing document straight from disk.
    pub fn read_file(&self) -> Result<Value> {
        let bytes = std::fs::read(self.data_path())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET /api/data, returning the body and the `ETag`.
    pub async fn get_data(&self) -> Result<(Value, String)> {
        let response = self
            .client
            .get(self.url("/api/data"))
            .send()
            .await?
            .error_for_status()?;
        let etag = response
            .headers()
            .get("etag")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok((response.json().await?, etag))
    }

    /// POST /api/data without a precondition.
    pub async fn post_data(&self, body: &Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/data"))
            .json(body)
            .send()
            .await?)
    }

    /// POST /api/members, returning the created member.
    pub async fn add_member(&self, name: &str) -> Result<Value> {
        let response = self
            .client
            .post(self.url("/api/members"))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Stops the server and waits for it to finish.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// A single-member document in the stored layout.
pub fn sample_document() -> Value {
    json!({
        "members": [
            {
                "id": "1",
                "name": "Alice",
                "currentTask": {
                    "title": "T1",
                    "deadline": "2099-01-01",
                    "group": "結構設計",
                    "progress": 50
                },
                "stats": { "success": 0, "failed": 0 },
                "history": []
            }
        ]
    })
}
