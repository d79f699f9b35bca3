//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use parking_lot::Mutex;
use reply_composer::clipboard::ClipboardSink;
use reply_composer::config::ServiceConfig;
use reply_composer::reply::ReplyClient;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL on which nothing is listening.
pub fn refused_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Client pointed at `base_url` with default transport settings.
pub fn client_for(base_url: &str) -> ReplyClient {
    let config = ServiceConfig {
        base_url: base_url.to_string(),
        ..ServiceConfig::default()
    };
    ReplyClient::new(&config).expect("client builds")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Clipboard that records every text it is given.
#[derive(Clone, Default)]
pub struct SpyClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl ClipboardSink for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("clipboard unavailable".to_string());
        }
        self.copied.lock().push(text.to_string());
        Ok(())
    }
}
