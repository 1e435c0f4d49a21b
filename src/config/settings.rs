// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP bind settings
    pub server: ServerConfig,

    /// Locations of the static tables
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind (default: 127.0.0.1)
    pub host: String,

    /// Port to bind (default: 8000)
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to crisis_keywords.json (JSON array of phrases)
    pub crisis_phrases_path: PathBuf,

    /// Path to content_bank.json
    pub content_bank_path: PathBuf,

    /// Optional bucket -> keywords JSON; none means every message scores empty
    pub keywords_path: Option<PathBuf>,
}

impl DataConfig {
    /// Resolve relative paths against `base`
    pub fn resolve_against(&mut self, base: &std::path::Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        resolve(&mut self.crisis_phrases_path);
        resolve(&mut self.content_bank_path);
        if let Some(path) = self.keywords_path.as_mut() {
            resolve(path);
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            crisis_phrases_path: PathBuf::from("data/crisis_keywords.json"),
            content_bank_path: PathBuf::from("data/content_bank.json"),
            keywords_path: None,
        }
    }
}
