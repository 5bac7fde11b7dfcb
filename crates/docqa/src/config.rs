//! Configuration for the Q&A service
//!
//! Values come from built-in defaults, an optional TOML file, and finally the
//! process environment (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocQaConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Document storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Retrieval and fallback tuning
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// External generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl DocQaConfig {
    /// Load configuration from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        config.apply_env(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Apply overrides from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.generation.api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.generation.model = model;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("UPLOAD_DIR") {
            self.storage.upload_dir = PathBuf::from(dir);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.server.add_origins(origins.split(','));
        }
        if let Some(frontend) = lookup("FRONTEND_URL") {
            self.server.add_origins(std::iter::once(frontend.as_str()));
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
    /// Maximum upload size in bytes (default: 10MB)
    pub max_upload_size: usize,
}

impl ServerConfig {
    fn add_origins<'a>(&mut self, origins: impl Iterator<Item = &'a str>) {
        for origin in origins.map(str::trim).filter(|o| !o.is_empty()) {
            if !self.allowed_origins.iter().any(|o| o == origin) {
                self.allowed_origins.push(origin.to_string());
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            max_upload_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// Document storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory holding one sub-directory per session
    pub upload_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
        }
    }
}

/// Retrieval and fallback tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Chunks must be strictly longer than this (characters, after trimming)
    pub min_chunk_chars: usize,
    /// Question terms must be strictly longer than this (characters)
    pub min_term_chars: usize,
    /// Maximum number of ranked chunks
    pub top_k: usize,
    /// Number of ranked chunks quoted in the fallback answer
    pub fallback_excerpts: usize,
    /// Maximum excerpt length in the fallback answer
    pub excerpt_chars: usize,
    /// Maximum citation snippet length
    pub snippet_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_chunk_chars: 50,
            min_term_chars: 3,
            top_k: 5,
            fallback_excerpts: 3,
            excerpt_chars: 200,
            snippet_chars: 150,
        }
    }
}

/// External generation (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// API key; generation is disabled when absent
    pub api_key: Option<String>,
    /// Model name used in the request path
    pub model: String,
    /// Label reported to clients when generation succeeds
    pub model_label: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Optional sampling temperature
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Trimmed API key; `None` when absent or blank, which disables generation
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            model_label: "gemini-2.5-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 60,
            temperature: None,
        }
    }
}
