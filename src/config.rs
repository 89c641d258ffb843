use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::EngineError;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Which classifier ranks taxonomy domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    Keyword,
    Semantic,
}

/// Which similarity backend is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBackend {
    Keyword,
    Embedding,
}

/// How the domain factor is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainAlignmentKind {
    Taxonomy,
    Semantic,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_classifier")]
    pub classifier: ClassifierKind,
    #[serde(default = "default_similarity")]
    pub similarity: SimilarityBackend,
    #[serde(default = "default_domain_alignment")]
    pub domain_alignment: DomainAlignmentKind,
    #[serde(default = "default_embedding_dimension")]
    pub embedding_dimension: usize,
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            classifier: default_classifier(),
            similarity: default_similarity(),
            domain_alignment: default_domain_alignment(),
            embedding_dimension: default_embedding_dimension(),
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
        }
    }
}

fn default_classifier() -> ClassifierKind { ClassifierKind::Keyword }
fn default_similarity() -> SimilarityBackend { SimilarityBackend::Keyword }
fn default_domain_alignment() -> DomainAlignmentKind { DomainAlignmentKind::Taxonomy }
fn default_embedding_dimension() -> usize { 256 }
fn default_top_k() -> usize { 5 }
fn default_max_top_k() -> usize { 50 }

impl EngineSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.embedding_dimension == 0 {
            return Err(EngineError::InvalidConfig(
                "engine.embedding_dimension must be positive".to_string(),
            ));
        }
        if self.default_top_k == 0 || self.default_top_k > self.max_top_k {
            return Err(EngineError::InvalidConfig(format!(
                "engine.default_top_k ({}) must be between 1 and engine.max_top_k ({})",
                self.default_top_k, self.max_top_k
            )));
        }
        Ok(())
    }

    /// Requested result count, defaulted and capped
    pub fn effective_top_k(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|k| *k > 0)
            .unwrap_or(self.default_top_k)
            .min(self.max_top_k)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides; blank values are ignored
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = format;
        }
        self
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AGENTMAP_)
    pub fn load() -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AGENTMAP__ENGINE__CLASSIFIER -> engine.classifier
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, EngineError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.engine.validate()?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("AGENTMAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
