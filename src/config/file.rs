use crate::config::{
    DEFAULT_ENDPOINT, DEFAULT_IGNORE_DIRS, DEFAULT_KEY_FILES, DEFAULT_MAX_DEPTH, DEFAULT_MODEL,
    DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InsightError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

// TOML shape as written by the user; everything optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawFileConfig {
    workspace: Option<RawWorkspace>,
    analysis: Option<RawAnalysis>,
    report: Option<RawReport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawWorkspace {
    path: Option<String>,
    key_files: Option<Vec<String>>,
    ignore_dirs: Option<Vec<String>>,
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawAnalysis {
    endpoint: Option<String>,
    model: Option<String>,
    /// Name of the environment variable holding the credential. The key
    /// itself never lives in the file.
    api_key_env: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawReport {
    output_path: Option<String>,
}

/// File-based twin of the CLI flags, with defaults already applied.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub workspace_path: String,
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub output_path: String,
    pub key_files: Vec<String>,
    pub ignore_dirs: Vec<String>,
    pub max_depth: usize,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|err| InsightError::ConfigError {
                message: format!("cannot read {}: {}", path.display(), err),
            })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawFileConfig = toml::from_str(text)?;
        let workspace = raw.workspace.unwrap_or_default();
        let analysis = raw.analysis.unwrap_or_default();
        let report = raw.report.unwrap_or_default();

        let api_key = analysis
            .api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok());

        Ok(Self {
            workspace_path: workspace.path.unwrap_or_else(|| ".".to_string()),
            api_endpoint: analysis
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            model: analysis.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_seconds: analysis.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            output_path: report
                .output_path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            key_files: workspace
                .key_files
                .unwrap_or_else(|| DEFAULT_KEY_FILES.iter().map(|s| s.to_string()).collect()),
            ignore_dirs: workspace
                .ignore_dirs
                .unwrap_or_else(|| DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect()),
            max_depth: workspace.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        })
    }

    /// An explicitly passed credential wins over the file's env lookup.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("analysis.endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("analysis.model", &self.model)?;
        validation::validate_path("workspace.path", &self.workspace_path)?;
        validation::validate_path("report.output_path", &self.output_path)?;
        validation::validate_range("analysis.timeout_seconds", self.timeout_seconds, 1, 600)?;
        validation::validate_range("workspace.max_depth", self.max_depth, 1, 64)?;
        Ok(())
    }
}

impl ConfigProvider for FileConfig {
    fn workspace_path(&self) -> &str {
        &self.workspace_path
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn key_files(&self) -> &[String] {
        &self.key_files
    }

    fn ignore_dirs(&self) -> &[String] {
        &self.ignore_dirs
    }

    fn max_depth(&self) -> usize {
        self.max_depth
    }
}
