pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Manifest names read from the workspace root when present.
pub const DEFAULT_KEY_FILES: [&str; 10] = [
    "package.json",
    "requirements.txt",
    "pom.xml",
    "build.gradle",
    "Dockerfile",
    "README.md",
    "docker-compose.yml",
    ".gitignore",
    "tsconfig.json",
    "webpack.config.js",
];

/// Directories pruned whole from the listing.
pub const DEFAULT_IGNORE_DIRS: [&str; 6] =
    [".git", "node_modules", "target", "dist", ".idea", ".vscode"];

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_DEPTH: usize = 12;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "repo-insight")]
#[command(about = "Scan a workspace, ask a chat-completion model about it, render an HTML report")]
pub struct CliConfig {
    /// Workspace root to scan
    #[arg(default_value = ".")]
    pub workspace_path: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    /// Credential for the analysis endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_KEY_FILES.iter().map(|s| s.to_string()))]
    pub key_files: Vec<String>,

    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()))]
    pub ignore_dirs: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Load settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report process resource usage after the run")]
    pub monitor: bool,

    #[arg(long, help = "Open the rendered report in the default browser")]
    pub open: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_path("workspace_path", &self.workspace_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        validation::validate_range("max_depth", self.max_depth, 1, 64)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
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
