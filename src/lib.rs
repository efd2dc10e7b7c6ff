pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, file::FileConfig};
pub use core::{
    engine::AnalysisEngine, pipeline::AnalysisPipeline, structurer::structure_response,
};
pub use domain::model::{AnalysisRecord, KeyFile, WorkspaceSnapshot};
pub use utils::error::{InsightError, Result};
