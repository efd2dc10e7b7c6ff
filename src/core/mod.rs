pub mod engine;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod structurer;

pub use crate::domain::model::{AnalysisRecord, KeyFile, WorkspaceSnapshot};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
