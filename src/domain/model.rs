use serde::{Deserialize, Serialize};

/// Structured form of one model reply. Every field is always present;
/// sections the reply did not provide keep their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub project_name: String,
    pub tech_stack: Vec<String>,
    pub project_ideas: Vec<String>,
    pub folder_structure: String,
    pub summary: String,
}

/// An allow-listed manifest file found at the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub name: String,
    pub contents: String,
}

/// What the scanner hands to the analysis stage: a depth-first listing
/// (trailing `/` marks directories) plus the key files that were present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub listing: String,
    pub key_files: Vec<KeyFile>,
}

impl WorkspaceSnapshot {
    pub fn entry_count(&self) -> usize {
        if self.listing.is_empty() {
            0
        } else {
            self.listing.lines().count()
        }
    }
}
