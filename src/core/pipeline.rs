use crate::core::prompt::build_prompt;
use crate::core::report::render_html;
use crate::core::scanner::scan_workspace;
use crate::core::structurer::{structure_response_traced, TraceEvent};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{AnalysisRecord, WorkspaceSnapshot};
use crate::utils::error::{InsightError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

pub const REPORT_FILENAME: &str = "report.html";

/// Scan → single chat-completion request → structure → HTML report.
/// One attempt per run: any transport or API failure is terminal.
pub struct AnalysisPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> AnalysisPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn request_analysis(&self, prompt: String) -> Result<String> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| InsightError::MissingConfigError {
                field: "api_key".to_string(),
            })?;

        let body = serde_json::json!({
            "model": self.config.model(),
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.2,
        });

        tracing::debug!("Posting analysis request to {}", self.config.api_endpoint());
        let response = self
            .client
            .post(self.config.api_endpoint())
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InsightError::ApiStatusError {
                status: status.to_string(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let reply = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| InsightError::ProcessingError {
                message: "completion reply carried no message content".to_string(),
            })?;
        Ok(reply.to_string())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AnalysisPipeline<S, C> {
    async fn extract(&self) -> Result<WorkspaceSnapshot> {
        scan_workspace(
            Path::new(self.config.workspace_path()),
            self.config.key_files(),
            self.config.ignore_dirs(),
            self.config.max_depth(),
        )
    }

    async fn transform(&self, snapshot: WorkspaceSnapshot) -> Result<AnalysisRecord> {
        let prompt = build_prompt(&snapshot)?;
        let reply = self.request_analysis(prompt).await?;

        let (record, trace) = structure_response_traced(&reply);
        for event in &trace {
            match event {
                TraceEvent::SectionIgnored { heading } => {
                    tracing::debug!("Reply section ignored: {:?}", heading)
                }
                TraceEvent::FieldOverwritten { field } => {
                    tracing::debug!("Reply repeated a section, keeping the later {:?}", field)
                }
                TraceEvent::SectionMatched { .. } => {}
            }
        }
        Ok(record)
    }

    async fn load(&self, record: AnalysisRecord) -> Result<String> {
        let html = render_html(&record);
        self.storage
            .write_file(REPORT_FILENAME, html.as_bytes())
            .await?;

        let full_path = Path::new(self.config.output_path()).join(REPORT_FILENAME);
        Ok(full_path.display().to_string())
    }
}
