use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the whole sequence, reporting progress at each stage.
    /// Returns the path of the written report.
    pub async fn run(&self) -> Result<String> {
        println!("Scanning workspace...");
        let snapshot = self.pipeline.extract().await?;
        println!(
            "Found {} entries, {} key files",
            snapshot.entry_count(),
            snapshot.key_files.len()
        );

        println!("Requesting analysis...");
        let record = self.pipeline.transform(snapshot).await?;
        println!(
            "Structured reply ({} stack entries, {} ideas)",
            record.tech_stack.len(),
            record.project_ideas.len()
        );

        println!("Rendering report...");
        let output_path = self.pipeline.load(record).await?;
        println!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
