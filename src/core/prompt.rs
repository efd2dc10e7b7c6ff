use crate::domain::model::WorkspaceSnapshot;
use crate::utils::error::Result;

/// Section labels the model is told to produce. The structurer matches
/// them by keyword, so wording here and the rule table stay in step.
pub const SECTION_LABELS: [&str; 5] = [
    "Project Name",
    "Tech Stack",
    "Project Purpose",
    "Folder Structure",
    "Summary",
];

/// Builds the single analysis prompt: instructions, the directory
/// listing, and the key files as a JSON object keyed by filename.
pub fn build_prompt(snapshot: &WorkspaceSnapshot) -> Result<String> {
    let mut key_files = serde_json::Map::new();
    for file in &snapshot.key_files {
        key_files.insert(
            file.name.clone(),
            serde_json::Value::String(file.contents.clone()),
        );
    }
    let key_files_json = serde_json::to_string_pretty(&serde_json::Value::Object(key_files))?;

    let mut prompt = String::new();
    prompt.push_str(
        "You are analyzing a software project from its file tree and key manifest files.\n",
    );
    prompt.push_str("Reply in plain text with exactly these sections, in this order, separated by one blank line. Start each section with its label on its own line:\n");
    for label in SECTION_LABELS {
        prompt.push_str("- ");
        prompt.push_str(label);
        prompt.push('\n');
    }
    prompt.push_str("Under Tech Stack and Project Purpose, put one item per line prefixed with \"- \". Do not use any other formatting.\n");
    prompt.push_str("\nDirectory listing (directories end with /):\n");
    prompt.push_str(&snapshot.listing);
    prompt.push_str("\n\nKey files:\n");
    prompt.push_str(&key_files_json);
    prompt.push('\n');

    Ok(prompt)
}
