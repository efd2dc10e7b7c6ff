use crate::domain::model::AnalysisRecord;

/// Renders one record as a standalone static HTML page: tech stack as
/// inline badges, ideas as a list, structure and summary as text blocks.
pub fn render_html(record: &AnalysisRecord) -> String {
    let title = if record.project_name.is_empty() {
        "Workspace analysis".to_string()
    } else {
        escape_html(&record.project_name)
    };

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str("<style>\n");
    page.push_str(
        "body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\n",
    );
    page.push_str("h1 { border-bottom: 2px solid #ddd; padding-bottom: 0.3rem; }\n");
    page.push_str(
        ".badge { display: inline-block; background: #eef; border: 1px solid #99c; border-radius: 0.8rem; padding: 0.1rem 0.7rem; margin: 0.15rem; }\n",
    );
    page.push_str("pre { background: #f6f6f6; padding: 0.8rem; overflow-x: auto; }\n");
    page.push_str(".empty { color: #999; font-style: italic; }\n");
    page.push_str("footer { margin-top: 2rem; color: #999; font-size: 0.8rem; }\n");
    page.push_str("</style>\n</head>\n<body>\n");

    page.push_str(&format!("<h1>{}</h1>\n", title));

    page.push_str("<h2>Tech Stack</h2>\n");
    if record.tech_stack.is_empty() {
        page.push_str("<p class=\"empty\">No tech stack reported.</p>\n");
    } else {
        page.push_str("<p>\n");
        for item in &record.tech_stack {
            page.push_str(&format!("<span class=\"badge\">{}</span>\n", escape_html(item)));
        }
        page.push_str("</p>\n");
    }

    page.push_str("<h2>Project Ideas</h2>\n");
    if record.project_ideas.is_empty() {
        page.push_str("<p class=\"empty\">No ideas reported.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for idea in &record.project_ideas {
            page.push_str(&format!("<li>{}</li>\n", escape_html(idea)));
        }
        page.push_str("</ul>\n");
    }

    page.push_str("<h2>Folder Structure</h2>\n");
    if record.folder_structure.is_empty() {
        page.push_str("<p class=\"empty\">No structure analysis reported.</p>\n");
    } else {
        page.push_str(&format!("<pre>{}</pre>\n", escape_html(&record.folder_structure)));
    }

    page.push_str("<h2>Summary</h2>\n");
    if record.summary.is_empty() {
        page.push_str("<p class=\"empty\">No summary reported.</p>\n");
    } else {
        for paragraph in record.summary.split("\n\n") {
            page.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }
    }

    page.push_str(&format!(
        "<footer>Generated {}</footer>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
