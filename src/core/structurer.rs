//! Turns the model's free-text reply into an [`AnalysisRecord`].
//!
//! The reply is expected as blank-line-delimited sections, each with a
//! heading line and zero or more body lines. Heading matching is a
//! case-insensitive substring test against an ordered rule table; the
//! first rule that matches claims the section. Unmatched sections are
//! dropped, repeated headings overwrite, and nothing ever fails: any
//! string at all structures into a record, with unfilled fields left at
//! their defaults.

use crate::domain::model::AnalysisRecord;

/// Record field a section rule writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    TechStack,
    ProjectIdeas,
    FolderStructure,
    Summary,
}

/// Ordered dispatch table, evaluated top to bottom per section. Adding a
/// section means adding a row here, not another branch below.
const RULES: &[(&[&str], Field)] = &[
    (&["project name"], Field::ProjectName),
    (&["tech stack"], Field::TechStack),
    (&["project purpose", "project ideas"], Field::ProjectIdeas),
    (&["folder structure"], Field::FolderStructure),
    (&["summary"], Field::Summary),
];

/// Diagnostic event from one parse. Tracing these keeps the silent-drop
/// and overwrite policies observable without changing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    SectionMatched { heading: String, field: Field },
    SectionIgnored { heading: String },
    FieldOverwritten { field: Field },
}

pub fn structure_response(raw: &str) -> AnalysisRecord {
    structure_response_traced(raw).0
}

pub fn structure_response_traced(raw: &str) -> (AnalysisRecord, Vec<TraceEvent>) {
    let mut record = AnalysisRecord::default();
    let mut filled = [false; RULES.len()];
    let mut trace = Vec::new();

    for section in raw.split("\n\n") {
        let mut lines = section.lines();
        let heading = lines.next().unwrap_or("");
        let body: Vec<&str> = lines.collect();

        let lowered = heading.to_lowercase();
        let matched = RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)));

        let Some(&(_, field)) = matched else {
            trace.push(TraceEvent::SectionIgnored {
                heading: heading.to_string(),
            });
            continue;
        };

        trace.push(TraceEvent::SectionMatched {
            heading: heading.to_string(),
            field,
        });
        if filled[field as usize] {
            trace.push(TraceEvent::FieldOverwritten { field });
        }
        filled[field as usize] = true;

        match field {
            Field::ProjectName => record.project_name = body.join(" ").trim().to_string(),
            Field::TechStack => record.tech_stack = list_items(&body),
            Field::ProjectIdeas => record.project_ideas = list_items(&body),
            Field::FolderStructure => record.folder_structure = body.join("\n"),
            Field::Summary => record.summary = body.join("\n"),
        }
    }

    (record, trace)
}

/// One entry per body line: a leading `- ` marker is stripped, the rest
/// trimmed. Blank lines stay as empty entries.
fn list_items(body: &[&str]) -> Vec<String> {
    body.iter()
        .map(|line| line.strip_prefix("- ").unwrap_or(line).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_default_record() {
        let record = structure_response("");
        assert_eq!(record, AnalysisRecord::default());
    }

    #[test]
    fn test_unsectioned_text_yields_default_record() {
        let record = structure_response("just some prose without any recognizable heading");
        assert_eq!(record, AnalysisRecord::default());
    }

    #[test]
    fn test_project_name_single_section() {
        let record = structure_response("Project Name\nFoo");
        assert_eq!(record.project_name, "Foo");
    }

    #[test]
    fn test_project_name_joined_with_spaces() {
        let record = structure_response("Project Name\nFoo\nBar");
        assert_eq!(record.project_name, "Foo Bar");
    }

    #[test]
    fn test_tech_stack_items() {
        let record = structure_response("Tech Stack\n- Go\n- Docker");
        assert_eq!(record.tech_stack, vec!["Go", "Docker"]);
    }

    #[test]
    fn test_project_ideas_items() {
        let record = structure_response("Project Ideas\n- A dashboard\n- A CLI");
        assert_eq!(record.project_ideas, vec!["A dashboard", "A CLI"]);
    }

    #[test]
    fn test_project_purpose_maps_to_ideas() {
        let record = structure_response("Project Purpose\n- Serve dashboards");
        assert_eq!(record.project_ideas, vec!["Serve dashboards"]);
    }

    #[test]
    fn test_blank_body_lines_kept_as_empty_entries() {
        let record = structure_response("Tech Stack\n- Go\n\nSummary\nfine");
        // The blank line ends the section, but a mid-list blank survives:
        let record2 = structure_response("Tech Stack\n- Go\n \n- Docker");
        assert_eq!(record.tech_stack, vec!["Go"]);
        assert_eq!(record2.tech_stack, vec!["Go", "", "Docker"]);
    }

    #[test]
    fn test_folder_structure_preserved_verbatim() {
        let record = structure_response("Folder Structure\n  src/ holds code\n  tests/ too");
        assert_eq!(record.folder_structure, "  src/ holds code\n  tests/ too");
    }

    #[test]
    fn test_heading_match_is_case_insensitive_substring() {
        let record = structure_response("## PROJECT NAME:\nFoo");
        assert_eq!(record.project_name, "Foo");
    }

    #[test]
    fn test_first_rule_wins_within_a_section() {
        // Heading mentions two categories; the earlier rule claims it.
        let record = structure_response("Project Name and Tech Stack\nFoo");
        assert_eq!(record.project_name, "Foo");
        assert!(record.tech_stack.is_empty());
    }

    #[test]
    fn test_last_section_wins_across_sections() {
        let record = structure_response("Summary\nFirst\n\nSummary\nSecond");
        assert_eq!(record.summary, "Second");
    }

    #[test]
    fn test_unrecognized_section_is_dropped() {
        let record = structure_response("Random Header\nsome text");
        assert_eq!(record, AnalysisRecord::default());
    }

    #[test]
    fn test_heading_with_no_body_yields_empty_value() {
        let record = structure_response("Project Name\n\nTech Stack");
        assert_eq!(record.project_name, "");
        assert!(record.tech_stack.is_empty());
    }

    #[test]
    fn test_body_case_is_untouched() {
        let record = structure_response("Tech Stack\n- GoLang");
        assert_eq!(record.tech_stack, vec!["GoLang"]);
    }

    #[test]
    fn test_idempotent_over_same_input() {
        let raw = "Project Name\nFoo\n\nTech Stack\n- Go\n\nSummary\nA tool.";
        assert_eq!(structure_response(raw), structure_response(raw));
    }

    #[test]
    fn test_full_reply() {
        let raw = "Project Name\nInsight Demo\n\nTech Stack\n- TypeScript\n- Docker\n\nProject Purpose\n- Analyze workspaces\n\nFolder Structure\nsrc/ is the extension body\n\nSummary\nSmall tool.\nDoes one thing.";
        let record = structure_response(raw);
        assert_eq!(record.project_name, "Insight Demo");
        assert_eq!(record.tech_stack, vec!["TypeScript", "Docker"]);
        assert_eq!(record.project_ideas, vec!["Analyze workspaces"]);
        assert_eq!(record.folder_structure, "src/ is the extension body");
        assert_eq!(record.summary, "Small tool.\nDoes one thing.");
    }

    #[test]
    fn test_trace_reports_ignored_section() {
        let (_, trace) = structure_response_traced("Random Header\nsome text");
        assert!(trace.contains(&TraceEvent::SectionIgnored {
            heading: "Random Header".to_string()
        }));
    }

    #[test]
    fn test_trace_reports_overwrite() {
        let (record, trace) = structure_response_traced("Summary\nFirst\n\nSummary\nSecond");
        assert_eq!(record.summary, "Second");
        assert!(trace.contains(&TraceEvent::FieldOverwritten {
            field: Field::Summary
        }));
    }

    #[test]
    fn test_trace_for_clean_reply_has_only_matches() {
        let (_, trace) = structure_response_traced("Summary\nfine");
        assert_eq!(
            trace,
            vec![TraceEvent::SectionMatched {
                heading: "Summary".to_string(),
                field: Field::Summary
            }]
        );
    }
}
