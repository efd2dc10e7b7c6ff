use repo_insight::core::structurer::{structure_response, structure_response_traced, TraceEvent};
use repo_insight::AnalysisRecord;

#[test]
fn test_text_without_recognized_sections_yields_defaults() {
    let record = structure_response("nothing here looks like a heading\nor a section at all");
    assert_eq!(record, AnalysisRecord::default());
    assert_eq!(record.project_name, "");
    assert!(record.tech_stack.is_empty());
    assert!(record.project_ideas.is_empty());
    assert_eq!(record.folder_structure, "");
    assert_eq!(record.summary, "");
}

#[test]
fn test_project_name_section() {
    assert_eq!(structure_response("Project Name\nFoo").project_name, "Foo");
}

#[test]
fn test_tech_stack_section() {
    assert_eq!(
        structure_response("Tech Stack\n- Go\n- Docker").tech_stack,
        vec!["Go", "Docker"]
    );
}

#[test]
fn test_project_ideas_section() {
    assert_eq!(
        structure_response("Project Ideas\n- A dashboard\n- A CLI").project_ideas,
        vec!["A dashboard", "A CLI"]
    );
}

#[test]
fn test_repeated_summary_keeps_the_later_value() {
    let record = structure_response("Summary\nFirst\n\nSummary\nSecond");
    assert_eq!(record.summary, "Second");
}

#[test]
fn test_unrecognized_heading_populates_nothing() {
    let record = structure_response("Random Header\nsome text");
    assert_eq!(record, AnalysisRecord::default());
}

#[test]
fn test_parsing_is_idempotent() {
    let raw = "Project Name\nFoo\n\nRandom Header\nnoise\n\nTech Stack\n- Go\n\nSummary\nDone.";
    let first = structure_response(raw);
    let second = structure_response(raw);
    assert_eq!(first, second);
}

#[test]
fn test_trace_makes_drops_and_overwrites_observable() {
    let raw = "Random Header\nnoise\n\nSummary\nFirst\n\nSummary\nSecond";
    let (record, trace) = structure_response_traced(raw);
    assert_eq!(record.summary, "Second");
    assert!(trace
        .iter()
        .any(|e| matches!(e, TraceEvent::SectionIgnored { heading } if heading == "Random Header")));
    assert!(trace
        .iter()
        .any(|e| matches!(e, TraceEvent::FieldOverwritten { .. })));
}
