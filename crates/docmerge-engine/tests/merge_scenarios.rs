use std::path::PathBuf;

use docmerge_engine::document::{Block, Field, PartKind, RunFormat};
use docmerge_engine::export::to_markdown;
use docmerge_engine::{
    Bindings, Document, Inline, MergeDocument, RelationTable, Run, Unrelated, load_data,
    load_document,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/fixtures/release_report/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
}

fn relations() -> RelationTable {
    let content = std::fs::read_to_string(fixture("relations.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn merged_report() -> Document {
    let template = MergeDocument::load(&fixture("template.json")).unwrap();
    let data = load_data(&fixture("data.json")).unwrap();
    template.merge(data, &relations())
}

#[test]
fn release_report_follows_relations() {
    let doc = merged_report();

    assert_eq!(
        doc.paragraph_texts(),
        vec![
            "101: Dose display",
            "Users need to see the dose.",
            "Requirement 201: Show dose",
            "Display the current dose.",
            "Implemented by:",
            "Dose widget",
            "Dose tests",
            "Requirement 202: Dose units",
            "Show units.",
            "Implemented by:",
            "None.",
            "102: Alarms",
            "Users need alarms.",
            "None.",
        ]
    );
}

#[test]
fn release_report_as_markdown() {
    insta::assert_snapshot!(to_markdown(&merged_report()).trim_end(), @r"
    # 101: Dose display

    Users need to **see** the dose.

    ## Requirement 201: **Show dose**

    Display the current dose.

    Implemented by:

    - Dose widget
    - Dose tests

    ## Requirement 202: **Dose units**

    Show units.

    Implemented by:

    *None.*

    # 102: Alarms

    Users need alarms.

    *None.*
    ");
}

#[test]
fn unrelated_data_is_not_narrowed() {
    let template = MergeDocument::load(&fixture("template.json")).unwrap();
    let data = load_data(&fixture("data.json")).unwrap();

    let doc = template.merge(data, &Unrelated);
    let texts = doc.paragraph_texts();

    // Every requirement under every need, every design output under each.
    let requirements = texts.iter().filter(|t| t.starts_with("Requirement")).count();
    let widgets = texts.iter().filter(|t| *t == "Dose widget").count();
    assert_eq!(requirements, 6);
    assert_eq!(widgets, 6);
    assert!(!texts.iter().any(|t| t == "None."));
}

#[test]
fn merge_output_round_trips_through_disk() {
    // Given a loaded template and data
    let template = MergeDocument::load(&fixture("template.json")).unwrap();
    let data = load_data(&fixture("data.json")).unwrap();
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("reports/release.json");

    // When the merge is written out
    template.write(&output, data, &relations()).unwrap();

    // Then the saved document is the merged one, header included
    let saved = load_document(&output).unwrap();
    assert_eq!(saved, merged_report());
    assert_eq!(saved.other_parts.len(), 1);
    assert_eq!(saved.other_parts[0].kind, PartKind::Header);
    assert_eq!(saved.other_parts[0].blocks[0].text(), "Release report");
}

#[test]
fn replaced_field_keeps_result_format() {
    let doc = merged_report();
    assert_eq!(
        doc.body[2].content.last(),
        Some(&Inline::Run(Run::new("Show dose", RunFormat::bold())))
    );
}

#[test]
fn markdown_description_becomes_paragraphs_and_links() {
    let template = MergeDocument::from_document(Document::with_body(vec![
        Block::heading(0, vec![Inline::Field(Field::merge("project.name"))]),
        Block::body(vec![Inline::Field(Field::merge("project.notes"))]),
    ]));
    let data: Bindings = serde_json::from_value(json!({
        "project": {
            "name": "Dose calculator",
            "notes": "See [the manual](https://example.com/manual).\n\n```\nmake release\n```"
        }
    }))
    .unwrap();

    let doc = template.merge(data, &Unrelated);

    assert_eq!(
        doc.paragraph_texts(),
        vec!["Dose calculator", "See the manual.", "make release"]
    );
    assert_eq!(
        doc.hyperlinks.values().collect::<Vec<_>>(),
        vec!["https://example.com/manual"]
    );
    assert_eq!(
        doc.body[2].content,
        vec![Inline::Run(Run::new("make release", RunFormat::monospace()))]
    );
}
