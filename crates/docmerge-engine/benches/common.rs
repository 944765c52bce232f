// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use docmerge_engine::document::{Block, Field, NumberFormat, NumberingDef};
use docmerge_engine::{Bindings, Document, Inline, Run};
use serde_json::{Value, json};

fn field(name: &str) -> Vec<Inline> {
    vec![Inline::Field(Field::merge(name))]
}

/// A requirement template: heading, description, then one bullet per test.
#[allow(dead_code)]
pub fn requirement_template() -> Document {
    let mut head = vec![Inline::Run(Run::plain("Requirement "))];
    head.extend(field("req.number"));
    let mut doc = Document::with_body(vec![
        Block::heading(0, head),
        Block::body(field("req.description")),
        Block::body(vec![Inline::Run(Run::plain("Verified by:"))]),
        Block::list_item("2", 0, field("test.title")),
    ]);
    doc.numbering = vec![
        NumberingDef {
            num_id: "1".to_string(),
            format: NumberFormat::Decimal,
        },
        NumberingDef {
            num_id: "2".to_string(),
            format: NumberFormat::Bullet,
        },
    ];
    doc
}

/// `requirements` records, each with a markdown description, and
/// `tests_per_requirement` test records pointing at each one.
#[allow(dead_code)]
pub fn requirement_data(requirements: usize, tests_per_requirement: usize) -> Bindings {
    let reqs: Vec<Value> = (0..requirements)
        .map(|n| {
            json!({
                "number": n,
                "description": format!("Requirement **{n}** must hold.\n\n- first point\n- second point"),
            })
        })
        .collect();
    let tests: Vec<Value> = (0..requirements)
        .flat_map(|n| {
            (0..tests_per_requirement).map(move |t| json!({"title": format!("Test {n}.{t}"), "req": n}))
        })
        .collect();
    serde_json::from_value(json!({"req": reqs, "test": tests})).unwrap()
}

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with **bold**, _italic_ and `code`.\n\n- Bullet point\n  - Nested [[link]]\n- Another [item](https://example.com)\n\n```\nfn example() {}\n```\n\n";
    base.repeat(size)
}
