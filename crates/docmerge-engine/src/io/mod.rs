use crate::document::{Document, DocumentError, DocumentFile};
use crate::merge::Bindings;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid document: {0}")]
    Document(#[from] DocumentError),
}

fn read_existing(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

/// Read a template or merged document
pub fn load_document(path: &Path) -> Result<Document, IoError> {
    let content = read_existing(path)?;
    let file: DocumentFile = serde_json::from_str(&content)?;
    let doc = Document::try_from(file)?;
    log::info!("Loaded {} ({} blocks)", path.display(), doc.body.len());
    Ok(doc)
}

/// Write a document in the same JSON form `load_document` reads
pub fn save_document(path: &Path, doc: &Document) -> Result<(), IoError> {
    let file = DocumentFile::from(doc.clone());
    write_file(path, &serde_json::to_string_pretty(&file)?)?;
    log::info!("Saved {} ({} blocks)", path.display(), doc.body.len());
    Ok(())
}

/// Read merge data: a JSON object of object type to record or records
pub fn load_data(path: &Path) -> Result<Bindings, IoError> {
    let content = read_existing(path)?;
    let data: Bindings = serde_json::from_str(&content)?;
    log::info!("Loaded data for {} object types", data.len());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::ObjectData;
    use crate::tests::{create_test_dir, create_test_file, outline_document};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load_document() {
        // Given a document with a header part
        let dir = create_test_dir();
        let mut doc = outline_document();
        doc.other_parts.push(crate::document::Part {
            kind: crate::document::PartKind::Header,
            blocks: vec![],
        });
        let path = dir.path().join("nested/out.json");

        // When saving and loading it back
        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path).unwrap();

        // Then nothing is lost
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_document_parses_fields() {
        let dir = create_test_dir();
        let path = create_test_file(
            &dir,
            "template.json",
            r#"{
                "parts": [{
                    "kind": "body",
                    "blocks": [{
                        "properties": {"style": "Heading1"},
                        "content": [
                            {"type": "run", "text": "Req "},
                            {"type": "field", "instruction": " MERGEFIELD  req.title ", "result": [{"text": "«req.title»"}]}
                        ]
                    }]
                }]
            }"#,
        );

        let doc = load_document(&path).unwrap();

        assert_eq!(doc.body.len(), 1);
        assert_eq!(doc.body[0].merge_fields().collect::<Vec<_>>(), vec!["req.title"]);
        assert!(doc.styles.get("Heading1").is_some());
    }

    #[test]
    fn test_document_needs_single_body() {
        let dir = create_test_dir();
        let path = create_test_file(
            &dir,
            "two_bodies.json",
            r#"{"parts": [{"kind": "body"}, {"kind": "body"}]}"#,
        );
        let result = load_document(&path);
        assert!(matches!(
            result,
            Err(IoError::Document(DocumentError::NotSingleBody(2)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_data(Path::new("/this/path/does/not/exist.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "bad.json", "{not json");
        assert!(matches!(load_data(&path), Err(IoError::Json(_))));
    }

    #[test]
    fn test_load_data_single_and_list() {
        let dir = create_test_dir();
        let path = create_test_file(
            &dir,
            "data.json",
            r#"{"project": {"name": "qw"}, "req": [{"title": "A"}, {"title": "B"}]}"#,
        );
        let data = load_data(&path).unwrap();
        assert!(matches!(data.get("project"), Some(ObjectData::Single(_))));
        assert!(matches!(data.get("req"), Some(ObjectData::List(l)) if l.len() == 2));
    }
}
