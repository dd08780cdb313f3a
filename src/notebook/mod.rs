//! Notebook interchange-format model
//!
//! The document is kept as the JSON object it was loaded from. Only the parts
//! nbmeta reads get a typed view: each cell's type and source, and the
//! document-level metadata. Saving writes the loaded object back with just
//! `metadata` replaced, so cells, outputs and numbers are never re-encoded.

mod io;

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// The only major `nbformat` version nbmeta reads and writes.
pub const SUPPORTED_NBFORMAT: u64 = 4;

/// A notebook document
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Typed view of `cells`, read-only
    pub cells: Vec<Cell>,

    /// Document-level metadata, written back on save
    pub metadata: Map<String, Value>,

    /// The document as loaded
    raw: Map<String, Value>,
}

impl Notebook {
    /// First cell of the notebook, if any
    pub fn first_cell(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// The full document with the current metadata in place
    pub fn to_value(&self) -> Value {
        let mut doc = self.raw.clone();
        doc.insert("metadata".to_string(), Value::Object(self.metadata.clone()));
        Value::Object(doc)
    }
}

/// Cell type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Raw,
    Code,
    Markdown,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Raw => "raw",
            CellType::Code => "code",
            CellType::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// The parts of a cell nbmeta reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub cell_type: CellType,
    pub source: Source,
}

impl Cell {
    /// Read the typed view of one entry of `cells`.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let object = value.as_object().ok_or("cell is not an object")?;

        let tag = object.get("cell_type").ok_or("missing `cell_type`")?;
        let cell_type = CellType::deserialize(tag).map_err(|e| e.to_string())?;

        let source = match object.get("source") {
            None => Source::default(),
            Some(value) => Source::from_value(value)
                .ok_or("`source` must be a string or a list of strings")?,
        };

        Ok(Self { cell_type, source })
    }

    pub fn is_raw(&self) -> bool {
        self.cell_type == CellType::Raw
    }
}

/// Cell source text.
///
/// On disk this is either one string or a list of lines (each keeping its
/// trailing newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Source::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .map(Source::Lines),
            _ => None,
        }
    }

    /// The logical source text
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Source::Text(text) => Cow::Borrowed(text),
            Source::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_lines_are_concatenated() {
        let source = Source::Lines(vec!["---\n".into(), "title: x\n".into(), "---".into()]);
        assert_eq!(source.text(), "---\ntitle: x\n---");
    }

    #[test]
    fn test_cell_view_reads_type_and_source() {
        let cell = Cell::from_value(&json!({
            "cell_type": "code",
            "execution_count": 3,
            "id": "abc",
            "metadata": {"tags": ["x"]},
            "outputs": [],
            "source": ["print(1)"]
        }))
        .unwrap();
        assert_eq!(cell.cell_type, CellType::Code);
        assert_eq!(cell.source, Source::Lines(vec!["print(1)".into()]));
    }

    #[test]
    fn test_missing_source_is_empty() {
        let cell = Cell::from_value(&json!({"cell_type": "raw", "metadata": {}})).unwrap();
        assert_eq!(cell.source.text(), "");
    }

    #[test]
    fn test_unknown_cell_type_is_rejected() {
        let err = Cell::from_value(&json!({"cell_type": "heading", "source": ""})).unwrap_err();
        assert!(err.contains("heading"));
    }

    #[test]
    fn test_non_text_source_is_rejected() {
        assert!(Cell::from_value(&json!({"cell_type": "raw", "source": [1, 2]})).is_err());
        assert!(Cell::from_value(&json!({"cell_type": "raw", "source": 5})).is_err());
        assert!(Cell::from_value(&json!("raw")).is_err());
    }

    #[test]
    fn test_cell_type_display() {
        assert_eq!(CellType::Raw.to_string(), "raw");
        assert_eq!(CellType::Markdown.to_string(), "markdown");
    }
}
