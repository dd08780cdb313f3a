//! Loading and saving notebooks

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::{Cell, Notebook, SUPPORTED_NBFORMAT};
use crate::error::{Result, notebook};

impl Notebook {
    /// Read and parse a notebook from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                notebook::not_found(path)
            } else {
                notebook::read_failed(path, e)
            }
        })?;
        Self::from_json(path, &content)
    }

    /// Parse notebook JSON; `path` is only used for error messages.
    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| notebook::parse_failed(path, e))?;
        let Value::Object(raw) = value else {
            return Err(notebook::parse_failed(path, "top level is not a JSON object"));
        };

        let version = raw
            .get("nbformat")
            .and_then(Value::as_u64)
            .ok_or_else(|| notebook::parse_failed(path, "missing or invalid `nbformat` field"))?;
        if version != SUPPORTED_NBFORMAT {
            return Err(notebook::unsupported_version(path, version));
        }

        let cells = raw
            .get("cells")
            .and_then(Value::as_array)
            .ok_or_else(|| notebook::parse_failed(path, "missing or invalid `cells` field"))?
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                Cell::from_value(cell)
                    .map_err(|reason| notebook::parse_failed(path, format!("cell {index}: {reason}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let metadata = match raw.get("metadata") {
            None => Map::new(),
            Some(Value::Object(metadata)) => metadata.clone(),
            Some(_) => return Err(notebook::parse_failed(path, "`metadata` is not an object")),
        };

        Ok(Self {
            cells,
            metadata,
            raw,
        })
    }

    /// Serialize in the conventional on-disk layout: sorted keys, one-space
    /// indent, non-ASCII kept verbatim, trailing newline. Numbers are written
    /// with the digits they were read with.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let value = self.to_value();
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        value.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Replace the file at `path` with this notebook.
    ///
    /// The content is written to a sibling temporary file which is renamed
    /// over the target, so readers never see a half-written notebook.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self
            .to_json_bytes()
            .map_err(|e| notebook::write_failed(path, e))?;

        let target = resolve_target(path);
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| notebook::write_failed(path, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.flush())
            .map_err(|e| notebook::write_failed(path, e))?;

        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| notebook::write_failed(path, e))?;
        }

        tmp.persist(&target)
            .map_err(|e| notebook::write_failed(path, e.error))?;
        Ok(())
    }
}

/// Follow symlinks so the rename replaces the real file, not the link.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
