//! Artifact persistence for scene documents
//!
//! Writes a [`Document`] to disk with the codec selected by
//! [`ExportOptions::compression`] and loads it back. Float precision rounding
//! is a write-side-only, lossy transform applied to JSON output; it is
//! threaded through the options per call rather than held in shared state, so
//! concurrent exports cannot observe each other's precision.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use scenepack_core::{Document, Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Codec used to persist a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Structured JSON text
    #[default]
    None,
    /// Compact MessagePack binary (requires the `msgpack` feature)
    BinaryPack,
}

/// Artifact write/read options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Codec selection
    pub compression: Compression,

    /// Round floating-point leaves to this many decimal digits before JSON
    /// encoding. Ignored by the binary codec and by [`read`].
    pub precision: Option<u32>,

    /// Pretty-print JSON with 4-space-per-level indentation
    pub indent: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            compression: Compression::None,
            precision: None,
            indent: true,
        }
    }
}

/// Write a document to `filepath`, fully overwriting any existing file
pub fn write(filepath: impl AsRef<Path>, document: &Document, options: &ExportOptions) -> Result<()> {
    let filepath = filepath.as_ref();
    match options.compression {
        Compression::BinaryPack => write_msgpack(filepath, document),
        Compression::None => write_json(filepath, document, options),
    }
}

/// Load a document from `filepath` with the codec selected by `options`
pub fn read(filepath: impl AsRef<Path>, options: &ExportOptions) -> Result<Document> {
    let filepath = filepath.as_ref();
    if !filepath.exists() {
        return Err(Error::FileNotFound(filepath.to_path_buf()));
    }

    match options.compression {
        Compression::BinaryPack => read_msgpack(filepath),
        Compression::None => read_json(filepath),
    }
}

fn write_json(filepath: &Path, document: &Document, options: &ExportOptions) -> Result<()> {
    tracing::info!(
        codec = "json",
        path = %filepath.display(),
        indent = options.indent,
        precision = ?options.precision,
        "Writing artifact"
    );

    // Rounding works on a copy: the caller's document must stay untouched
    let document: Cow<'_, Document> = match options.precision {
        Some(digits) => {
            let mut rounded = document.clone();
            round_floats(&mut rounded, digits);
            Cow::Owned(rounded)
        }
        None => Cow::Borrowed(document),
    };

    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);

    if options.indent {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        document
            .serialize(&mut ser)
            .map_err(|e| Error::serialization(e.to_string()))?;
    } else {
        serde_json::to_writer(&mut writer, document.as_ref())
            .map_err(|e| Error::serialization(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

fn read_json(filepath: &Path) -> Result<Document> {
    tracing::info!(codec = "json", path = %filepath.display(), "Loading artifact");

    let file = File::open(filepath)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| Error::decode(e.to_string()))
}

#[cfg(feature = "msgpack")]
fn write_msgpack(filepath: &Path, document: &Document) -> Result<()> {
    tracing::info!(codec = "msgpack", path = %filepath.display(), "Writing artifact");

    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);
    rmp_serde::encode::write(&mut writer, document)
        .map_err(|e| Error::serialization(e.to_string()))?;

    writer.flush()?;
    Ok(())
}

// The codec is reported missing before any file is created, so a rejected
// write never leaves a partial artifact behind.
#[cfg(not(feature = "msgpack"))]
fn write_msgpack(filepath: &Path, _document: &Document) -> Result<()> {
    tracing::error!(path = %filepath.display(), "msgpack codec requested but not compiled in");
    Err(Error::missing_dependency("msgpack"))
}

#[cfg(feature = "msgpack")]
fn read_msgpack(filepath: &Path) -> Result<Document> {
    tracing::info!(codec = "msgpack", path = %filepath.display(), "Loading artifact");

    let file = File::open(filepath)?;
    let reader = BufReader::new(file);
    rmp_serde::decode::from_read(reader).map_err(|e| Error::decode(e.to_string()))
}

#[cfg(not(feature = "msgpack"))]
fn read_msgpack(filepath: &Path) -> Result<Document> {
    tracing::error!(path = %filepath.display(), "msgpack codec requested but not compiled in");
    Err(Error::missing_dependency("msgpack"))
}

/// Round every floating-point leaf of `value` to `digits` decimal digits.
/// Integer leaves are left untouched.
fn round_floats(value: &mut Value, digits: u32) {
    match value {
        Value::Number(number) => {
            if number.is_f64() {
                if let Some(f) = number.as_f64() {
                    let factor = 10f64.powi(digits as i32);
                    let rounded = (f * factor).round() / factor;
                    if let Some(replacement) = serde_json::Number::from_f64(rounded) {
                        *number = replacement;
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                round_floats(item, digits);
            }
        }
        Value::Object(map) => {
            for (_, item) in map.iter_mut() {
                round_floats(item, digits);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_floats_nested() {
        let mut doc = json!({
            "vertices": [1.23456, 2.0, -0.98765],
            "metadata": { "scale": 0.333333 },
            "name": "hull",
            "faces": 12,
        });

        round_floats(&mut doc, 2);

        assert_eq!(doc["vertices"][0], 1.23);
        assert_eq!(doc["vertices"][2], -0.99);
        assert_eq!(doc["metadata"]["scale"], 0.33);
        // Non-float leaves untouched
        assert_eq!(doc["name"], "hull");
        assert_eq!(doc["faces"], 12);
    }

    #[test]
    fn test_round_floats_keeps_integers() {
        let mut doc = json!([1, 2, 9007199254740991i64]);
        round_floats(&mut doc, 1);
        assert_eq!(doc, json!([1, 2, 9007199254740991i64]));
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.compression, Compression::None);
        assert!(options.indent);
        assert!(options.precision.is_none());
    }
}
