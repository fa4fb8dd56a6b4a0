//! JSON codec for file descriptions
//!
//! Entry point for services decoding files and file sets from request bodies
//! or persisted documents. Type tags are resolved with the configured
//! [`TypeLookup`] before the entities are built, so failures surface as typed
//! [`FileModelError`]s rather than opaque JSON errors.

use serde::de::Error as _;
use serde_json::Value as JsonValue;

use crate::config::FileModelConfig;
use crate::error::{FileModelError, Result};
use crate::models::{File, FileSet, FileType, TypeLookup};

#[derive(Debug, Default, Clone, Copy)]
pub struct FileCodec {
    type_lookup: TypeLookup,
}

impl FileCodec {
    pub fn new(config: &FileModelConfig) -> Self {
        Self {
            type_lookup: config.type_lookup,
        }
    }

    pub fn with_type_lookup(type_lookup: TypeLookup) -> Self {
        Self { type_lookup }
    }

    pub fn type_lookup(&self) -> TypeLookup {
        self.type_lookup
    }

    pub fn decode_file(&self, input: &str) -> Result<File> {
        let value: JsonValue = serde_json::from_str(input)?;
        self.decode_file_value(value)
    }

    pub fn decode_file_value(&self, mut value: JsonValue) -> Result<File> {
        self.resolve_type_tag(&mut value)?;
        let file: File = serde_json::from_value(value)?;
        tracing::debug!(
            identifier = %file.identifier(),
            file_type = %file.file_type(),
            "Decoded file"
        );
        Ok(file)
    }

    pub fn decode_file_set(&self, input: &str) -> Result<FileSet> {
        let value: JsonValue = serde_json::from_str(input)?;
        self.decode_file_set_value(value)
    }

    pub fn decode_file_set_value(&self, value: JsonValue) -> Result<FileSet> {
        let mut document = match value {
            JsonValue::Object(document) => document,
            other => {
                return Err(invalid_payload(format!(
                    "expected a {} object, found {}",
                    FileSet::TYPE_TAG,
                    other
                )))
            }
        };

        match document.get("type") {
            None | Some(JsonValue::Null) => {}
            Some(JsonValue::String(kind)) if kind == FileSet::TYPE_TAG => {}
            Some(other) => {
                return Err(invalid_payload(format!(
                    "expected type {}, found {}",
                    FileSet::TYPE_TAG,
                    other
                )))
            }
        }

        let files = match document.remove("files") {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(entries)) => entries
                .into_iter()
                .map(|entry| self.decode_file_value(entry))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(invalid_payload(format!(
                    "expected files to be an array, found {}",
                    other
                )))
            }
        };

        let file_set = FileSet::new(files)?;
        tracing::debug!(file_count = file_set.len(), "Decoded file set");
        Ok(file_set)
    }

    pub fn encode_file(&self, file: &File) -> Result<String> {
        Ok(serde_json::to_string(file)?)
    }

    pub fn encode_file_set(&self, file_set: &FileSet) -> Result<String> {
        Ok(serde_json::to_string(file_set)?)
    }

    /// Rewrite the `type` property to the exact tag it resolves to.
    fn resolve_type_tag(&self, value: &mut JsonValue) -> Result<()> {
        let Some(tag) = value.get("type").and_then(JsonValue::as_str) else {
            return Ok(());
        };
        let file_type = FileType::lookup_with(tag, self.type_lookup)?;
        if file_type.tag() == tag {
            return Ok(());
        }

        tracing::warn!(
            tag = %tag,
            resolved = %file_type,
            "Resolved file type tag case-insensitively"
        );
        if let Some(slot) = value.get_mut("type") {
            *slot = JsonValue::from(file_type.tag());
        }
        Ok(())
    }
}

fn invalid_payload(message: String) -> FileModelError {
    FileModelError::Json(serde_json::Error::custom(message))
}
