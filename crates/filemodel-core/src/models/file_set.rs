use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use uuid::Uuid;

use super::file::File;
use crate::clock::Clock;
use crate::error::{FileModelError, Result};

/// Files that logically belong together, e.g. the attachments of one record.
///
/// Identifiers are unique within a set. The check runs once, in
/// [`FileSet::new`]; there is no way to add or remove files afterwards.
///
/// On the wire a set is `{"type": "FileSet", "files": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<File>,
}

impl FileSet {
    /// Discriminator written as the `type` property.
    pub const TYPE_TAG: &'static str = "FileSet";

    /// Build a set, keeping the given order. `None` yields an empty set.
    pub fn new(files: impl Into<Option<Vec<File>>>) -> Result<Self> {
        let files = files.into().unwrap_or_default();

        let mut seen = HashSet::with_capacity(files.len());
        if let Some(duplicate) = files.iter().find(|file| !seen.insert(file.identifier())) {
            tracing::debug!(
                identifier = %duplicate.identifier(),
                file_count = files.len(),
                "Rejected file set with duplicate identifier"
            );
            return Err(FileModelError::DuplicateIdentifier {
                identifier: duplicate.identifier(),
            });
        }

        Ok(Self { files })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, File> {
        self.files.iter()
    }

    pub fn get(&self, identifier: Uuid) -> Option<&File> {
        self.files.iter().find(|file| file.identifier() == identifier)
    }

    /// Files a non-owner may see at the clock's current time.
    pub fn visible_for_non_owner<'a>(
        &'a self,
        clock: &'a dyn Clock,
    ) -> impl Iterator<Item = &'a File> + 'a {
        self.files
            .iter()
            .filter(move |file| file.is_visible_for_non_owner_at(clock))
    }

    /// Validate every file, stopping at the first failure.
    pub fn validate(&self) -> Result<()> {
        self.files.iter().try_for_each(File::validate)
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a File;
    type IntoIter = std::slice::Iter<'a, File>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl TryFrom<Vec<File>> for FileSet {
    type Error = FileModelError;

    fn try_from(files: Vec<File>) -> Result<Self> {
        FileSet::new(files)
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename = "FileSet")]
struct FileSetDocument<'a> {
    files: &'a [File],
}

#[derive(Deserialize)]
struct FileSetPayload {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    files: Option<Vec<File>>,
}

impl Serialize for FileSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FileSetDocument { files: &self.files }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FileSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only the object form is a file set; a bare sequence must not read as empty.
        let document = serde_json::Map::<String, JsonValue>::deserialize(deserializer)?;
        let payload = FileSetPayload::deserialize(JsonValue::Object(document))
            .map_err(serde::de::Error::custom)?;
        if let Some(kind) = payload.kind.filter(|kind| kind != FileSet::TYPE_TAG) {
            return Err(serde::de::Error::custom(format!(
                "expected type {}, found {}",
                FileSet::TYPE_TAG,
                kind
            )));
        }
        FileSet::new(payload.files).map_err(serde::de::Error::custom)
    }
}
