use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{FileModelError, Result};

/// Publication state of a file.
///
/// Serializes as its canonical tag. The legacy tag `File` is accepted on input
/// but never written: it serializes as `PublishedFile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileType {
    PublishedFile,
    UnpublishedFile,
    UnpublishableFile,
    /// Tag `File` from payloads persisted before the taxonomy was split.
    /// File construction always upgrades it to `PublishedFile`.
    LegacyFile,
}

/// How type tags are compared during lookup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeLookup {
    /// Exact, case-sensitive match.
    #[default]
    Strict,
    /// ASCII case-insensitive match, for payloads written by older clients.
    CaseInsensitive,
}

impl FromStr for TypeLookup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(TypeLookup::Strict),
            "case_insensitive" => Ok(TypeLookup::CaseInsensitive),
            _ => Err(anyhow::anyhow!("Invalid type lookup mode: {}", s)),
        }
    }
}

impl Display for TypeLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TypeLookup::Strict => write!(f, "strict"),
            TypeLookup::CaseInsensitive => write!(f, "case_insensitive"),
        }
    }
}

const DELIMITER: &str = ", ";

impl FileType {
    /// Every variant that may appear on output, in tag order.
    pub const CANONICAL: [FileType; 3] = [
        FileType::PublishedFile,
        FileType::UnpublishedFile,
        FileType::UnpublishableFile,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            FileType::PublishedFile => "PublishedFile",
            FileType::UnpublishedFile => "UnpublishedFile",
            FileType::UnpublishableFile => "UnpublishableFile",
            FileType::LegacyFile => "File",
        }
    }

    /// Resolve a wire tag using exact-case comparison.
    pub fn lookup(value: &str) -> Result<Self> {
        Self::lookup_with(value, TypeLookup::Strict)
    }

    /// Resolve a wire tag, including the legacy `File` tag.
    ///
    /// The error lists only the canonical tags, since the legacy one should
    /// not be suggested to new clients.
    pub fn lookup_with(value: &str, mode: TypeLookup) -> Result<Self> {
        Self::CANONICAL
            .iter()
            .copied()
            .chain(std::iter::once(FileType::LegacyFile))
            .find(|candidate| match mode {
                TypeLookup::Strict => candidate.tag() == value,
                TypeLookup::CaseInsensitive => candidate.tag().eq_ignore_ascii_case(value),
            })
            .ok_or_else(|| FileModelError::invalid_file_type(value))
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, FileType::LegacyFile)
    }

    /// The variant this type is written as.
    pub fn canonical(self) -> FileType {
        match self {
            FileType::LegacyFile => FileType::PublishedFile,
            other => other,
        }
    }

    /// Type a file ends up with, given the requested type and its agreement flag.
    ///
    /// Administrative agreements are never publishable. Otherwise a missing or
    /// legacy type becomes `PublishedFile`.
    pub fn derive(requested: Option<FileType>, administrative_agreement: bool) -> FileType {
        if administrative_agreement {
            return FileType::UnpublishableFile;
        }
        match requested {
            None | Some(FileType::LegacyFile) => FileType::PublishedFile,
            Some(file_type) => file_type,
        }
    }

    pub(crate) fn expected_tags() -> String {
        Self::CANONICAL
            .iter()
            .map(FileType::tag)
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for FileType {
    type Err = FileModelError;

    fn from_str(s: &str) -> Result<Self> {
        FileType::lookup(s)
    }
}

impl TryFrom<String> for FileType {
    type Error = FileModelError;

    fn try_from(value: String) -> Result<Self> {
        FileType::lookup(&value)
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        file_type.canonical().tag().to_string()
    }
}
