use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::file_type::FileType;
use super::license::License;
use crate::clock::{Clock, SystemClock};
use crate::error::{FileModelError, Result};

/// Description of a file attached to a record.
///
/// Construction always succeeds, so a file may be populated over several
/// intake steps. Call [`File::validate`] before treating it as publishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Publication state, derived when the file is built
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "PublishedFile")]
    file_type: FileType,
    /// Identifier of the file in storage
    identifier: Uuid,
    /// Original file name
    name: String,
    mime_type: String,
    /// Size in bytes
    size: Option<i64>,
    /// Required unless the file is an administrative agreement
    license: Option<License>,
    administrative_agreement: bool,
    publisher_authority: bool,
    /// The file is hidden from non-owners until this instant has passed
    embargo_date: Option<DateTime<Utc>>,
}

impl File {
    pub fn builder(identifier: Uuid) -> FileBuilder {
        FileBuilder::new(identifier)
    }

    /// Check that the file may be published.
    pub fn validate(&self) -> Result<()> {
        if !self.administrative_agreement && self.license.is_none() {
            return Err(FileModelError::MissingLicense {
                identifier: self.identifier,
            });
        }
        Ok(())
    }

    /// Whether someone other than the owner may see the file right now.
    pub fn is_visible_for_non_owner(&self) -> bool {
        self.is_visible_for_non_owner_at(&SystemClock)
    }

    pub fn is_visible_for_non_owner_at(&self, clock: &dyn Clock) -> bool {
        !self.administrative_agreement
            && !self.is_embargoed_at(clock)
            && self.file_type != FileType::UnpublishedFile
    }

    /// True until the clock is strictly past the embargo date.
    pub fn is_embargoed_at(&self, clock: &dyn Clock) -> bool {
        self.embargo_date
            .is_some_and(|embargo_date| clock.now() <= embargo_date)
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn identifier(&self) -> Uuid {
        self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }

    pub fn license(&self) -> Option<&License> {
        self.license.as_ref()
    }

    pub fn is_administrative_agreement(&self) -> bool {
        self.administrative_agreement
    }

    pub fn is_publisher_authority(&self) -> bool {
        self.publisher_authority
    }

    pub fn embargo_date(&self) -> Option<DateTime<Utc>> {
        self.embargo_date
    }
}

/// Builder for [`File`]. Every field except the identifier is optional.
#[derive(Debug, Clone)]
pub struct FileBuilder {
    file_type: Option<FileType>,
    identifier: Uuid,
    name: String,
    mime_type: String,
    size: Option<i64>,
    license: Option<License>,
    administrative_agreement: bool,
    publisher_authority: bool,
    embargo_date: Option<DateTime<Utc>>,
}

impl FileBuilder {
    pub fn new(identifier: Uuid) -> Self {
        Self {
            file_type: None,
            identifier,
            name: String::new(),
            mime_type: String::new(),
            size: None,
            license: None,
            administrative_agreement: false,
            publisher_authority: false,
            embargo_date: None,
        }
    }

    /// Requested type. The built file may end up with a different one, see
    /// [`FileType::derive`].
    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn size(mut self, size: impl Into<Option<i64>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn license(mut self, license: impl Into<Option<License>>) -> Self {
        self.license = license.into();
        self
    }

    pub fn administrative_agreement(mut self, administrative_agreement: bool) -> Self {
        self.administrative_agreement = administrative_agreement;
        self
    }

    pub fn publisher_authority(mut self, publisher_authority: bool) -> Self {
        self.publisher_authority = publisher_authority;
        self
    }

    pub fn embargo_date(mut self, embargo_date: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.embargo_date = embargo_date.into();
        self
    }

    pub fn build(self) -> File {
        let file_type = FileType::derive(self.file_type, self.administrative_agreement);
        if let Some(requested) = self.file_type.filter(|requested| *requested != file_type) {
            tracing::debug!(
                identifier = %self.identifier,
                requested = %requested,
                resolved = %file_type,
                "Normalized file type"
            );
        }

        File {
            file_type,
            identifier: self.identifier,
            name: self.name,
            mime_type: self.mime_type,
            size: self.size,
            license: self.license,
            administrative_agreement: self.administrative_agreement,
            publisher_authority: self.publisher_authority,
            embargo_date: self.embargo_date,
        }
    }
}

/// Wire shape accepted on input. Missing flags default to false, missing
/// nullable fields to null.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilePayload {
    #[serde(rename = "type", default)]
    file_type: Option<FileType>,
    identifier: Uuid,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    license: Option<License>,
    #[serde(default)]
    administrative_agreement: bool,
    #[serde(default)]
    publisher_authority: bool,
    #[serde(default)]
    embargo_date: Option<DateTime<Utc>>,
}

impl From<FilePayload> for File {
    fn from(payload: FilePayload) -> Self {
        let mut builder = FileBuilder::new(payload.identifier)
            .name(payload.name.unwrap_or_default())
            .mime_type(payload.mime_type.unwrap_or_default())
            .size(payload.size)
            .license(payload.license)
            .administrative_agreement(payload.administrative_agreement)
            .publisher_authority(payload.publisher_authority)
            .embargo_date(payload.embargo_date);
        if let Some(file_type) = payload.file_type {
            builder = builder.file_type(file_type);
        }
        builder.build()
    }
}

// Every deserialized file goes through the builder so the type is normalized.
impl<'de> Deserialize<'de> for File {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        FilePayload::deserialize(deserializer).map(File::from)
    }
}
