//! Configuration module
//!
//! Settings for services that decode file descriptions from external payloads.
//! Read from the process environment (and a `.env` file when present).

use std::env;

use crate::models::TypeLookup;

const TYPE_LOOKUP_VAR: &str = "FILEMODEL_TYPE_LOOKUP";

/// File model configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileModelConfig {
    /// How `type` tags are matched when decoding through [`crate::FileCodec`].
    /// Plain serde deserialization is always strict.
    pub type_lookup: TypeLookup,
}

impl FileModelConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key/value source.
    pub fn from_source<F>(source: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let type_lookup = match source(TYPE_LOOKUP_VAR).filter(|s| !s.trim().is_empty()) {
            Some(value) => value.parse::<TypeLookup>().map_err(|e| {
                anyhow::anyhow!(
                    "{} must be 'strict' or 'case_insensitive': {}",
                    TYPE_LOOKUP_VAR,
                    e
                )
            })?,
            None => TypeLookup::default(),
        };

        if type_lookup == TypeLookup::CaseInsensitive {
            tracing::info!(
                mode = %type_lookup,
                "File type tags will be matched case-insensitively"
            );
        }

        Ok(Self { type_lookup })
    }
}
