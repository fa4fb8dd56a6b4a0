//! Filemodel Core Library
//!
//! This crate provides the file description model attached to records: file
//! types, licenses, files and file sets, with their validation rules, plus the
//! error types, configuration and JSON codec shared by services embedding it.

pub mod clock;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::FileCodec;
pub use config::FileModelConfig;
pub use error::{ErrorMetadata, FileModelError, LogLevel, Result};
pub use models::{File, FileBuilder, FileSet, FileType, License, LicenseBuilder, TypeLookup};
