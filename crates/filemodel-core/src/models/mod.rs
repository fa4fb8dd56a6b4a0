//! Data models for file descriptions
//!
//! A [`FileSet`] holds [`File`]s, each carrying a [`FileType`] and an optional
//! [`License`].

mod file;
mod file_set;
mod file_type;
mod license;

pub use file::*;
pub use file_set::*;
pub use file_type::*;
pub use license::*;
