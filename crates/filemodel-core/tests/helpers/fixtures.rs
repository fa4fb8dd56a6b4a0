//! Test fixtures: licenses, files and raw JSON payloads.

use chrono::{DateTime, TimeZone, Utc};
use filemodel_core::{File, FileType, License};
use serde_json::{json, Value};
use uuid::Uuid;

pub const CC_BY_URI: &str = "https://creativecommons.org/licenses/by/4.0/";
pub const APPLICATION_PDF: &str = "application/pdf";

pub fn cc_by_license() -> License {
    License::builder()
        .identifier("CC-BY")
        .link(CC_BY_URI)
        .label("en", "CC-BY 4.0")
        .build()
}

/// Fixed instant used as an embargo date.
pub fn embargo_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
}

pub fn licensed_file(name: &str) -> File {
    File::builder(Uuid::new_v4())
        .name(name)
        .mime_type(APPLICATION_PDF)
        .size(200_i64)
        .license(cc_by_license())
        .publisher_authority(true)
        .build()
}

pub fn file_with_type(file_type: FileType, administrative_agreement: bool) -> File {
    File::builder(Uuid::new_v4())
        .file_type(file_type)
        .name("attachment.pdf")
        .mime_type(APPLICATION_PDF)
        .license(cc_by_license())
        .administrative_agreement(administrative_agreement)
        .build()
}

/// A file payload as older clients persisted it, with the legacy `File` tag.
pub fn legacy_file_payload(identifier: Uuid) -> Value {
    json!({
        "type": "File",
        "identifier": identifier,
        "name": "Legacy_file.txt",
        "mimeType": "text/plain",
        "size": 12,
        "license": {
            "identifier": "CC-BY",
            "link": CC_BY_URI,
            "labels": null
        },
        "administrativeAgreement": false,
        "publisherAuthority": false,
        "embargoDate": null
    })
}
