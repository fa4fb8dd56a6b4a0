use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// License attached to a file.
///
/// Carries no invariants of its own. `labels` maps a language code to a display
/// string and is never null: absent input becomes an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct License {
    /// License identifier (e.g., `CC-BY`)
    pub identifier: String,
    /// URI of the license text
    #[schema(example = "https://creativecommons.org/licenses/by/4.0/")]
    pub link: String,
    /// Display labels keyed by language code
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: BTreeMap<String, String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl License {
    pub fn new(
        identifier: impl Into<String>,
        link: impl Into<String>,
        labels: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            link: link.into(),
            labels: labels.unwrap_or_default(),
        }
    }

    pub fn builder() -> LicenseBuilder {
        LicenseBuilder::default()
    }

    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(String::as_str)
    }
}

#[derive(Debug, Default, Clone)]
pub struct LicenseBuilder {
    identifier: String,
    link: String,
    labels: Option<BTreeMap<String, String>>,
}

impl LicenseBuilder {
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn label(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeMap::new)
            .insert(language.into(), text.into());
        self
    }

    pub fn build(self) -> License {
        License::new(self.identifier, self.link, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CC_BY_URI: &str = "https://creativecommons.org/licenses/by/4.0/";

    #[test]
    fn test_labels_default_to_empty() {
        let license = License::builder()
            .identifier("CC-BY")
            .link(CC_BY_URI)
            .build();
        assert!(license.labels.is_empty());

        let license = License::new("CC-BY", CC_BY_URI, None);
        assert!(license.labels.is_empty());
    }

    #[test]
    fn test_label_lookup() {
        let license = License::builder()
            .identifier("CC-BY")
            .link(CC_BY_URI)
            .label("en", "CC-BY 4.0")
            .label("nb", "CC-BY 4.0 Navngivelse")
            .build();
        assert_eq!(license.label("en"), Some("CC-BY 4.0"));
        assert_eq!(license.label("de"), None);
    }

    #[test]
    fn test_deserialize_null_labels() {
        let license: License = serde_json::from_value(serde_json::json!({
            "identifier": "CC0",
            "link": "https://creativecommons.org/publicdomain/zero/1.0/",
            "labels": null
        }))
        .unwrap();
        assert!(license.labels.is_empty());

        let license: License = serde_json::from_value(serde_json::json!({
            "identifier": "CC0",
            "link": "https://creativecommons.org/publicdomain/zero/1.0/"
        }))
        .unwrap();
        assert!(license.labels.is_empty());
    }

    #[test]
    fn test_serialize_writes_empty_labels_object() {
        let license = License::new("CC-BY", CC_BY_URI, None);
        let value = serde_json::to_value(&license).unwrap();
        assert_eq!(value["labels"], serde_json::json!({}));
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = License::builder()
            .identifier("CC-BY")
            .link(CC_BY_URI)
            .label("en", "CC-BY 4.0")
            .build();
        let b = License::new(
            "CC-BY",
            CC_BY_URI,
            Some(BTreeMap::from([("en".to_string(), "CC-BY 4.0".to_string())])),
        );
        assert_eq!(a, b);
    }
}
