use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A FHIR extension attached to an element.
///
/// Only the primitive `value[x]` choices that appear on coded elements are
/// modelled. Parsing fails on any other choice, or on more than one, rather
/// than dropping it. Extensions may nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extension: Vec<Extension>,
    pub url: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub value: Option<ExtensionValue>,
}

/// The `value[x]` of an [`Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ExtensionValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueCode")]
    Code(String),
    #[serde(rename = "valueUri")]
    Uri(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueInteger")]
    Integer(i64),
}

impl ExtensionValue {
    const CHOICES: &'static [&'static str] = &[
        "valueString",
        "valueCode",
        "valueUri",
        "valueBoolean",
        "valueInteger",
    ];

    /// Whether `key` names a `value[x]` choice, modelled or not.
    fn is_choice_key(key: &str) -> bool {
        key.strip_prefix("value")
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    }
}

/// Visitor for the object form of an extension.
struct ExtensionVisitor;

impl<'de> Visitor<'de> for ExtensionVisitor {
    type Value = Extension;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an Extension object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<Extension>> = None;
        let mut url: Option<String> = None;
        let mut value: Option<(String, ExtensionValue)> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "extension" => {
                    if extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    extension = Some(map.next_value()?);
                }
                "url" => {
                    if url.is_some() {
                        return Err(de::Error::duplicate_field("url"));
                    }
                    url = Some(map.next_value()?);
                }
                choice if ExtensionValue::is_choice_key(choice) => {
                    if let Some((previous, _)) = &value {
                        return Err(de::Error::custom(format!(
                            "extension has more than one value[x]: '{previous}' and '{choice}'"
                        )));
                    }
                    let parsed = match choice {
                        "valueString" => ExtensionValue::String(map.next_value()?),
                        "valueCode" => ExtensionValue::Code(map.next_value()?),
                        "valueUri" => ExtensionValue::Uri(map.next_value()?),
                        "valueBoolean" => ExtensionValue::Boolean(map.next_value()?),
                        "valueInteger" => ExtensionValue::Integer(map.next_value()?),
                        _ => return Err(de::Error::unknown_variant(choice, ExtensionValue::CHOICES)),
                    };
                    value = Some((key, parsed));
                }
                // Ignore any unknown fields encountered
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(Extension {
            id,
            extension: extension.unwrap_or_default(),
            url: url.ok_or_else(|| de::Error::missing_field("url"))?,
            value: value.map(|(_, value)| value),
        })
    }
}

impl<'de> Deserialize<'de> for Extension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExtensionVisitor)
    }
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Extension {
            id: None,
            extension: Vec::new(),
            url: url.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: ExtensionValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// An extension carrying a `valueString`.
    pub fn string(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(url).with_value(ExtensionValue::String(value.into()))
    }

    /// An extension carrying a `valueCode`.
    pub fn code(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(url).with_value(ExtensionValue::Code(value.into()))
    }

    /// An extension carrying a `valueBoolean`.
    pub fn boolean(url: impl Into<String>, value: bool) -> Self {
        Self::new(url).with_value(ExtensionValue::Boolean(value))
    }

    /// This extension or the first nested one with a blank url.
    pub(crate) fn find_blank_url(&self) -> Option<&Extension> {
        if self.url.trim().is_empty() {
            return Some(self);
        }
        self.extension.iter().find_map(Extension::find_blank_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_is_flattened() {
        let ext = Extension::code("http://hl7.org/fhir/StructureDefinition/data-absent-reason", "unknown");
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                "valueCode": "unknown"
            })
        );
    }

    #[test]
    fn test_nested_extensions_deserialize() {
        let ext: Extension = serde_json::from_value(json!({
            "url": "http://example.org/outer",
            "extension": [
                {"url": "inner-a", "valueInteger": 3},
                {"url": "inner-b", "valueUri": "urn:uuid:1"}
            ]
        }))
        .unwrap();
        assert!(ext.value.is_none());
        assert_eq!(ext.extension[0].value, Some(ExtensionValue::Integer(3)));
        assert_eq!(
            ext.extension[1].value,
            Some(ExtensionValue::Uri("urn:uuid:1".to_string()))
        );
    }

    #[test]
    fn test_unmodelled_value_choice_rejected() {
        let err = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/amount",
            "valueDecimal": 1.5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("valueDecimal"));

        let err = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/coded",
            "valueCoding": {"code": "a"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("valueCoding"));
    }

    #[test]
    fn test_more_than_one_value_choice_rejected() {
        let err = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/ext",
            "valueString": "a",
            "valueCode": "b"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("more than one value[x]"));
    }

    #[test]
    fn test_unmodelled_choice_in_nested_extension_rejected() {
        let result = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/outer",
            "extension": [{"url": "inner", "valueQuantity": {"value": 3}}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_url_rejected() {
        let err = serde_json::from_value::<Extension>(json!({"valueBoolean": true})).unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let ext: Extension = serde_json::from_value(json!({
            "id": "e1",
            "url": "http://example.org/flag",
            "valueBoolean": false,
            "fhir_comments": ["x"]
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({"id": "e1", "url": "http://example.org/flag", "valueBoolean": false})
        );
    }

    #[test]
    fn test_find_blank_url_descends() {
        let ext = Extension::new("http://example.org/outer").with_extension(Extension::new("  "));
        assert_eq!(ext.find_blank_url().map(|e| e.url.as_str()), Some("  "));
        assert!(Extension::boolean("http://example.org/flag", true).find_blank_url().is_none());
    }
}
