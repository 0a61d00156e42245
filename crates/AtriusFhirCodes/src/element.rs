use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::extension::Extension;

/// Generic element container supporting FHIR's extension mechanism.
///
/// A FHIR primitive can appear in three forms:
/// 1. **Primitive value**: just the value itself (`"active"`)
/// 2. **Extended primitive**: an object with `value`, `id` and/or `extension`
/// 3. **Extension-only**: an object with only `id` and/or `extension`
///
/// # Serialization Behavior
///
/// - If only `value` is present: serializes as the primitive value directly
/// - If `id` or `extension` are present: serializes as an object with all fields
/// - If everything is `None`: serializes as `null`
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::{Code, Element};
///
/// let simple: Code = Element::from_value("final".to_string());
/// assert_eq!(serde_json::to_string(&simple).unwrap(), "\"final\"");
///
/// let extended: Code = Element {
///     id: Some("status-1".to_string()),
///     ..simple
/// };
/// assert_eq!(
///     serde_json::to_string(&extended).unwrap(),
///     r#"{"id":"status-1","value":"final"}"#
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

/// The general FHIR `code` primitive: any string value, extensible.
pub type Code = Element<String, Extension>;

impl<V, E> Element<V, E> {
    pub fn from_value(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }

    /// Extensions as a slice, treating an absent list as empty.
    pub fn extensions(&self) -> &[E] {
        self.extension.as_deref().unwrap_or(&[])
    }
}

/// Visitor for the object form of an element.
struct ElementObjectVisitor<V, E>(PhantomData<(V, E)>);

impl<'de, V, E> Visitor<'de> for ElementObjectVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an Element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<E>> = None;
        let mut value: Option<V> = None;

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
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = map.next_value()?;
                }
                // Ignore any unknown fields encountered
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(Element {
            id,
            extension,
            value,
        })
    }
}

/// Visitor accepting either a bare primitive, an element object, or null.
struct AnyValueVisitor<V, E>(PhantomData<(V, E)>);

impl<V, E> AnyValueVisitor<V, E> {
    fn primitive<'de, D>(deserializer: D) -> Result<Element<V, E>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        V::deserialize(deserializer).map(Element::from_value)
    }
}

impl<'de, V, E> Visitor<'de> for AnyValueVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a primitive value (string, number, boolean), an object, or null")
    }

    fn visit_bool<Er: de::Error>(self, v: bool) -> Result<Self::Value, Er> {
        Self::primitive(de::value::BoolDeserializer::<Er>::new(v))
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<Self::Value, Er> {
        Self::primitive(de::value::I64Deserializer::<Er>::new(v))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<Self::Value, Er> {
        Self::primitive(de::value::U64Deserializer::<Er>::new(v))
    }

    fn visit_f64<Er: de::Error>(self, v: f64) -> Result<Self::Value, Er> {
        Self::primitive(de::value::F64Deserializer::<Er>::new(v))
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<Self::Value, Er> {
        Self::primitive(de::value::StrDeserializer::new(v))
    }

    fn visit_borrowed_str<Er: de::Error>(self, v: &'de str) -> Result<Self::Value, Er> {
        Self::primitive(de::value::BorrowedStrDeserializer::new(v))
    }

    fn visit_string<Er: de::Error>(self, v: String) -> Result<Self::Value, Er> {
        Self::primitive(de::value::StringDeserializer::new(v))
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Element {
            id: None,
            extension: None,
            value: None,
        })
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        self.visit_none()
    }

    fn visit_some<De>(self, deserializer: De) -> Result<Self::Value, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let map_deserializer = de::value::MapAccessDeserializer::new(map);
        map_deserializer.deserialize_map(ElementObjectVisitor(PhantomData))
    }

    // A single element is never a sequence
    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyValueVisitor(PhantomData))
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // If id and extension are None, serialize value directly (or null)
        if self.id.is_none() && self.extension.is_none() {
            return match &self.value {
                Some(val) => val.serialize(serializer),
                None => serializer.serialize_none(),
            };
        }

        let len = usize::from(self.id.is_some())
            + usize::from(self.extension.is_some())
            + usize::from(self.value.is_some());
        let mut state = serializer.serialize_struct("Element", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(extension) = &self.extension {
            state.serialize_field("extension", extension)?;
        }
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_deserializes_as_value() {
        let code: Code = serde_json::from_value(json!("active")).unwrap();
        assert_eq!(code.value.as_deref(), Some("active"));
        assert!(code.id.is_none());
        assert!(code.extension.is_none());
    }

    #[test]
    fn test_null_is_empty_element() {
        let code: Code = serde_json::from_value(json!(null)).unwrap();
        assert!(code.is_empty());
        assert_eq!(serde_json::to_value(&code).unwrap(), json!(null));
    }

    #[test]
    fn test_object_form_round_trip() {
        let input = json!({
            "id": "c1",
            "extension": [{"url": "http://example.org/ext", "valueBoolean": true}],
            "value": "draft"
        });
        let code: Code = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(code.id.as_deref(), Some("c1"));
        assert_eq!(code.extensions().len(), 1);
        assert_eq!(serde_json::to_value(&code).unwrap(), input);
    }

    #[test]
    fn test_extension_only_object() {
        let code: Code = serde_json::from_value(json!({
            "extension": [{"url": "http://example.org/absent", "valueCode": "unknown"}]
        }))
        .unwrap();
        assert!(code.value.is_none());
        assert!(!code.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let code: Code =
            serde_json::from_value(json!({"value": "x", "fhir_comments": ["note"]})).unwrap();
        assert_eq!(code.value.as_deref(), Some("x"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result: Result<Code, _> = serde_json::from_str(r#"{"id":"a","id":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_sequence_rejected() {
        let result: Result<Code, _> = serde_json::from_value(json!(["a", "b"]));
        assert!(result.is_err());
    }
}
