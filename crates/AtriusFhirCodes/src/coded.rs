//! The coded value object shared by every vocabulary.
//!
//! Each vocabulary module (see [`crate::r5::code`]) defines a `Value` enum
//! implementing [`CodeValue`] and a type alias `Name = Coded<Value>`. The
//! canonical instance of every member lives in a `static`, so
//! [`Coded::of`] and [`Coded::of_code`] hand out the same reference each time.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::OnceLock;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::coding::Coding;
use crate::element::{Code, Element};
use crate::error::{CodeError, CodeResult};
use crate::extension::Extension;

/// A closed vocabulary of string codes.
///
/// Implemented by the `Value` enum the `code_system!` macro generates for each
/// vocabulary and not meant to be implemented by hand.
pub trait CodeValue:
    Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Name of the coded value type, e.g. `"SearchModifierCode"`.
    const TYPE_NAME: &'static str;
    /// URI of the code system the codes are drawn from.
    const SYSTEM: &'static str;

    /// Every member, in vocabulary order.
    fn all() -> &'static [Self];
    fn as_code(self) -> &'static str;
    fn display(self) -> &'static str;
    fn definition(self) -> Option<&'static str>;
    fn from_code(code: &str) -> CodeResult<Self>;
    /// The process-wide canonical instance for this member.
    fn canonical(self) -> &'static Coded<Self>;
}

/// An immutable coded element: an optional id, extensions, and a code drawn
/// from the vocabulary `V`.
pub struct Coded<V> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<V>,
    hash: OnceLock<u64>,
}

impl<V> Coded<V> {
    /// A bare instance holding only `value`. Used to initialize the
    /// vocabulary statics; elsewhere prefer [`Coded::of`].
    pub const fn constant(value: V) -> Self {
        Coded {
            id: None,
            extension: Vec::new(),
            value: Some(value),
            hash: OnceLock::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<V: CodeValue> Coded<V> {
    /// The canonical instance for `value`. Same reference on every call.
    pub fn of(value: V) -> &'static Self {
        trace!(type_name = V::TYPE_NAME, code = value.as_code(), "canonical lookup");
        value.canonical()
    }

    /// The canonical instance for a code string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atrius_fhir_codes::r5::code::{fhir_types, FhirTypes};
    ///
    /// let patient = FhirTypes::of_code("Patient").unwrap();
    /// assert!(std::ptr::eq(patient, &fhir_types::PATIENT));
    /// assert!(FhirTypes::of_code("NotAResourceType").is_err());
    /// ```
    pub fn of_code(code: &str) -> CodeResult<&'static Self> {
        match V::from_code(code) {
            Ok(value) => Ok(Self::of(value)),
            Err(err) => {
                debug!(type_name = V::TYPE_NAME, code, "rejected unrecognized code");
                Err(err)
            }
        }
    }

    /// Like [`Coded::of_code`], but absent input yields `Ok(None)`.
    pub fn of_optional_code(code: Option<&str>) -> CodeResult<Option<&'static Self>> {
        code.map(Self::of_code).transpose()
    }

    /// URI of the code system this type draws from.
    pub fn system() -> &'static str {
        V::SYSTEM
    }

    pub fn type_name() -> &'static str {
        V::TYPE_NAME
    }

    pub fn value_as_enum(&self) -> Option<V> {
        self.value
    }

    pub fn as_code(&self) -> Option<&'static str> {
        self.value.map(V::as_code)
    }

    pub fn display(&self) -> Option<&'static str> {
        self.value.map(V::display)
    }

    /// True for an instance with a code and no id or extensions; every
    /// canonical static is one.
    pub fn is_canonical(&self) -> bool {
        self.value.is_some() && self.id.is_none() && self.extension.is_empty()
    }

    /// Hash of `(id, extension, code)`, computed once and cached.
    ///
    /// The hasher is unkeyed, so the result is stable within a build.
    pub fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.id.hash(&mut hasher);
            self.extension.hash(&mut hasher);
            self.as_code().hash(&mut hasher);
            hasher.finish()
        })
    }

    pub fn builder() -> Builder<V> {
        Builder::new()
    }

    /// A builder pre-populated with this instance's id, extensions and code.
    pub fn to_builder(&self) -> Builder<V> {
        Builder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value,
            validating: true,
        }
    }

    pub fn to_coding(&self) -> Coding {
        match self.value {
            Some(value) => Coding::from_value(value),
            None => Coding {
                system: Some(V::SYSTEM.to_string()),
                ..Coding::default()
            },
        }
    }
}

impl<V: Clone> Clone for Coded<V> {
    fn clone(&self) -> Self {
        Coded {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for Coded<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.extension == other.extension && self.value == other.value
    }
}

impl<V: Eq> Eq for Coded<V> {}

impl<V: CodeValue> Hash for Coded<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<V: CodeValue> fmt::Debug for Coded<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(V::TYPE_NAME);
        if let Some(id) = &self.id {
            out.field("id", id);
        }
        if !self.extension.is_empty() {
            out.field("extension", &self.extension);
        }
        out.field("value", &self.as_code()).finish()
    }
}

/// Writes the code, or nothing for an extension-only element.
impl<V: CodeValue> fmt::Display for Coded<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code().unwrap_or_default())
    }
}

impl<V: CodeValue> From<&Coded<V>> for Code {
    fn from(coded: &Coded<V>) -> Self {
        Element {
            id: coded.id.clone(),
            extension: (!coded.extension.is_empty()).then(|| coded.extension.clone()),
            value: coded.as_code().map(str::to_string),
        }
    }
}

impl<V: CodeValue> From<Coded<V>> for Code {
    fn from(coded: Coded<V>) -> Self {
        Element {
            value: coded.as_code().map(str::to_string),
            id: coded.id,
            extension: (!coded.extension.is_empty()).then_some(coded.extension),
        }
    }
}

impl<V: CodeValue> TryFrom<Code> for Coded<V> {
    type Error = CodeError;

    fn try_from(code: Code) -> CodeResult<Self> {
        let mut builder = Builder::<V>::new()
            .extensions(code.extension.unwrap_or_default())
            .optional_code(code.value.as_deref())?;
        if let Some(id) = code.id {
            builder = builder.id(id);
        }
        builder.build()
    }
}

impl<V: CodeValue> Serialize for Coded<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let element: Element<&str, &Extension> = Element {
            id: self.id.clone(),
            extension: (!self.extension.is_empty()).then(|| self.extension.iter().collect()),
            value: self.as_code(),
        };
        element.serialize(serializer)
    }
}

impl<'de, V: CodeValue> Deserialize<'de> for Coded<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Code::deserialize(deserializer)?;
        Coded::try_from(code).map_err(de::Error::custom)
    }
}

/// Serializes a vocabulary member as its code string.
pub fn serialize_value<V, S>(value: V, serializer: S) -> Result<S::Ok, S::Error>
where
    V: CodeValue,
    S: Serializer,
{
    serializer.serialize_str(value.as_code())
}

/// Deserializes a vocabulary member from its code string.
pub fn deserialize_value<'de, V, D>(deserializer: D) -> Result<V, D::Error>
where
    V: CodeValue,
    D: Deserializer<'de>,
{
    struct CodeVisitor<V>(std::marker::PhantomData<V>);

    impl<V: CodeValue> Visitor<'_> for CodeVisitor<V> {
        type Value = V;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a {} code string", V::TYPE_NAME)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<V, E> {
            V::from_code(v).map_err(E::custom)
        }
    }

    deserializer.deserialize_str(CodeVisitor(std::marker::PhantomData))
}

/// Builder for [`Coded`] instances carrying an id or extensions.
///
/// ```rust
/// use atrius_fhir_codes::Extension;
/// use atrius_fhir_codes::r5::code::{search_modifier_code, SearchModifierCode};
///
/// let modifier = SearchModifierCode::builder()
///     .id("mod-1")
///     .extension(Extension::string("http://example.org/note", "legacy"))
///     .value(search_modifier_code::Value::Exact)
///     .build()
///     .unwrap();
/// assert_eq!(modifier.as_code(), Some("exact"));
/// assert_ne!(&modifier, &search_modifier_code::EXACT);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<V> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<V>,
    validating: bool,
}

impl<V: CodeValue> Default for Builder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CodeValue> Builder<V> {
    pub fn new() -> Self {
        Builder {
            id: None,
            extension: Vec::new(),
            value: None,
            validating: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends an extension.
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// Replaces all extensions.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension = extensions.into_iter().collect();
        self
    }

    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the value from its code string.
    pub fn code(self, code: &str) -> CodeResult<Self> {
        Ok(self.value(V::from_code(code)?))
    }

    /// Sets the value from an optional code string; `None` leaves the current
    /// value in place.
    pub fn optional_code(self, code: Option<&str>) -> CodeResult<Self> {
        match code {
            Some(code) => self.code(code),
            None => Ok(self),
        }
    }

    /// Toggles element validation in [`Builder::build`]. On by default.
    pub fn validating(mut self, validating: bool) -> Self {
        self.validating = validating;
        self
    }

    pub fn build(self) -> CodeResult<Coded<V>> {
        if self.validating {
            self.validate()?;
        }
        Ok(Coded {
            id: self.id,
            extension: self.extension,
            value: self.value,
            hash: OnceLock::new(),
        })
    }

    fn validate(&self) -> CodeResult<()> {
        if self.value.is_none() && self.extension.is_empty() {
            return Err(CodeError::EmptyElement {
                type_name: V::TYPE_NAME,
            });
        }
        if let Some(blank) = self.extension.iter().find_map(Extension::find_blank_url) {
            return Err(CodeError::InvalidExtension(format!(
                "extension{} on {} has no url",
                blank.id.as_deref().map(|id| format!(" '{id}'")).unwrap_or_default(),
                V::TYPE_NAME
            )));
        }
        Ok(())
    }
}
