/// Declares a closed FHIR vocabulary inside the current module.
///
/// ```ignore
/// code_system! {
///     /// Docs for the coded value type.
///     SearchModifierCode => "http://hl7.org/fhir/search-modifier-code";
///
///     Missing, MISSING = "missing" => "Missing",
///         "The search parameter returns resources that have a value or not.";
///     Exact, EXACT = "exact" => "Exact";
/// }
/// ```
///
/// Each entry is `Variant, CONSTANT = "code" => "Display"` with an optional
/// definition. The expansion provides:
///
/// - `enum Value` with `ALL`, `as_code`, `display`, `definition`, `from_code`,
///   `from_optional_code`, `to_coding`, `FromStr`, `TryFrom<&str>`, `Display`
///   and serde support;
/// - the [`CodeValue`](crate::coded::CodeValue) impl for `Value`;
/// - `type SearchModifierCode = Coded<Value>`;
/// - one canonical `static CONSTANT: SearchModifierCode` per entry.
macro_rules! code_system {
    (@definition) => {
        None
    };
    (@definition $definition:literal) => {
        Some($definition)
    };
    (
        $(#[$meta:meta])*
        $name:ident => $system:literal;

        $(
            $variant:ident, $constant:ident = $code:literal => $display:literal
                $(, $definition:literal)?;
        )+
    ) => {
        #[doc = concat!("Members of the [`", stringify!($name), "`] vocabulary.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Value {
            $(
                #[doc = concat!("`", $code, "`: ", $display)]
                $variant,
            )+
        }

        impl Value {
            /// Every member, in vocabulary order.
            pub const ALL: &'static [Value] = &[$(Value::$variant),+];

            pub const fn as_code(self) -> &'static str {
                match self {
                    $(Value::$variant => $code,)+
                }
            }

            pub const fn display(self) -> &'static str {
                match self {
                    $(Value::$variant => $display,)+
                }
            }

            pub const fn definition(self) -> Option<&'static str> {
                match self {
                    $(Value::$variant => $crate::macros::code_system!(@definition $($definition)?),)+
                }
            }

            /// Exact, case-sensitive match against the vocabulary's codes.
            pub fn from_code(code: &str) -> $crate::CodeResult<Self> {
                match code {
                    $($code => Ok(Value::$variant),)+
                    _ => Err($crate::CodeError::unrecognized(stringify!($name), code)),
                }
            }

            pub fn from_optional_code(code: Option<&str>) -> $crate::CodeResult<Option<Self>> {
                code.map(Self::from_code).transpose()
            }

            pub fn to_coding(self) -> $crate::Coding {
                $crate::Coding::from_value(self)
            }
        }

        impl $crate::coded::CodeValue for Value {
            const TYPE_NAME: &'static str = stringify!($name);
            const SYSTEM: &'static str = $system;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn as_code(self) -> &'static str {
                Value::as_code(self)
            }

            fn display(self) -> &'static str {
                Value::display(self)
            }

            fn definition(self) -> Option<&'static str> {
                Value::definition(self)
            }

            fn from_code(code: &str) -> $crate::CodeResult<Self> {
                Value::from_code(code)
            }

            fn canonical(self) -> &'static $name {
                match self {
                    $(Value::$variant => &$constant,)+
                }
            }
        }

        impl ::std::str::FromStr for Value {
            type Err = $crate::CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Value::from_code(s)
            }
        }

        impl TryFrom<&str> for Value {
            type Error = $crate::CodeError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Value::from_code(s)
            }
        }

        impl ::std::fmt::Display for Value {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_code())
            }
        }

        impl ::serde::Serialize for Value {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::coded::serialize_value(*self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for Value {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::coded::deserialize_value(deserializer)
            }
        }

        $(#[$meta])*
        #[doc = ""]
        #[doc = concat!("Code system: `", $system, "`")]
        pub type $name = $crate::coded::Coded<Value>;

        $(
            #[doc = $display]
            pub static $constant: $name = $crate::coded::Coded::constant(Value::$variant);
        )+
    };
}

pub(crate) use code_system;
