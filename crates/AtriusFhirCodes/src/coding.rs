use serde::{Deserialize, Serialize};

use crate::coded::CodeValue;

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display: Option<String>,
}

impl Coding {
    /// The coding of a vocabulary member: its system, code and display.
    pub fn from_value<V: CodeValue>(value: V) -> Self {
        Coding {
            system: Some(V::SYSTEM.to_string()),
            version: None,
            code: Some(value.as_code().to_string()),
            display: Some(value.display().to_string()),
        }
    }

    /// Whether this coding names `code` in `system`.
    pub fn matches(&self, system: &str, code: &str) -> bool {
        self.system.as_deref() == Some(system) && self.code.as_deref() == Some(code)
    }
}
