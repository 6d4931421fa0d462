//! Rendering configuration.
use serde::{Deserialize, Serialize};

use crate::CategoryScheme;

pub const DEFAULT_CLASS_PREFIX: &str = "cpp-";
pub const DEFAULT_ELEMENT: &str = "span";

/// How fragments are categorized and wrapped.
///
/// Deserializes from a partial object; missing fields take their defaults:
///
/// ```json
/// { "scheme": "split", "class_prefix": "hl-", "element": "span" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    pub scheme: CategoryScheme,
    /// Prepended to every category class name.
    pub class_prefix: String,
    /// Tag name of the wrapper element.
    pub element: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            scheme: CategoryScheme::default(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            element: DEFAULT_ELEMENT.to_string(),
        }
    }
}

impl HighlightConfig {
    pub fn with_scheme(scheme: CategoryScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }
}
