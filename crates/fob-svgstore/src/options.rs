//! Plugin options
//!
//! Options arrive from the host configuration as a free-form JSON value, so
//! loading is lenient: anything missing or of the wrong type falls back to its
//! default instead of failing the build.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for sprite injection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SvgstoreOptions {
    /// Prepended to every icon id
    pub prefix: String,

    /// Emit every icon into this single asset instead of the bundles that
    /// required them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl SvgstoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a host configuration value
    ///
    /// # Example
    ///
    /// ```
    /// use fob_svgstore::SvgstoreOptions;
    /// use serde_json::json;
    ///
    /// let options = SvgstoreOptions::from_value(&json!({ "prefix": "icon-", "fileName": 42 }));
    /// assert_eq!(options.prefix, "icon-");
    /// assert_eq!(options.file_name, None);
    /// ```
    pub fn from_value(value: &Value) -> Self {
        let prefix = value
            .get("prefix")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let file_name = value
            .get("fileName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Self { prefix, file_name }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        self.file_name = (!file_name.is_empty()).then_some(file_name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let options = SvgstoreOptions::default();
        assert_eq!(options.prefix, "");
        assert!(options.file_name.is_none());
    }

    #[test]
    fn from_value_reads_known_keys() {
        let options = SvgstoreOptions::from_value(&json!({
            "prefix": "ico-",
            "fileName": "sprite.js"
        }));

        assert_eq!(options.prefix, "ico-");
        assert_eq!(options.file_name.as_deref(), Some("sprite.js"));
    }

    #[test]
    fn from_value_falls_back_on_invalid_values() {
        let options = SvgstoreOptions::from_value(&json!({
            "prefix": ["nope"],
            "fileName": ""
        }));
        assert_eq!(options, SvgstoreOptions::default());

        let options = SvgstoreOptions::from_value(&Value::Null);
        assert_eq!(options, SvgstoreOptions::default());
    }

    #[test]
    fn deserializes_camel_case() {
        let options: SvgstoreOptions =
            serde_json::from_value(json!({ "fileName": "icons.js" })).unwrap();
        assert_eq!(options.file_name.as_deref(), Some("icons.js"));
        assert_eq!(options.prefix, "");
    }

    #[test]
    fn builder() {
        let options = SvgstoreOptions::new()
            .with_prefix("i-")
            .with_file_name("sprite.js");
        assert_eq!(options.prefix, "i-");
        assert_eq!(options.file_name.as_deref(), Some("sprite.js"));

        let options = options.with_file_name("");
        assert!(options.file_name.is_none());
    }
}
