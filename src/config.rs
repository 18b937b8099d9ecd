//! Configuration for pagination models
//!
//! Options can be given in code, or loaded from YAML or JSON:
//!
//! ```yaml
//! items: 1000
//! per_page: 20
//! page: 3
//! proximity: 2
//! uri: /posts?sort=asc
//! pattern: page={page}
//! ```
//!
//! Unknown keys are ignored. Numbers are signed so that negative values reach
//! validation in [`PaginationModel::apply`](crate::pagination::PaginationModel::apply)
//! and are reported as invalid arguments instead of parse errors.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a [`PaginationModel`](crate::pagination::PaginationModel), all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Total number of items (also accepted as `total`)
    #[serde(default, alias = "total", skip_serializing_if = "Option::is_none")]
    pub items: Option<i64>,

    /// Current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    /// Items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,

    /// URI of the current request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Page pattern, e.g. `page={page}` or `page/{page}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Pages linked on each side of the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity: Option<i64>,

    /// Label of the previous page arrow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_prev: Option<String>,

    /// Label of the next page arrow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_next: Option<String>,

    /// Keep disabled arrows on the first and last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_arrows_always: Option<bool>,
}

impl PaginationOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse options from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a file, JSON for `.json` files and YAML otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), is_json, "loading pagination options");

        let options = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };
        options.with_context(|| format!("Invalid options in {}", path.display()))
    }

    /// Options from `self`, with every option set in `other` taking precedence
    pub fn overlay(self, other: Self) -> Self {
        Self {
            items: other.items.or(self.items),
            page: other.page.or(self.page),
            per_page: other.per_page.or(self.per_page),
            uri: other.uri.or(self.uri),
            pattern: other.pattern.or(self.pattern),
            proximity: other.proximity.or(self.proximity),
            label_prev: other.label_prev.or(self.label_prev),
            label_next: other.label_next.or(self.label_next),
            show_arrows_always: other.show_arrows_always.or(self.show_arrows_always),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
items: 1000
per_page: 25
page: 3
proximity: 1
uri: /posts?sort=asc
pattern: p={page}
";
        let options = PaginationOptions::from_yaml_str(yaml).unwrap();
        assert_eq!(
            options,
            PaginationOptions {
                items: Some(1000),
                page: Some(3),
                per_page: Some(25),
                uri: Some("/posts?sort=asc".to_string()),
                pattern: Some("p={page}".to_string()),
                proximity: Some(1),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_total_alias() {
        let options = PaginationOptions::from_json_str(r#"{"total": 42}"#).unwrap();
        assert_eq!(options.items, Some(42));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let options =
            PaginationOptions::from_json_str(r#"{"page": 2, "theme": "dark", "limit": 9}"#)
                .unwrap();
        assert_eq!(options.page, Some(2));
        assert_eq!(options.per_page, None);
    }

    #[test]
    fn test_negative_values_parse() {
        let options = PaginationOptions::from_yaml_str("per_page: -5").unwrap();
        assert_eq!(options.per_page, Some(-5));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = PaginationOptions::from_yaml_str("items: [1, 2");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_overlay() {
        let base = PaginationOptions {
            items: Some(100),
            page: Some(2),
            pattern: Some("page/{page}".to_string()),
            ..Default::default()
        };
        let overrides = PaginationOptions {
            page: Some(4),
            proximity: Some(0),
            ..Default::default()
        };

        let merged = base.overlay(overrides);
        assert_eq!(merged.items, Some(100));
        assert_eq!(merged.page, Some(4));
        assert_eq!(merged.proximity, Some(0));
        assert_eq!(merged.pattern.as_deref(), Some("page/{page}"));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "items: 60\nper_page: 20").unwrap();

        let options = PaginationOptions::load(file.path()).unwrap();
        assert_eq!(options.items, Some(60));
        assert_eq!(options.per_page, Some(20));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"items": 7, "uri": "/a?page=2"}}"#).unwrap();

        let options = PaginationOptions::load(file.path()).unwrap();
        assert_eq!(options.items, Some(7));
        assert_eq!(options.uri.as_deref(), Some("/a?page=2"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PaginationOptions::load("/nonexistent/pager.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();

        let err = PaginationOptions::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid options in"));
    }
}
