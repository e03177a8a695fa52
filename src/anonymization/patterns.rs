//! Pattern library for structured PII detection
//!
//! A [`PiiConfig`] is an ordered list of `(type name, regex, placeholder
//! prefix)` entries. Order matters: entries are applied one after the other,
//! so an earlier entry can consume text that a later one would also match.

use crate::domain::{ReduxerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in pattern library, in matching order
pub const DEFAULT_PATTERN_LIBRARY: &str = include_str!("../../patterns/pii_patterns.toml");

/// Pattern definition as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    /// PII type name (e.g. `phone_number`), also the counter key
    pub name: String,
    /// Regular expression source
    pub pattern: String,
    /// Placeholder prefix; the per-type counter is appended without a separator
    pub placeholder: String,
}

impl PatternDefinition {
    /// Create a new pattern definition
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            placeholder: placeholder.into(),
        }
    }
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Compiled PII pattern
#[derive(Debug, Clone)]
pub struct PiiPattern {
    /// PII type name
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// Placeholder prefix
    pub placeholder: String,
}

/// Ordered, compiled PII configuration
#[derive(Debug, Clone)]
pub struct PiiConfig {
    patterns: Vec<PiiPattern>,
}

impl PiiConfig {
    /// Compile a configuration from definitions, keeping their order
    ///
    /// # Errors
    ///
    /// Returns [`ReduxerError::Pattern`] if a regex does not compile, or if a
    /// name or placeholder is empty or a name is repeated.
    pub fn from_definitions(definitions: &[PatternDefinition]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(definitions.len());
        let mut placeholder_owner: HashMap<&str, &str> = HashMap::new();

        for def in definitions {
            if def.name.trim().is_empty() {
                return Err(ReduxerError::Pattern {
                    name: def.name.clone(),
                    message: "pattern name must not be empty".to_string(),
                });
            }
            if def.placeholder.is_empty() {
                return Err(ReduxerError::Pattern {
                    name: def.name.clone(),
                    message: "placeholder must not be empty".to_string(),
                });
            }
            if patterns.iter().any(|p: &PiiPattern| p.name == def.name) {
                return Err(ReduxerError::Pattern {
                    name: def.name.clone(),
                    message: "pattern name is defined more than once".to_string(),
                });
            }

            let regex = Regex::new(&def.pattern).map_err(|e| ReduxerError::Pattern {
                name: def.name.clone(),
                message: e.to_string(),
            })?;

            // Same prefix means both types emit `[X]1`, `[X]2`, ... and the
            // lookup table keeps only the first mapping for each.
            if let Some(owner) = placeholder_owner.insert(&def.placeholder, &def.name) {
                tracing::warn!(
                    placeholder = %def.placeholder,
                    first = owner,
                    second = %def.name,
                    "Two PII types share a placeholder prefix; their placeholders will collide"
                );
            }

            patterns.push(PiiPattern {
                name: def.name.clone(),
                regex,
                placeholder: def.placeholder.clone(),
            });
        }

        Ok(Self { patterns })
    }

    /// Create a configuration from TOML content containing `[[patterns]]` tables
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)?;
        Self::from_definitions(&library.patterns)
    }

    /// Built-in patterns: phone number, email, SSN, website (in that order)
    pub fn default_patterns() -> Result<Self> {
        Self::from_toml(DEFAULT_PATTERN_LIBRARY)
    }

    /// Iterate patterns in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &PiiPattern> {
        self.patterns.iter()
    }

    /// Pattern names in configuration order
    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }

    /// Look up a pattern by type name
    pub fn get(&self, name: &str) -> Option<&PiiPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_patterns() {
        let config = PiiConfig::default_patterns().unwrap();
        assert_eq!(
            config.names(),
            vec![
                "phone_number",
                "text_address",
                "social_security_number",
                "website"
            ]
        );
    }

    #[test]
    fn test_email_pattern() {
        let config = PiiConfig::default_patterns().unwrap();
        let email = config.get("text_address").unwrap();
        assert_eq!(email.placeholder, "[EMAIL]");
        assert!(email.regex.is_match("test@example.com"));
        assert!(!email.regex.is_match("not-an-email"));
    }

    #[test]
    fn test_phone_pattern() {
        let config = PiiConfig::default_patterns().unwrap();
        let phone = config.get("phone_number").unwrap();
        assert!(phone.regex.is_match("Call me at 123-456-7890"));
        assert!(phone.regex.is_match("123.456.7890"));
        assert!(!phone.regex.is_match("123-45-6789"));
    }

    #[test]
    fn test_ssn_pattern() {
        let config = PiiConfig::default_patterns().unwrap();
        let ssn = config.get("social_security_number").unwrap();
        assert!(ssn.regex.is_match("My SSN is 123-45-6789."));
    }

    #[test]
    fn test_malformed_regex_is_reported_with_name() {
        let defs = vec![PatternDefinition::new("broken", r"(\d{3}", "[BROKEN]")];
        let err = PiiConfig::from_definitions(&defs).unwrap_err();
        match err {
            ReduxerError::Pattern { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let defs = vec![PatternDefinition::new("phone", r"\d+", "")];
        assert!(PiiConfig::from_definitions(&defs).is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let defs = vec![
            PatternDefinition::new("phone", r"\d{3}", "[PHONE]"),
            PatternDefinition::new("phone", r"\d{4}", "[PHONE2]"),
        ];
        assert!(PiiConfig::from_definitions(&defs).is_err());
    }

    #[test]
    fn test_shared_placeholder_is_allowed() {
        // Accepted with a warning; the lookup consequence is covered in engine tests
        let defs = vec![
            PatternDefinition::new("phone", r"\d{3}-\d{4}", "[NUM]"),
            PatternDefinition::new("fax", r"\d{4}-\d{4}", "[NUM]"),
        ];
        let config = PiiConfig::from_definitions(&defs).unwrap();
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let toml = r#"
[[patterns]]
name = "zeta"
pattern = 'z+'
placeholder = "[Z]"

[[patterns]]
name = "alpha"
pattern = 'a+'
placeholder = "[A]"
"#;
        let config = PiiConfig::from_toml(toml).unwrap();
        assert_eq!(config.names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_from_toml_empty_library() {
        let config = PiiConfig::from_toml("").unwrap();
        assert!(config.is_empty());
    }
}
