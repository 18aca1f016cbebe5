//! Explicit configuration for the scaffolding pipeline.
//! Every stage that needs control-file names, reserved names or ignore
//! rules receives a `Settings` value instead of reading global state.

use crate::constants::{DEFAULT_IGNORE_PATTERNS, OVERRIDE_FILE, PROMPT_FILE, RESERVED_NAMES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name of the prompt definition file at a template root
    pub prompt_file: String,
    /// Name of the override file at a template root
    pub override_file: String,
    /// Variable names that prompt and override files may not use
    pub reserved_names: Vec<String>,
    /// Glob patterns excluded from the output, matched against relative paths
    pub ignored_patterns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt_file: PROMPT_FILE.to_string(),
            override_file: OVERRIDE_FILE.to_string(),
            reserved_names: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
            ignored_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn with_prompt_file<S: Into<String>>(mut self, name: S) -> Self {
        self.prompt_file = name.into();
        self
    }

    pub fn with_override_file<S: Into<String>>(mut self, name: S) -> Self {
        self.override_file = name.into();
        self
    }

    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignored_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|reserved| reserved == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.prompt_file, "prompts.toml");
        assert_eq!(settings.override_file, ".override.toml");
        assert!(settings.is_reserved("__Template"));
        assert!(!settings.is_reserved("ProjectName"));
    }

    #[test]
    fn test_builder_replaces_lists() {
        let settings = Settings::default()
            .with_reserved_names(["Secret"])
            .with_ignored_patterns(Vec::<String>::new());
        assert!(settings.is_reserved("Secret"));
        assert!(!settings.is_reserved("__Template"));
        assert!(settings.ignored_patterns.is_empty());
    }
}
