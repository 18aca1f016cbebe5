//! Prompt definition handling for Stencil templates.
//! This module loads the prompt file at a template root and validates it into
//! an ordered list of variable requests.

use crate::error::{Error, Result};
use crate::settings::Settings;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A single variable request declared with a `[[prompt]]` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Prompt {
    /// Variable name, unique within the file
    #[serde(default)]
    pub name: String,
    /// Text shown to the user
    #[serde(default, rename = "prompt")]
    pub question: String,
    /// Whether a blank free-text answer is rejected
    #[serde(default)]
    pub required: bool,
    /// Answer used for a blank response
    #[serde(default)]
    pub default: String,
    /// Allowed answers; empty means free text
    #[serde(default)]
    pub choices: Vec<String>,
}

impl Prompt {
    pub fn is_choice(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Value a blank answer resolves to.
    /// For choice prompts without a default this is the first choice.
    pub fn effective_default(&self) -> &str {
        if self.default.is_empty() {
            self.choices.first().map(String::as_str).unwrap_or("")
        } else {
            &self.default
        }
    }
}

#[derive(Debug, Deserialize)]
struct PromptFile {
    #[serde(default, rename = "prompt")]
    prompts: Vec<Prompt>,
}

/// Ordered sequence of prompts, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSpec {
    prompts: Vec<Prompt>,
}

impl PromptSpec {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prompt> {
        self.prompts.iter()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prompts.iter().any(|prompt| prompt.name == name)
    }
}

impl<'a> IntoIterator for &'a PromptSpec {
    type Item = &'a Prompt;
    type IntoIter = std::slice::Iter<'a, Prompt>;

    fn into_iter(self) -> Self::IntoIter {
        self.prompts.iter()
    }
}

/// Loads the prompt file of a template.
///
/// # Arguments
/// * `prompt_path` - Path to the prompt file
/// * `settings` - Supplies the reserved variable names
///
/// # Returns
/// * `Result<PromptSpec>` - The validated prompts; empty when the file does not exist
///
/// # Errors
/// * `Error::MalformedPromptSpec` if the file fails to parse or a record is incomplete
/// * `Error::ReservedVariable` if a record uses a reserved name
pub fn load_prompt_spec<P: AsRef<Path>>(prompt_path: P, settings: &Settings) -> Result<PromptSpec> {
    let prompt_path = prompt_path.as_ref();
    if !prompt_path.is_file() {
        debug!("No prompt file at {}", prompt_path.display());
        return Ok(PromptSpec::default());
    }

    debug!("Loading prompts from {}", prompt_path.display());
    let content =
        std::fs::read_to_string(prompt_path).map_err(|e| Error::io(prompt_path, e))?;
    parse_prompt_spec(&content, prompt_path, settings)
}

/// Parses and validates prompt file content.
/// `prompt_path` is only used in error messages.
pub fn parse_prompt_spec<P: AsRef<Path>>(
    content: &str,
    prompt_path: P,
    settings: &Settings,
) -> Result<PromptSpec> {
    let prompt_path = prompt_path.as_ref();
    let malformed = |reason: String| Error::MalformedPromptSpec {
        path: prompt_path.to_path_buf(),
        reason,
    };

    let file: PromptFile = toml::from_str(content).map_err(|e| malformed(e.to_string()))?;

    let mut seen = HashSet::new();
    for prompt in &file.prompts {
        if prompt.name.is_empty() || prompt.question.is_empty() {
            return Err(malformed(
                "prompt with missing name or prompt required field".to_string(),
            ));
        }
        if settings.is_reserved(&prompt.name) {
            return Err(Error::ReservedVariable {
                path: prompt_path.to_path_buf(),
                name: prompt.name.clone(),
            });
        }
        if !seen.insert(prompt.name.as_str()) {
            return Err(malformed(format!("duplicate prompt name '{}'", prompt.name)));
        }
        if prompt.is_choice()
            && !prompt.default.is_empty()
            && !prompt.choices.contains(&prompt.default)
        {
            return Err(malformed(format!(
                "default '{}' of prompt '{}' is not one of its choices",
                prompt.default, prompt.name
            )));
        }
    }

    debug!("Loaded {} prompt(s) from {}", file.prompts.len(), prompt_path.display());
    Ok(PromptSpec::new(file.prompts))
}
