//! User input and interaction handling.
//! The resolver and the collection selector only see the [`Prompter`]
//! capability, so they run without a terminal in tests.

use crate::error::Result;
use dialoguer::{FuzzySelect, Input, Select};

/// Choice lists longer than this are presented with fuzzy search.
const FUZZY_SELECT_THRESHOLD: usize = 10;

/// A single question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question<'a> {
    /// Free-text entry
    Text {
        message: &'a str,
        default: &'a str,
        required: bool,
    },
    /// Single selection from a list
    Select {
        message: &'a str,
        choices: &'a [String],
        default: &'a str,
    },
}

impl Question<'_> {
    pub fn message(&self) -> &str {
        match self {
            Question::Text { message, .. } | Question::Select { message, .. } => message,
        }
    }
}

/// Answers one question at a time.
///
/// Implementations return the answer as typed or selected; for a select
/// question that is the chosen string. A blank answer asks the caller to
/// apply the default.
pub trait Prompter {
    fn ask(&self, question: &Question<'_>) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask_text(&self, message: &str, default: &str, required: bool) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message).allow_empty(!required);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        if required {
            input = input.validate_with(|value: &String| -> std::result::Result<(), &str> {
                if value.trim().is_empty() {
                    Err("please provide a non-empty value")
                } else {
                    Ok(())
                }
            });
        }
        Ok(input.interact_text()?)
    }

    fn ask_selection(&self, message: &str, choices: &[String], default: &str) -> Result<String> {
        let default_index = choices.iter().position(|choice| choice == default).unwrap_or(0);

        let selection = if choices.len() > FUZZY_SELECT_THRESHOLD {
            FuzzySelect::new()
                .with_prompt(message)
                .items(choices)
                .default(default_index)
                .interact()?
        } else {
            Select::new()
                .with_prompt(message)
                .items(choices)
                .default(default_index)
                .interact()?
        };

        Ok(choices[selection].clone())
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question<'_>) -> Result<String> {
        match question {
            Question::Text { message, default, required } => {
                self.ask_text(message, default, *required)
            }
            Question::Select { message, choices, default } => {
                self.ask_selection(message, choices, default)
            }
        }
    }
}

/// Non-interactive prompter: every answer is blank, so defaults apply.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn ask(&self, question: &Question<'_>) -> Result<String> {
        log::debug!("Answering '{}' with its default", question.message());
        Ok(String::new())
    }
}
