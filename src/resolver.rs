//! Variable resolution.
//! Merges arguments, overrides and interactive answers into the bindings used
//! for substitution. Precedence, highest first: argument, override, answer.

use crate::arguments::ArgumentTable;
use crate::config::{Prompt, PromptSpec};
use crate::error::{Error, Result};
use crate::overrides::OverrideTable;
use crate::prompt::{Prompter, Question};
use indexmap::IndexMap;
use log::debug;

/// Final variable name to value table, read-only once built.
pub type Bindings = IndexMap<String, String>;

/// Number of times a required free-text prompt is asked before giving up.
pub const REQUIRED_ATTEMPTS: usize = 3;

fn ask_text(prompt: &Prompt, prompter: &dyn Prompter) -> Result<String> {
    let question = Question::Text {
        message: &prompt.question,
        default: &prompt.default,
        required: prompt.required,
    };

    for attempt in 1..=REQUIRED_ATTEMPTS {
        let answer = prompter.ask(&question)?;
        let answer = if answer.is_empty() { prompt.default.clone() } else { answer };

        if !prompt.required || !answer.trim().is_empty() {
            return Ok(answer);
        }
        debug!("Blank answer for required '{}' (attempt {attempt})", prompt.name);
    }

    Err(Error::RequiredValueMissing { name: prompt.name.clone() })
}

fn ask_selection(prompt: &Prompt, prompter: &dyn Prompter) -> Result<String> {
    let default = prompt.effective_default();
    let question = Question::Select {
        message: &prompt.question,
        choices: &prompt.choices,
        default,
    };

    let answer = prompter.ask(&question)?;
    if answer.is_empty() {
        return Ok(default.to_string());
    }
    if !prompt.choices.contains(&answer) {
        return Err(Error::ValidationError(format!(
            "'{}' is not a valid choice for '{}' (expected one of: {})",
            answer,
            prompt.name,
            prompt.choices.join(", ")
        )));
    }
    Ok(answer)
}

/// Asks a single prompt through the prompter.
pub fn ask_prompt(prompt: &Prompt, prompter: &dyn Prompter) -> Result<String> {
    if prompt.is_choice() {
        ask_selection(prompt, prompter)
    } else {
        ask_text(prompt, prompter)
    }
}

/// Resolves every prompt of a template into bindings.
///
/// # Arguments
/// * `spec` - Prompts in declaration order
/// * `overrides` - Silent answers from the override file
/// * `arguments` - Caller-supplied values
/// * `prompter` - Asked for every prompt without an argument or override
///
/// # Returns
/// * `Result<Bindings>` - One entry per prompt, in declaration order, followed
///   by arguments and overrides that have no prompt
///
/// # Errors
/// * `Error::RequiredValueMissing` if a required prompt gets no usable answer
/// * `Error::ValidationError` if a selection answer is not one of the choices
pub fn resolve(
    spec: &PromptSpec,
    overrides: &OverrideTable,
    arguments: &ArgumentTable,
    prompter: &dyn Prompter,
) -> Result<Bindings> {
    let mut bindings = Bindings::with_capacity(spec.len() + arguments.len() + overrides.len());

    for prompt in spec {
        let value = if let Some(value) = arguments.get(&prompt.name) {
            debug!("Using argument for '{}'", prompt.name);
            value.clone()
        } else if let Some(value) = overrides.get(&prompt.name) {
            debug!("Using override for '{}'", prompt.name);
            value.clone()
        } else {
            ask_prompt(prompt, prompter)?
        };
        bindings.insert(prompt.name.clone(), value);
    }

    for (key, value) in arguments {
        if !bindings.contains_key(key) {
            bindings.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in overrides {
        if !bindings.contains_key(key) {
            bindings.insert(key.clone(), value.clone());
        }
    }

    Ok(bindings)
}
