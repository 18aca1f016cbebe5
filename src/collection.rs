//! Collection detection and selection.
//! A template root without its own prompt file whose immediate
//! subdirectories carry prompt files is a collection of templates.

use crate::arguments::ArgumentTable;
use crate::constants::{COLLECTION_QUESTION, TEMPLATE_CHOICE_VARIABLE};
use crate::error::{Error, Result};
use crate::prompt::{Prompter, Question};
use crate::settings::Settings;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    /// The root is itself a template
    Single,
    /// The root holds several templates; names in lexical order
    Collection(Vec<String>),
}

/// Decides whether `root` is a single template or a collection.
///
/// Choices are the subdirectories containing a prompt file, sorted by name
/// (byte order, case sensitive).
pub fn classify<P: AsRef<Path>>(root: P, settings: &Settings) -> Result<TemplateKind> {
    let root = root.as_ref();
    if root.join(&settings.prompt_file).is_file() {
        debug!("'{}' is a single template", root.display());
        return Ok(TemplateKind::Single);
    }

    let mut choices = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| Error::io(root, e))? {
        let entry = entry.map_err(|e| Error::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() || !path.join(&settings.prompt_file).is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => choices.push(name),
            Err(name) => debug!("Skipping non UTF-8 directory {name:?}"),
        }
    }

    if choices.is_empty() {
        debug!("'{}' has no prompts, copying as is", root.display());
        return Ok(TemplateKind::Single);
    }

    choices.sort();
    debug!("'{}' is a collection of {} templates", root.display(), choices.len());
    Ok(TemplateKind::Collection(choices))
}

/// Obtains one template of a collection and returns its directory.
///
/// A value for the reserved choice variable in `arguments` selects the
/// template without asking.
pub fn select_template<P: AsRef<Path>>(
    root: P,
    choices: &[String],
    arguments: &ArgumentTable,
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    let choice = match arguments.get(TEMPLATE_CHOICE_VARIABLE) {
        Some(choice) => choice.clone(),
        None => {
            let default = choices.first().map(String::as_str).unwrap_or("");
            let answer = prompter.ask(&Question::Select {
                message: COLLECTION_QUESTION,
                choices,
                default,
            })?;
            if answer.is_empty() {
                default.to_string()
            } else {
                answer
            }
        }
    };

    if !choices.contains(&choice) {
        return Err(Error::ValidationError(format!(
            "'{}' is not a template of this collection (expected one of: {})",
            choice,
            choices.join(", ")
        )));
    }

    debug!("Selected template '{choice}'");
    Ok(root.as_ref().join(choice))
}
