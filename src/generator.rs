//! Core scaffolding pipeline.
//! classify → (select from collection) → load prompts and overrides →
//! resolve → transform → write.

use crate::arguments::ArgumentTable;
use crate::collection::{classify, select_template, TemplateKind};
use crate::config::{load_prompt_spec, Prompt};
use crate::constants::TEMPLATE_CHOICE_VARIABLE;
use crate::error::Result;
use crate::ignore::build_ignore_set;
use crate::overrides::load_overrides;
use crate::processor::{OutputEntry, Processor};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::resolver::{resolve, Bindings};
use crate::settings::Settings;
use crate::writer::{ExistingFiles, OutputWriter};
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};

/// Variables a template expects, as reported by the list-arguments mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateArguments {
    /// The root is a collection; these are its templates
    Collection(Vec<String>),
    /// Prompts of a single template
    Prompts(Vec<Prompt>),
}

impl fmt::Display for TemplateArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateArguments::Collection(choices) => {
                writeln!(f, "templates available in collection")?;
                for choice in choices {
                    writeln!(f, "\t{choice}")?;
                }
            }
            TemplateArguments::Prompts(prompts) => {
                writeln!(f, "arguments offered by template")?;
                for prompt in prompts {
                    if prompt.is_choice() {
                        writeln!(
                            f,
                            "\t{}={} (default: {})",
                            prompt.name,
                            prompt.choices.join(", "),
                            prompt.effective_default()
                        )?;
                    } else {
                        writeln!(f, "\t{} (default: {})", prompt.name, prompt.default)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Drives a template through the whole pipeline.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    prompter: &'a dyn Prompter,
    settings: Settings,
    arguments: ArgumentTable,
    existing_files: ExistingFiles,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, prompter: &'a dyn Prompter) -> Self {
        Self {
            renderer,
            prompter,
            settings: Settings::default(),
            arguments: ArgumentTable::new(),
            existing_files: ExistingFiles::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets values for variables; prompts for the same names are skipped.
    pub fn with_arguments(mut self, arguments: ArgumentTable) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_existing_files(mut self, existing_files: ExistingFiles) -> Self {
        self.existing_files = existing_files;
        self
    }

    /// Returns the directory of the template to scaffold, asking for a
    /// choice when `root` is a collection. Collections are one level deep.
    pub fn template_root(&self, root: &Path) -> Result<PathBuf> {
        match classify(root, &self.settings)? {
            TemplateKind::Single => Ok(root.to_path_buf()),
            TemplateKind::Collection(choices) => {
                select_template(root, &choices, &self.arguments, self.prompter)
            }
        }
    }

    /// Loads prompts and overrides of a single template and resolves its bindings.
    pub fn resolve(&self, template_root: &Path) -> Result<Bindings> {
        let spec = load_prompt_spec(template_root.join(&self.settings.prompt_file), &self.settings)?;
        let overrides =
            load_overrides(template_root.join(&self.settings.override_file), &self.settings)?;

        let mut arguments = self.arguments.clone();
        arguments.shift_remove(TEMPLATE_CHOICE_VARIABLE);

        resolve(&spec, &overrides, &arguments, self.prompter)
    }

    /// Renders the template tree into staged output entries.
    pub fn transform(&self, template_root: &Path, bindings: &Bindings) -> Result<Vec<OutputEntry>> {
        let ignored = build_ignore_set(&self.settings)?;
        Processor::new(self.renderer, template_root, bindings, &ignored).transform()
    }

    /// Scaffolds `root` into `output_dir` and returns the written file paths.
    ///
    /// # Flow
    /// 1. Detects a collection and narrows to the chosen template
    /// 2. Resolves variables from arguments, overrides and prompts
    /// 3. Renders paths and text contents of the template tree
    /// 4. Writes the staged entries
    pub fn generate(&self, root: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let template_root = self.template_root(root)?;
        debug!("Scaffolding from {}", template_root.display());

        let bindings = self.resolve(&template_root)?;
        debug!("Resolved {} variable(s)", bindings.len());

        let entries = self.transform(&template_root, &bindings)?;

        let written = OutputWriter::new(output_dir, self.existing_files).write(&entries)?;
        info!("Wrote {} file(s) to {}", written.len(), output_dir.display());
        Ok(written)
    }

    /// Reports the variables a template expects without scaffolding.
    pub fn template_arguments(&self, root: &Path) -> Result<TemplateArguments> {
        match classify(root, &self.settings)? {
            TemplateKind::Collection(choices) => Ok(TemplateArguments::Collection(choices)),
            TemplateKind::Single => {
                let spec = load_prompt_spec(root.join(&self.settings.prompt_file), &self.settings)?;
                Ok(TemplateArguments::Prompts(spec.prompts().to_vec()))
            }
        }
    }
}
