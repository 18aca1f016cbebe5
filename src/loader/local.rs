use crate::error::{Error, Result};
use crate::loader::{LoadedTemplate, TemplateLoader};
use std::path::Path;

/// Loader for templates from the local filesystem.
/// The directory is used in place; nothing in it is modified.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Loads a template from the local filesystem.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistError` if the path is not a directory
    fn load(&self) -> Result<LoadedTemplate> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(LoadedTemplate::local(path))
    }
}
