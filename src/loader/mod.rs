//! Template acquisition.
//! Turns a template argument (local path or git URL) into a read-only
//! directory on the local filesystem.

use crate::error::{Error, Result};
use crate::loader::git::GitLoader;
use crate::loader::local::LocalLoader;
use log::debug;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

pub mod git;
pub mod local;

/// Represents the source location of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS, git, SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    /// An existing local path always wins over URL detection.
    pub fn from_string(s: &str) -> Self {
        if Path::new(s).exists() {
            return Self::FileSystem(PathBuf::from(s));
        }
        if GitLoader::<&str>::is_git_url(s) {
            Self::Git(s.to_string())
        } else {
            Self::FileSystem(PathBuf::from(s))
        }
    }
}

/// A template tree available on disk.
///
/// Clones live in a temporary directory that is removed when this value is dropped.
#[derive(Debug)]
pub struct LoadedTemplate {
    root: PathBuf,
    _checkout: Option<TempDir>,
}

impl LoadedTemplate {
    pub fn local<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into(), _checkout: None }
    }

    pub fn checkout(checkout: TempDir) -> Self {
        Self { root: checkout.path().to_path_buf(), _checkout: Some(checkout) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Narrows the template to a directory within it.
    pub fn with_sub_path(mut self, sub_path: Option<&str>) -> Result<Self> {
        if let Some(sub_path) = sub_path.filter(|s| !s.is_empty()) {
            self.root = resolve_sub_path(&self.root, sub_path)?;
        }
        Ok(self)
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Loads a template and returns its location on disk.
    fn load(&self) -> Result<LoadedTemplate>;
}

/// Resolves `sub_path` inside `root`.
///
/// # Errors
/// * `Error::SubPathDoesNotExistError` if the directory does not exist or the
///   sub path is absolute or climbs out of the root
pub fn resolve_sub_path<P: AsRef<Path>>(root: P, sub_path: &str) -> Result<PathBuf> {
    let missing = || Error::SubPathDoesNotExistError { sub_path: sub_path.to_string() };

    let relative = Path::new(sub_path);
    if !relative.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
        return Err(missing());
    }

    let path = root.as_ref().join(relative);
    if !path.is_dir() {
        return Err(missing());
    }
    debug!("Using sub path '{}'", path.display());
    Ok(path)
}

/// Returns the template directory for the provided template argument.
pub fn load_template<S: AsRef<str>>(template: S, sub_path: Option<&str>) -> Result<LoadedTemplate> {
    let source = TemplateSource::from_string(template.as_ref());
    println!("Using template from the {source}");

    let loaded = match source {
        TemplateSource::Git(repo) => GitLoader::new(repo).load()?,
        TemplateSource::FileSystem(path) => LocalLoader::new(path).load()?,
    };
    loaded.with_sub_path(sub_path)
}
