//! Template tree transformation.
//! Walks the template root, classifies every entry and renders its path and,
//! for text files, its content. Nothing is written here: the result is a list
//! of staged entries handed to the output writer.

use globset::GlobSet;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs::Metadata;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    renderer::TemplateRenderer,
    resolver::Bindings,
};

/// Only this many leading bytes are searched for NUL bytes.
const SNIFF_LEN: usize = 8000;

/// Magic numbers of common binary formats.
const BINARY_SIGNATURES: &[&[u8]] = &[
    b"\x89PNG\r\n\x1a\n",
    b"\xff\xd8\xff",
    b"GIF87a",
    b"GIF89a",
    b"%PDF-",
    b"PK\x03\x04",
    b"\x1f\x8b",
    b"7z\xbc\xaf\x27\x1c",
    b"Rar!\x1a\x07",
    b"\x7fELF",
    b"\0asm",
    b"\xca\xfe\xba\xbe",
    b"\xcf\xfa\xed\xfe",
    b"\xce\xfa\xed\xfe",
    b"wOFF",
    b"wOF2",
    b"OggS",
    b"fLaC",
    b"ID3",
    b"SQLite format 3\0",
];

/// Content of a template entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Directory,
    Text(String),
    Binary(Vec<u8>),
}

/// One node of the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// `/`-separated path relative to the template root, may contain markers
    pub relative_path: String,
    pub content: EntryContent,
    /// Permission bits of the source
    pub mode: u32,
}

/// Content staged for the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContent {
    Directory,
    File(Vec<u8>),
}

/// A rendered entry, path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub path: PathBuf,
    pub content: OutputContent,
    pub mode: u32,
}

/// Sniffs content for binary data: a known magic number, a NUL byte near the
/// start, or content that is not UTF-8.
pub fn is_binary(content: &[u8]) -> bool {
    if BINARY_SIGNATURES.iter().any(|signature| content.starts_with(signature)) {
        return true;
    }
    let head = &content[..content.len().min(SNIFF_LEN)];
    if head.contains(&0) {
        return true;
    }
    std::str::from_utf8(content).is_err()
}

/// Checks that a rendered path is relative and stays inside the output directory.
pub fn is_rendered_path_valid(path: &str) -> bool {
    if path.is_empty() || Path::new(path).is_absolute() || path.starts_with('/') {
        return false;
    }
    path.split('/').all(|segment| !segment.is_empty() && segment != "..")
        && Path::new(path).components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Returns true if the last segment of a rendered path is blank, as for
/// `dir/{{.Optional}}` rendered with an empty value.
pub fn is_rendered_name_empty(path: &str) -> bool {
    path.rsplit('/').next().unwrap_or("").trim().is_empty()
}

fn relative_path_string(relative: &Path) -> Result<String> {
    let mut segments = Vec::new();
    for component in relative.components() {
        let segment = component.as_os_str().to_str().ok_or_else(|| {
            Error::ValidationError(format!("path '{}' is not valid UTF-8", relative.display()))
        })?;
        segments.push(segment);
    }
    Ok(segments.join("/"))
}

#[cfg(unix)]
fn source_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn source_mode(_metadata: &Metadata) -> u32 {
    crate::constants::DEFAULT_FILE_MODE
}

/// Renders a template tree against a set of bindings.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    bindings: &'a Bindings,
    ignored: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        bindings: &'a Bindings,
        ignored: &'a GlobSet,
    ) -> Self {
        Self { renderer, template_root, bindings, ignored }
    }

    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.ignored.is_match(relative_path)
    }

    /// Reads one entry of the template tree.
    ///
    /// # Arguments
    /// * `path` - Absolute path of the entry inside the template root
    ///
    /// # Returns
    /// * `Result<Option<SourceEntry>>` - None for the root itself and ignored paths
    pub fn read_entry(&self, path: &Path) -> Result<Option<SourceEntry>> {
        let relative = path
            .strip_prefix(self.template_root)
            .map_err(|e| Error::ValidationError(format!("{}: {e}", path.display())))?;
        let relative_path = relative_path_string(relative)?;
        if relative_path.is_empty() || self.is_ignored(&relative_path) {
            return Ok(None);
        }

        let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
        let mode = source_mode(&metadata);
        let content = if metadata.is_dir() {
            EntryContent::Directory
        } else {
            let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
            if is_binary(&bytes) {
                EntryContent::Binary(bytes)
            } else {
                match String::from_utf8(bytes) {
                    Ok(text) => EntryContent::Text(text),
                    Err(e) => EntryContent::Binary(e.into_bytes()),
                }
            }
        };

        Ok(Some(SourceEntry { relative_path, content, mode }))
    }

    fn render_in(&self, template: &str, relative_path: &str) -> Result<String> {
        self.renderer.render(template, self.bindings).map_err(|e| match e {
            Error::MinijinjaError(source) => {
                Error::TemplateError { path: relative_path.to_string(), source }
            }
            other => other,
        })
    }

    /// Turns a source entry into its output entry.
    ///
    /// # Returns
    /// * `Result<Option<OutputEntry>>` - None when the entry's name renders to nothing
    ///
    /// # Errors
    /// * `Error::TemplateError` if the path or text content fails to render
    /// * `Error::InvalidOutputPath` if the rendered path leaves the output directory
    pub fn process(&self, entry: SourceEntry) -> Result<Option<OutputEntry>> {
        let SourceEntry { relative_path, content, mode } = entry;

        debug!("Processing source entry: {relative_path}");
        let rendered_path = self.render_in(&relative_path, &relative_path)?;

        if is_rendered_name_empty(&rendered_path) {
            debug!("Skipping '{relative_path}' as its rendered name is empty");
            return Ok(None);
        }
        if !is_rendered_path_valid(&rendered_path) {
            return Err(Error::InvalidOutputPath { path: relative_path, rendered: rendered_path });
        }

        let content = match content {
            EntryContent::Directory => OutputContent::Directory,
            EntryContent::Binary(bytes) => {
                debug!("Copying binary file: {rendered_path}");
                OutputContent::File(bytes)
            }
            EntryContent::Text(text) => {
                let rendered = self.render_in(&text, &relative_path)?;
                if rendered == text {
                    debug!("Content unchanged: {rendered_path}");
                } else {
                    debug!("Rendered content: {rendered_path}");
                }
                OutputContent::File(rendered.into_bytes())
            }
        };

        Ok(Some(OutputEntry { path: PathBuf::from(rendered_path), content, mode }))
    }

    /// Walks the whole template root, depth first in lexical order, and
    /// stages every entry. Any failure aborts before anything is written.
    pub fn transform(&self) -> Result<Vec<OutputEntry>> {
        debug!("Transforming template {}", self.template_root.display());

        let walker = WalkDir::new(self.template_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let ignored = entry
                    .path()
                    .strip_prefix(self.template_root)
                    .ok()
                    .and_then(|relative| relative_path_string(relative).ok())
                    .is_some_and(|relative| self.is_ignored(&relative));
                if ignored {
                    debug!("Ignoring {}", entry.path().display());
                }
                !ignored
            });

        let mut staged = Vec::new();
        let mut skipped_dirs: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for dir_entry in walker {
            let dir_entry = dir_entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                Error::io(path, e.into())
            })?;

            let Some(source) = self.read_entry(dir_entry.path())? else {
                continue;
            };
            if skipped_dirs.iter().any(|dir| source.relative_path.starts_with(&format!("{dir}/"))) {
                debug!("Skipping '{}' inside a skipped directory", source.relative_path);
                continue;
            }

            let is_dir = matches!(source.content, EntryContent::Directory);
            let relative_path = source.relative_path.clone();
            match self.process(source)? {
                Some(output) => {
                    if !seen.insert(output.path.clone()) && !is_dir {
                        warn!(
                            "'{}' renders to '{}' which another entry already produced",
                            relative_path,
                            output.path.display()
                        );
                    }
                    staged.push(output);
                }
                None if is_dir => skipped_dirs.push(relative_path),
                None => {}
            }
        }

        debug!("Staged {} entries", staged.len());
        Ok(staged)
    }
}
