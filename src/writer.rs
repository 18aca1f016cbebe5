//! Materializes staged entries in the output directory.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::{DEFAULT_DIR_MODE, DEFAULT_FILE_MODE},
    error::{Error, Result},
    processor::{OutputContent, OutputEntry},
};

/// What to do when a staged file already exists in the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingFiles {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Refuse to write anything if any staged file already exists
    Fail,
}

/// Mode of a written file: the safe default plus the source's execute bits.
pub fn output_file_mode(source_mode: u32) -> u32 {
    DEFAULT_FILE_MODE | (source_mode & 0o111)
}

fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_DIR_MODE);
    }
    builder.create(path).map_err(|e| Error::io(path, e))
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

fn write_file(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    set_mode(path, output_file_mode(mode))
}

/// Writes staged entries below an output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_root: PathBuf,
    existing_files: ExistingFiles,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(output_root: P, existing_files: ExistingFiles) -> Self {
        Self { output_root: output_root.into(), existing_files }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Returns the first staged file that already exists in the output directory.
    pub fn find_conflict(&self, entries: &[OutputEntry]) -> Option<PathBuf> {
        entries
            .iter()
            .filter(|entry| matches!(entry.content, OutputContent::File(_)))
            .map(|entry| self.output_root.join(&entry.path))
            .find(|target| target.exists())
    }

    /// Writes every entry and returns the created file paths.
    ///
    /// # Errors
    /// * `Error::OutputFileExistsError` under `ExistingFiles::Fail` when a
    ///   target file exists; nothing is written in that case
    /// * `Error::IoError` for any failed directory or file write
    pub fn write(&self, entries: &[OutputEntry]) -> Result<Vec<PathBuf>> {
        if self.existing_files == ExistingFiles::Fail {
            if let Some(path) = self.find_conflict(entries) {
                return Err(Error::OutputFileExistsError { path });
            }
        }

        create_dir_all(&self.output_root)?;

        let mut written = Vec::new();
        for entry in entries {
            let target = self.output_root.join(&entry.path);
            match &entry.content {
                OutputContent::Directory => {
                    debug!("Creating directory: {}", target.display());
                    create_dir_all(&target)?;
                }
                OutputContent::File(content) => {
                    debug!("Writing file: {}", target.display());
                    write_file(&target, content, entry.mode)?;
                    written.push(target);
                }
            }
        }
        Ok(written)
    }
}
