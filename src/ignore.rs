//! File and directory ignore pattern handling for Stencil templates.
//! Control files and configured patterns are excluded from the generated
//! output, similar to .gitignore functionality.

use crate::error::{Error, Result};
use crate::settings::Settings;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

/// Builds the set of ignored paths for a template.
///
/// # Arguments
/// * `settings` - Supplies the control file names and extra patterns
///
/// # Returns
/// * `Result<GlobSet>` - Patterns matched against `/`-separated paths relative
///   to the template root
///
/// # Notes
/// - The prompt and override files are always ignored
/// - `*` does not match `/`, so `README.*` only matches at the top level
/// - Invalid patterns result in an IgnorePatternError
pub fn build_ignore_set(settings: &Settings) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let patterns = [settings.prompt_file.as_str(), settings.override_file.as_str()]
        .into_iter()
        .chain(settings.ignored_patterns.iter().map(String::as_str));

    for pattern in patterns {
        debug!("Ignoring pattern '{pattern}'");
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::IgnorePatternError(format!("'{pattern}': {e}")))?;
        builder.add(glob);
    }

    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}
