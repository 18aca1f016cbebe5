//! Common constants used throughout the Stencil application.

/// Prompt definition file looked up at the template root
pub const PROMPT_FILE: &str = "prompts.toml";

/// File of silent answers that bypass prompting
pub const OVERRIDE_FILE: &str = ".override.toml";

/// Variable holding the template chosen from a collection
pub const TEMPLATE_CHOICE_VARIABLE: &str = "__Template";

/// Names that prompt and override files may not declare
pub const RESERVED_NAMES: [&str; 1] = [TEMPLATE_CHOICE_VARIABLE];

/// Paths never copied to the output, relative to the template root.
/// `*` does not cross `/`, so `README.*` only matches the top-level readme.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 4] = [".git", ".git/**", "README", "README.*"];

/// Question shown when the template root is a collection
pub const COLLECTION_QUESTION: &str = "Choose a project template";

/// Mode applied to every written file before the execute bits are added back
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Mode for created directories
pub const DEFAULT_DIR_MODE: u32 = 0o755;
