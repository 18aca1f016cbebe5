//! Stencil turns a directory of template files into a concrete project by
//! resolving named variables and substituting them into file paths and
//! file contents.

/// Caller-supplied variable values (`--arg`, `--stdin`)
pub mod arguments;

/// Command-line interface module for the Stencil application
pub mod cli;

/// Collection detection and template selection
pub mod collection;

/// Prompt file parsing and validation (prompts.toml)
pub mod config;

/// Common constants and defaults
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Scaffolding pipeline orchestration
pub mod generator;

/// Paths excluded from the generated output
pub mod ignore;

/// Template acquisition from local paths and git repositories
pub mod loader;

/// Override file parsing (.override.toml)
pub mod overrides;

/// Template tree walking, classification and rendering
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Variable substitution engine
pub mod renderer;

/// Merge of arguments, overrides and answers into bindings
pub mod resolver;

/// Explicit pipeline configuration
pub mod settings;

/// Writing staged output to disk
pub mod writer;
