//! Variable substitution for paths and file contents.
//!
//! Templates reference variables with `{{ .Name }}` markers, optionally piped
//! through filters (`{{ .Name | snake_case }}`). Markers naming a variable
//! without a binding are left in the output exactly as written: their opening
//! delimiter is swapped for a private marker before rendering and restored
//! afterwards.
use crate::error::Result;
use crate::resolver::Bindings;
use cruet::Inflector;
use log::warn;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Stands in for `{{` of an unbound marker while rendering.
const VARIABLE_MARKER: &str = "\u{E000}\u{E001}";

/// Stands in for `{#`, which is plain text in templates.
const COMMENT_MARKER: &str = "\u{E000}\u{E002}";

/// Stands in for `{%`, which is plain text in templates.
const BLOCK_MARKER: &str = "\u{E000}\u{E003}";

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-?)([ \t]*)\.([A-Za-z0-9_]+)").expect("valid token pattern")
});

/// Returns true if `name` can be referenced as a bare engine variable.
fn is_identifier(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `bindings` - Variables available to `{{ .Name }}` markers
    ///
    /// # Returns
    /// * `Result<String>` - Rendered string, unbound markers untouched
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined handling and the case filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_case_filters(&mut env);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

fn register_case_filters(env: &mut Environment<'static>) {
    env.add_filter("camel_case", |value: String| value.to_camel_case());
    env.add_filter("pascal_case", |value: String| value.to_pascal_case());
    env.add_filter("snake_case", |value: String| value.to_snake_case());
    env.add_filter("kebab_case", |value: String| value.to_kebab_case());
    env.add_filter("screaming_snake_case", |value: String| value.to_screaming_snake_case());
    env.add_filter("title_case", |value: String| value.to_title_case());
    env.add_filter("train_case", |value: String| value.to_train_case());
    env.add_filter("plural", |value: String| value.to_plural());
    env.add_filter("singular", |value: String| value.to_singular());

    // Sprig spellings
    env.add_filter("camelcase", |value: String| value.to_pascal_case());
    env.add_filter("snakecase", |value: String| value.to_snake_case());
    env.add_filter("kebabcase", |value: String| value.to_kebab_case());
}

/// Rewrites markers before rendering: bound `{{ .Name` becomes `{{ Name`,
/// unbound ones lose their opening delimiter to the private marker.
/// `{#` and `{%` are hidden too, so only `{{ }}` expressions are interpreted.
///
/// A bound name starting with a digit cannot be a bare engine variable and is
/// kept as written.
pub fn protect_markers(template: &str, bindings: &Bindings) -> String {
    let rewritten = TOKEN_PATTERN.replace_all(template, |caps: &Captures| {
        let (trim, space, name) = (&caps[1], &caps[2], &caps[3]);
        if bindings.contains_key(name) && is_identifier(name) {
            format!("{{{{{trim}{space}{name}")
        } else {
            if bindings.contains_key(name) {
                warn!("'{name}' is not a valid variable name, leaving '.{name}' as written");
            }
            format!("{VARIABLE_MARKER}{trim}{space}.{name}")
        }
    });
    rewritten.replace("{#", COMMENT_MARKER).replace("{%", BLOCK_MARKER)
}

/// Puts back the delimiters hidden by [`protect_markers`].
pub fn restore_markers(rendered: &str) -> String {
    rendered
        .replace(VARIABLE_MARKER, "{{")
        .replace(COMMENT_MARKER, "{#")
        .replace(BLOCK_MARKER, "{%")
}

/// Returns true if the string contains anything the engine would interpret.
pub fn has_template_syntax(template: &str) -> bool {
    template.contains("{{")
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse, references an
    ///   undefined value outside a `{{ .Name }}` marker, or a filter fails
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        if !has_template_syntax(template) {
            return Ok(template.to_string());
        }

        let prepared = protect_markers(template, bindings);
        let rendered = self.env.render_str(&prepared, bindings)?;
        Ok(restore_markers(&rendered))
    }
}
