use stencil::error::Error;
use stencil::ignore::build_ignore_set;
use stencil::settings::Settings;

#[test]
fn test_default_ignore_set() {
    let glob_set = build_ignore_set(&Settings::default()).unwrap();

    assert!(glob_set.is_match("prompts.toml"));
    assert!(glob_set.is_match(".override.toml"));
    assert!(glob_set.is_match(".git"));
    assert!(glob_set.is_match(".git/objects/ab/cdef"));
    assert!(glob_set.is_match("README"));
    assert!(glob_set.is_match("README.md"));

    assert!(!glob_set.is_match("docs/README.md"));
    assert!(!glob_set.is_match("sub/prompts.toml"));
    assert!(!glob_set.is_match("src/main.rs"));
}

#[test]
fn test_custom_settings() {
    let settings = Settings::default()
        .with_prompt_file("questions.toml")
        .with_ignored_patterns(["**/*.pyc"]);
    let glob_set = build_ignore_set(&settings).unwrap();

    assert!(glob_set.is_match("questions.toml"));
    assert!(glob_set.is_match("pkg/cache/mod.pyc"));
    assert!(!glob_set.is_match("prompts.toml"));
    assert!(!glob_set.is_match("README.md"));
}

#[test]
fn test_invalid_pattern() {
    let settings = Settings::default().with_ignored_patterns(["src/[unclosed"]);
    let result = build_ignore_set(&settings);
    assert!(matches!(result, Err(Error::IgnorePatternError(_))));
}
