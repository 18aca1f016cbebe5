use stencil::error::Error;
use stencil::overrides::{load_overrides, parse_overrides};
use stencil::settings::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    let overrides =
        load_overrides(temp_dir.path().join(".override.toml"), &Settings::default()).unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn test_loads_string_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".override.toml");
    fs::write(&path, "ProjectName = \"demo\"\nAuthor = \"Ada\"\n").unwrap();

    let overrides = load_overrides(&path, &Settings::default()).unwrap();
    assert_eq!(overrides.get("ProjectName").map(String::as_str), Some("demo"));
    assert_eq!(overrides.get("Author").map(String::as_str), Some("Ada"));
}

#[test]
fn test_scalars_are_bound_as_strings() {
    let overrides =
        parse_overrides("Port = 8080\nDebug = true\nRatio = 0.5\n", ".override.toml", &Settings::default())
            .unwrap();
    assert_eq!(overrides["Port"], "8080");
    assert_eq!(overrides["Debug"], "true");
    assert_eq!(overrides["Ratio"], "0.5");
}

#[test]
fn test_reserved_key_is_rejected() {
    let result = parse_overrides(
        "Name = \"ok\"\n__Template = \"option1\"\n",
        ".override.toml",
        &Settings::default(),
    );
    match result {
        Err(Error::ReservedVariable { name, .. }) => assert_eq!(name, "__Template"),
        other => panic!("Expected ReservedVariable, got {other:?}"),
    }
}

#[test]
fn test_invalid_syntax_is_malformed() {
    let result = parse_overrides("Name = ", ".override.toml", &Settings::default());
    assert!(matches!(result, Err(Error::MalformedOverrides { .. })));
}

#[test]
fn test_nested_values_are_malformed() {
    let result =
        parse_overrides("[section]\nName = \"x\"\n", ".override.toml", &Settings::default());
    assert!(matches!(result, Err(Error::MalformedOverrides { .. })));

    let result = parse_overrides("Names = [\"a\", \"b\"]\n", ".override.toml", &Settings::default());
    assert!(matches!(result, Err(Error::MalformedOverrides { .. })));
}
