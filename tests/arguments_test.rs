use serde_json::json;
use stencil::arguments::{arguments_from_json, merge_arguments, parse_key_value, ArgumentTable};
use stencil::error::Error;

#[test]
fn test_parse_key_value() {
    assert_eq!(
        parse_key_value("ProjectName=demo").unwrap(),
        ("ProjectName".to_string(), "demo".to_string())
    );
    assert_eq!(
        parse_key_value("Query=a=b").unwrap(),
        ("Query".to_string(), "a=b".to_string())
    );
    assert_eq!(parse_key_value("Empty=").unwrap(), ("Empty".to_string(), String::new()));
}

#[test]
fn test_parse_key_value_rejects_malformed() {
    assert!(parse_key_value("NoSeparator").is_err());
    assert!(parse_key_value("=value").is_err());
}

#[test]
fn test_arguments_from_json_object() {
    let arguments = arguments_from_json(json!({
        "Name": "demo",
        "Port": 8080,
        "Debug": true,
    }))
    .unwrap();

    assert_eq!(arguments["Name"], "demo");
    assert_eq!(arguments["Port"], "8080");
    assert_eq!(arguments["Debug"], "true");
}

#[test]
fn test_arguments_from_json_null_is_empty() {
    assert!(arguments_from_json(serde_json::Value::Null).unwrap().is_empty());
}

#[test]
fn test_arguments_from_json_rejects_non_objects() {
    let result = arguments_from_json(json!(["a", "b"]));
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let result = arguments_from_json(json!({ "Nested": { "a": 1 } }));
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_later_tables_win() {
    let mut stdin = ArgumentTable::new();
    stdin.insert("Name".to_string(), "from-stdin".to_string());
    stdin.insert("Only".to_string(), "stdin".to_string());
    let mut cli = ArgumentTable::new();
    cli.insert("Name".to_string(), "from-cli".to_string());

    let merged = merge_arguments([stdin, cli]);
    assert_eq!(merged["Name"], "from-cli");
    assert_eq!(merged["Only"], "stdin");
    assert_eq!(merged.len(), 2);
}
