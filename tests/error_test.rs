use std::io;
use std::path::PathBuf;

use stencil::error::Error;

#[test]
fn test_io_error_keeps_path() {
    let err = Error::io("templates/missing", io::Error::new(io::ErrorKind::NotFound, "file not found"));

    match &err {
        Error::IoError { path, .. } => assert_eq!(path, &PathBuf::from("templates/missing")),
        _ => panic!("Expected IoError variant"),
    }
    assert_eq!(err.to_string(), "IO error on 'templates/missing': file not found.");
}

#[test]
fn test_minijinja_error_conversion() {
    let source = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
    let err: Error = source.into();
    assert!(matches!(err, Error::MinijinjaError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::RequiredValueMissing { name: "ProjectName".to_string() };
    assert_eq!(
        err.to_string(),
        "A value for the required variable 'ProjectName' was not provided."
    );

    let err = Error::ReservedVariable {
        path: PathBuf::from(".override.toml"),
        name: "__Template".to_string(),
    };
    assert_eq!(err.to_string(), "'.override.toml' uses the reserved variable name '__Template'.");

    let err = Error::InvalidOutputPath {
        path: "{{.Dir}}".to_string(),
        rendered: "../escape".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Template path '{{.Dir}}' renders to the invalid path '../escape'."
    );
}
