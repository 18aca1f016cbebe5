use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use stencil::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stencil")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "./template");
    assert_eq!(parsed.output_folder, PathBuf::from("."));
    assert!(parsed.args.is_empty());
    assert!(parsed.sub_path.is_none());
    assert!(!parsed.force);
    assert!(!parsed.verbose);
    assert!(!parsed.list_args);
    assert!(!parsed.stdin);
    assert!(!parsed.non_interactive);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--force",
        "--verbose",
        "--list-args",
        "--stdin",
        "--non-interactive",
        "--output-folder",
        "./output",
        "--sub-path",
        "templates/api",
        "./template",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert!(parsed.list_args);
    assert!(parsed.stdin);
    assert!(parsed.non_interactive);
    assert_eq!(parsed.output_folder, PathBuf::from("./output"));
    assert_eq!(parsed.sub_path.as_deref(), Some("templates/api"));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-f", "-v", "-o", "out", "-s", "sub", "./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.output_folder, PathBuf::from("out"));
    assert_eq!(parsed.sub_path.as_deref(), Some("sub"));
}

#[test]
fn test_repeated_arguments() {
    let args = make_args(&["-a", "Name=demo", "--arg", "Query=a=b", "./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(
        parsed.args,
        [
            ("Name".to_string(), "demo".to_string()),
            ("Query".to_string(), "a=b".to_string()),
        ]
    );
}

#[test]
fn test_malformed_argument() {
    let args = make_args(&["--arg", "NoValue", "./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_git_url_template() {
    let args = make_args(&["https://github.com/user/template.git"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "https://github.com/user/template.git");
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
