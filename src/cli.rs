//! Command-line interface implementation for Stencil.
//! Provides argument parsing and help text formatting using clap.

use crate::arguments::parse_key_value;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stencil: project scaffolding from template trees", long_about = None)]
pub struct Args {
    /// Path to the template directory or git repository URL
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory where the generated project will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_folder: PathBuf,

    /// Value for a template variable; skips its prompt
    #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Use a sub directory of the template source as the template
    #[arg(short, long, value_name = "PATH")]
    pub sub_path: Option<String>,

    /// List the arguments the template expects and exit
    #[arg(long)]
    pub list_args: bool,

    /// Overwrite files that already exist in the output directory
    #[arg(short, long)]
    pub force: bool,

    /// Read answers as a JSON object from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Never prompt; blank answers take the defaults
    #[arg(long)]
    pub non_interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
