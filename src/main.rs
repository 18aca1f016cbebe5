//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template loading and
//! coordinates the scaffolding pipeline.

use stencil::{
    arguments::{load_from_stdin, merge_arguments, ArgumentTable},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::Generator,
    loader::load_template,
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
    writer::ExistingFiles,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template from a local path or git repository
/// 2. Collects arguments from stdin and `--arg`
/// 3. Lists the template arguments, or scaffolds the output
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt: Box<dyn Prompter> = if args.non_interactive || args.stdin {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };

    let template = load_template(&args.template, args.sub_path.as_deref())?;

    let stdin_arguments = if args.stdin { load_from_stdin()? } else { ArgumentTable::new() };
    let cli_arguments: ArgumentTable = args.args.into_iter().collect();
    let arguments = merge_arguments([stdin_arguments, cli_arguments]);

    let existing_files = if args.force { ExistingFiles::Overwrite } else { ExistingFiles::Fail };

    let generator = Generator::new(&engine, &*prompt)
        .with_arguments(arguments)
        .with_existing_files(existing_files);

    if args.list_args {
        print!("{}", generator.template_arguments(template.root())?);
        return Ok(());
    }

    for target in generator.generate(template.root(), &args.output_folder)? {
        println!("create: '{}'", target.display());
    }

    println!(
        "Template generation completed successfully in {}.",
        args.output_folder.display()
    );
    Ok(())
}
