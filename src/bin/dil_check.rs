//! Minimal driver: parse, analyze, and print diagnostics for one or more
//! `.dil` files. Exits 1 iff at least one file has errors (like `cargo
//! check`); silent on success.

use std::process::ExitCode;

use clap::Parser as ClapParser;

use dil::{analyze, parse, SourceView};

#[derive(Debug, ClapParser)]
#[command(name = "dil-check", about = "Check DIL grammar files for errors")]
struct Args {
    /// Grammar files to check.
    #[arg(required = true)]
    files: Vec<std::path::PathBuf>,

    /// Disable ANSI colors in diagnostic output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut had_errors = false;

    for path in &args.files {
        let mut source = match SourceView::load(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("error: {err}");
                had_errors = true;
                continue;
            }
        };

        let tree = parse(&mut source);
        analyze(&mut source, &tree);

        if !source.diagnostics().is_empty() {
            let path_text = path.display().to_string();
            let printer = source.diagnostics().printer(source.bytes()).path(&path_text).colored(!args.no_color);
            eprint!("{}", printer.render());
        }

        if !source.is_clean() {
            had_errors = true;
        }
    }

    if had_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
