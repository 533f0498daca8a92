use std::process::ExitCode;

use clap::Parser;
use cpq::{Compiler, CpqError, cli::*};

fn main() -> ExitCode {
	env_logger::init();
	let cli = Cli::parse();
	let compiler = Compiler::new(cli.signature);

	match cli.mode {
		Mode::Compile { path, output } => match compiler.compile_file(&path, output.as_deref()) {
			Ok(written) => {
				println!("{}", written.display());
				ExitCode::SUCCESS
			}
			Err(e) => report(&compiler, &e),
		},
		Mode::Tokens { path, output } => match compiler.tokenize_file(&path, output.as_deref()) {
			Ok((written, errors)) => {
				println!("{}", written.display());
				if errors.is_empty() {
					return ExitCode::SUCCESS;
				}
				for e in &errors {
					eprintln!("{e}");
				}
				eprintln!("{}", compiler.signature());
				ExitCode::FAILURE
			}
			Err(e) => report(&compiler, &e),
		},
	}
}

/// Diagnostics one per line, then the signature.
fn report(compiler: &Compiler, error: &CpqError) -> ExitCode {
	match error {
		CpqError::CompileErrors(errors) => {
			for e in errors {
				eprintln!("{e}");
			}
		}
		CpqError::InternalError(_) => eprintln!("Failed compile: {error}"),
	}
	eprintln!("{}", compiler.signature());
	ExitCode::FAILURE
}
