use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::DEFAULT_SIGNATURE;

#[derive(Parser, Debug)]
#[command(name = "cpq", version, about = "Compile CPL source into QUAD code")]
pub struct Cli {
	/// Trailer line written after every listing and error report
	#[arg(long, global = true, default_value = DEFAULT_SIGNATURE)]
	pub signature: String,
	#[command(subcommand)]
	pub mode:      Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile a CPL file into QUAD code, `<file>.qud` by default
	Compile {
		path:   PathBuf,
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
	/// Write the token listing of a CPL file, `<file>.tok` by default
	Tokens {
		path:   PathBuf,
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
}
