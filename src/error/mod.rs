pub mod parser;
pub mod scanner;
pub mod semantic;

use self::{parser::ParseError, scanner::ScanError, semantic::SemanticError};

/// CpqError is the top-level error type for the compiler.
#[derive(thiserror::Error, Debug)]
pub enum CpqError {
	/// Internal compiler error or failed file access
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// Every diagnostic collected during one compilation
	#[error("Generated {} compilation errors:\n{}", .0.len(), display_errors(.0))]
	CompileErrors(Vec<CompileError>),
}

/// A single diagnostic. Everything except a syntax error is collected without
/// stopping the phase that found it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CompileError {
	#[error(transparent)]
	Lexical(#[from] ScanError),
	#[error(transparent)]
	Syntax(#[from] ParseError),
	#[error(transparent)]
	Semantic(#[from] SemanticError),
}

impl CompileError {
	pub fn line(&self) -> usize {
		match self {
			CompileError::Lexical(e) => e.line,
			CompileError::Syntax(e) => e.line,
			CompileError::Semantic(e) => e.line,
		}
	}
}

fn display_errors(errors: &[CompileError]) -> String {
	errors.iter().map(|e| format!("{e}")).collect::<Vec<String>>().join("\n")
}
