use std::{
	fs::{read_to_string, write},
	path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
	CpqError,
	error::{CompileError, scanner::ScanError},
	parser::parse,
	quad::Code,
	scanner::{Token, tokenize},
	symbol_table::SymbolTable,
	translator::{Translation, translate},
};

/// Trailer line written after every listing and every error report.
pub const DEFAULT_SIGNATURE: &str = "cpq: CPL to QUAD compiler";

/// Compiler is the main struct for the CPL to QUAD compiler.
#[derive(Debug, Clone)]
pub struct Compiler {
	signature: String,
}

impl Default for Compiler {
	fn default() -> Self { Self::new(DEFAULT_SIGNATURE) }
}

impl Compiler {
	pub fn new(signature: impl Into<String>) -> Self { Self { signature: signature.into() } }

	pub fn signature(&self) -> &str { &self.signature }

	/// Compile CPL source into QUAD code.
	///
	/// Diagnostics are collected from every phase. Only a syntax error stops
	/// the run early, since there is no tree to check afterwards.
	pub fn compile<'a>(&self, source: &'a str) -> Result<Vec<Code<'a>>, CpqError> {
		let tokens = tokenize(source);
		log::debug!("scanned {} tokens", tokens.len());
		let mut errors = lexical_errors(&tokens);

		let program = match parse(tokens) {
			Ok(program) => program,
			Err(e) => {
				errors.push(e.into());
				return Err(CpqError::CompileErrors(errors));
			}
		};
		log::debug!("parsed {} declarations and {} statements", program.declarations.len(), program.body.len());

		let (symbols, declaration_errors) = SymbolTable::build(&program);
		errors.extend(declaration_errors.into_iter().map(CompileError::from));

		let Translation { errors: semantic_errors, code } = translate(&program, &symbols);
		errors.extend(semantic_errors.into_iter().map(CompileError::from));

		if errors.is_empty() {
			Ok(code)
		} else {
			log::warn!("compilation failed with {} errors", errors.len());
			Err(CpqError::CompileErrors(errors))
		}
	}

	/// The `.qud` text: one instruction or label per line, then the signature.
	pub fn render(&self, code: &[Code<'_>]) -> String {
		let mut listing: String = code.iter().map(|line| format!("{line}\n")).collect();
		listing.push_str(&self.signature);
		listing.push('\n');
		listing
	}

	/// Compile `input` and write the listing to `output`, or next to the input
	/// with a `.qud` extension. Nothing is written when compilation fails.
	pub fn compile_file<P: AsRef<Path>>(&self, input: P, output: Option<&Path>) -> Result<PathBuf, CpqError> {
		let input = input.as_ref();
		let source =
			read_to_string(input).with_context(|| format!("Failed open source file {}", input.display()))?;
		let code = self.compile(&source)?;
		let output = output.map_or_else(|| input.with_extension("qud"), Path::to_path_buf);
		write(&output, self.render(&code)).with_context(|| format!("Failed write {}", output.display()))?;
		log::info!("wrote {} instructions to {}", code.len(), output.display());
		Ok(output)
	}

	/// Write the token listing of `input` to `output`, or next to the input
	/// with a `.tok` extension, and return the invalid tokens found.
	pub fn tokenize_file<P: AsRef<Path>>(
		&self,
		input: P,
		output: Option<&Path>,
	) -> Result<(PathBuf, Vec<ScanError>), CpqError> {
		let input = input.as_ref();
		let source =
			read_to_string(input).with_context(|| format!("Failed open source file {}", input.display()))?;
		let tokens = tokenize(&source);
		let output = output.map_or_else(|| input.with_extension("tok"), Path::to_path_buf);
		write(&output, self.token_listing(&tokens)).with_context(|| format!("Failed write {}", output.display()))?;
		log::info!("wrote {} tokens to {}", tokens.len(), output.display());
		let errors = tokens.iter().filter(|token| token.is_invalid()).map(scan_error).collect();
		Ok((output, errors))
	}

	/// `CATEGORY<TAB>lexeme<TAB>attribute` for every valid token.
	pub fn token_listing(&self, tokens: &[Token<'_>]) -> String {
		let mut listing: String = tokens
			.iter()
			.filter(|token| !token.is_invalid())
			.map(|token| format!("{}\t{}\t{}\n", token.kind, token.lexeme, token.attribute))
			.collect();
		listing.push_str(&self.signature);
		listing.push('\n');
		listing
	}
}

fn scan_error(token: &Token<'_>) -> ScanError { ScanError::new(token.line, token.column, token.lexeme) }

fn lexical_errors(tokens: &[Token<'_>]) -> Vec<CompileError> {
	tokens.iter().filter(|token| token.is_invalid()).map(|token| scan_error(token).into()).collect()
}
