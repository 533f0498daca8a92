#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	pub line:   usize,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// A token other than the one the grammar allows here.
	UnexpectedToken { expected: &'static str, found: String },
	/// The token stream ended in the middle of a production.
	UnexpectedEof { expected: &'static str },
	/// Tokens left over after the program's closing brace.
	TrailingInput(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, found } => {
				write!(f, "Syntax error: expected {expected}, found '{found}'")
			}
			UnexpectedEof { expected } => {
				write!(f, "Syntax error: expected {expected}, found end of input")
			}
			TrailingInput(found) => {
				write!(f, "Syntax error: unexpected '{found}' after the end of the program")
			}
		}
	}
}
