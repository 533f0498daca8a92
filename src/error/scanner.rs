/// A character run no scanner rule accepts.
///
/// The scanner itself never fails; the compiler turns every invalid token it
/// produced into one of these so it can be reported with the rest.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: Invalid token '{lexeme}'")]
pub struct ScanError {
	/// The line number where the token starts.
	pub line:   usize,
	/// The column where the token starts.
	pub column: usize,
	/// The offending text.
	pub lexeme: String,
}

impl ScanError {
	pub fn new(line: usize, column: usize, lexeme: impl Into<String>) -> Self {
		Self { line, column, lexeme: lexeme.into() }
	}
}
