/// A declaration, reference, type or structural error found after parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct SemanticError {
	/// The line number where the error occurred.
	pub line:   usize,
	/// The type of semantic error.
	pub r#type: SemanticErrorType,
}

impl SemanticError {
	pub fn new(line: usize, r#type: SemanticErrorType) -> Self { Self { line, r#type } }
}

/// Types of semantic errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticErrorType {
	/// A name declared twice. Carries the line of the first declaration.
	DuplicateSymbol { name: String, first_line: usize },
	/// A name used without a declaration.
	UndefinedSymbol(String),
	/// `int_var = <float expression>;`
	IllegalAssignment(String),
	/// `int_var = static_cast<float>(...);`
	IllegalCast(String),
	/// `switch` on a float expression.
	SwitchSelectorNotInteger,
	/// `case 1.5:`
	CaseNotInteger(String),
	/// The same constant twice in one switch.
	DuplicateCase(String),
	/// `break` with no enclosing `while` or `switch`.
	BreakOutsideLoop,
	/// `continue` with no enclosing `while`.
	ContinueOutsideLoop,
}

impl std::fmt::Display for SemanticErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use SemanticErrorType::*;
		match self {
			DuplicateSymbol { name, first_line } => {
				write!(f, "Symbol '{name}' already declared at line {first_line}")
			}
			UndefinedSymbol(name) => write!(f, "Undefined symbol '{name}'"),
			IllegalAssignment(name) => write!(f, "Invalid assignment: can't assign float to int '{name}'"),
			IllegalCast(name) => write!(f, "Invalid static_cast: can't assign float to int '{name}'"),
			SwitchSelectorNotInteger => write!(f, "Invalid switch condition: the condition must be integer"),
			CaseNotInteger(value) => write!(f, "Invalid case {value}: switch case type must be integer"),
			DuplicateCase(value) => write!(f, "Duplicate case {value} in the same switch"),
			BreakOutsideLoop => write!(f, "'break' used outside loop/switch"),
			ContinueOutsideLoop => write!(f, "'continue' used outside loop/switch"),
		}
	}
}
