use std::fmt::{self, Display};

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub kind:      TokenKind,
	pub lexeme:    &'a str,
	pub attribute: Attribute<'a>,
	pub line:      usize,
	pub column:    usize,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, lexeme: &'a str, attribute: Attribute<'a>, line: usize, column: usize) -> Self {
		Self { kind, lexeme, attribute, line, column }
	}

	pub fn is_invalid(&self) -> bool { self.kind == TokenKind::Invalid }
}

/// Semantic value attached to a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute<'a> {
	Int(i64),
	Float(f64),
	/// Identifier name, or the operator text of RELOP/ADDOP/MULOP.
	Str(&'a str),
	None,
}

impl Display for Attribute<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attribute::Int(n) => write!(f, "{n}"),
			Attribute::Float(n) => write!(f, "{n:?}"),
			Attribute::Str(s) => write!(f, "{s}"),
			Attribute::None => Ok(()),
		}
	}
}

/// The token categories handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Break,
	Case,
	Continue,
	Default,
	Else,
	Float,
	If,
	Int,
	Read,
	StaticCast,
	Switch,
	While,
	Write,
	/// `(`
	LeftParen,
	/// `)`
	RightParen,
	/// `{`
	LeftBrace,
	/// `}`
	RightBrace,
	/// `,`
	Comma,
	/// `.`
	Point,
	/// `:`
	Colon,
	/// `;`
	Semicolon,
	/// `=`
	EqualSign,
	/// `==`, `!=`, `<`, `>`, `<=`, `>=`
	RelOp,
	/// `+`, `-`
	AddOp,
	/// `*`, `/`
	MulOp,
	/// `||`
	Or,
	/// `&&`
	And,
	/// `!`
	Not,
	Id,
	Num,
	/// `<` opening a `static_cast` type.
	LeftCastBracket,
	/// `>` closing a `static_cast` type.
	RightCastBracket,
	/// Text no rule accepts.
	Invalid,
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use TokenKind::*;
		#[rustfmt::skip]
		let name = match self {
			Break => "BREAK",
			Case => "CASE",
			Continue => "CONTINUE",
			Default => "DEFAULT",
			Else => "ELSE",
			Float => "FLOAT",
			If => "IF",
			Int => "INT",
			Read => "READ",
			StaticCast => "STATIC_CAST",
			Switch => "SWITCH",
			While => "WHILE",
			Write => "WRITE",
			LeftParen => "LEFT_PARENTHESIS",
			RightParen => "RIGHT_PARENTHESIS",
			LeftBrace => "LEFT_CURLY_BRACKETS",
			RightBrace => "RIGHT_CURLY_BRACKETS",
			Comma => "COMMA",
			Point => "POINT",
			Colon => "COLON",
			Semicolon => "SEMICOLON",
			EqualSign => "EQUAL_SIGN",
			RelOp => "RELOP",
			AddOp => "ADDOP",
			MulOp => "MULOP",
			Or => "OR",
			And => "AND",
			Not => "NOT",
			Id => "ID",
			Num => "NUM",
			LeftCastBracket => "LEFT_STATIC_CAST_BRACKETS",
			RightCastBracket => "RIGHT_STATIC_CAST_BRACKETS",
			Invalid => "INVALID_TOKEN",
		};
		f.write_str(name)
	}
}
