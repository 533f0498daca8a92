//! Turns CPL source text into tokens.
//!
//! Every rule is a prefix matcher over the rest of the input. At each position
//! all rules are tried, the longest lexeme wins, and a tie goes to the rule
//! listed first, so the keyword `int` beats the identifier `int` while the
//! identifier `integer` beats the keyword. This is `maximal munch` driven by a
//! table instead of by hand-written lookahead.
//!
//! The scanner never fails. Text no rule accepts comes out as an
//! [`TokenKind::Invalid`] token and scanning continues after it; the caller
//! decides how to report it.
//!
//! One rule depends on context: `<` and `>` are relational operators except
//! around the type of a `static_cast`, where they are brackets. That is settled
//! after scanning with a fixed-offset look behind the bracket.
mod token;

use TokenKind::*;
pub use token::*;

/// A rule of the lexical grammar. Position in [`RULES`] is its priority.
#[derive(Debug, Clone, Copy)]
enum Rule {
	/// `/* ... */`, discarded.
	Comment,
	/// Fixed text: keywords, symbols and operators.
	Literal(&'static str, TokenKind),
	/// A letter followed by at most 8 letters or digits.
	Identifier,
	/// Digits, a point, optional digits.
	Float,
	Integer,
	/// A letter followed by 8 or more letters or digits.
	LongIdentifier,
	/// A digit followed by letters or digits.
	MalformedNumber,
}

#[rustfmt::skip]
const RULES: &[Rule] = &[
	Rule::Comment,
	Rule::Literal("break", Break),
	Rule::Literal("case", Case),
	Rule::Literal("continue", Continue),
	Rule::Literal("default", Default),
	Rule::Literal("else", Else),
	Rule::Literal("float", Float),
	Rule::Literal("if", If),
	Rule::Literal("int", Int),
	Rule::Literal("read", Read),
	Rule::Literal("static_cast", StaticCast),
	Rule::Literal("switch", Switch),
	Rule::Literal("while", While),
	Rule::Literal("write", Write),
	Rule::Literal("(", LeftParen),
	Rule::Literal(")", RightParen),
	Rule::Literal("{", LeftBrace),
	Rule::Literal("}", RightBrace),
	Rule::Literal(",", Comma),
	Rule::Literal(".", Point),
	Rule::Literal(":", Colon),
	Rule::Literal(";", Semicolon),
	Rule::Literal("=", EqualSign),
	Rule::Literal("==", RelOp),
	Rule::Literal("!=", RelOp),
	Rule::Literal(">=", RelOp),
	Rule::Literal("<=", RelOp),
	Rule::Literal("<", RelOp),
	Rule::Literal(">", RelOp),
	Rule::Literal("+", AddOp),
	Rule::Literal("-", AddOp),
	Rule::Literal("*", MulOp),
	Rule::Literal("/", MulOp),
	Rule::Literal("||", Or),
	Rule::Literal("&&", And),
	Rule::Literal("!", Not),
	Rule::Identifier,
	Rule::Float,
	Rule::Integer,
	Rule::LongIdentifier,
	Rule::MalformedNumber,
];

/// Longest identifier is one letter plus this many letters or digits.
const MAX_IDENTIFIER_TAIL: usize = 8;

impl Rule {
	/// Length in bytes of the lexeme this rule accepts at the start of `rest`.
	fn matches(self, rest: &str) -> Option<usize> {
		let bytes = rest.as_bytes();
		match self {
			Rule::Comment => {
				if !rest.starts_with("/*") {
					return None;
				}
				rest[2..].find("*/").map(|end| end + 4)
			}
			Rule::Literal(text, _) => rest.starts_with(text).then_some(text.len()),
			Rule::Identifier => {
				let first = bytes.first()?;
				if !first.is_ascii_alphabetic() {
					return None;
				}
				Some(1 + alphanumeric_run(&bytes[1..]).min(MAX_IDENTIFIER_TAIL))
			}
			Rule::Float => {
				let whole = digit_run(bytes);
				if whole == 0 || bytes.get(whole) != Some(&b'.') {
					return None;
				}
				Some(whole + 1 + digit_run(&bytes[whole + 1..]))
			}
			Rule::Integer => Some(digit_run(bytes)).filter(|&len| len > 0),
			Rule::LongIdentifier => {
				let first = bytes.first()?;
				let run = alphanumeric_run(bytes);
				(first.is_ascii_alphabetic() && run > MAX_IDENTIFIER_TAIL).then_some(run)
			}
			Rule::MalformedNumber => {
				let first = bytes.first()?;
				let run = alphanumeric_run(bytes);
				(first.is_ascii_digit() && run >= 2).then_some(run)
			}
		}
	}
}

fn digit_run(bytes: &[u8]) -> usize { bytes.iter().take_while(|b| b.is_ascii_digit()).count() }

fn alphanumeric_run(bytes: &[u8]) -> usize { bytes.iter().take_while(|b| b.is_ascii_alphanumeric()).count() }

/// The longest match among all rules; the earlier rule keeps a tie.
fn longest_match(rest: &str) -> Option<(Rule, usize)> {
	let mut best: Option<(Rule, usize)> = None;
	for &rule in RULES {
		if let Some(len) = rule.matches(rest) {
			if best.map_or(true, |(_, longest)| len > longest) {
				best = Some((rule, len));
			}
		}
	}
	best
}

/// A scanner for CPL source code
pub struct Scanner<'a> {
	/// User input source code
	source: &'a str,
	/// Byte offset of the next unread character
	cursor: usize,
	/// Line of the next unread character, starting at 1
	line:   usize,
	/// Column of the next unread character, starting at 1
	column: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self { Self { source, cursor: 0, line: 1, column: 1 } }

	/// Scan all tokens from the source code. Comments and whitespace are
	/// dropped; invalid text is kept as [`TokenKind::Invalid`] tokens.
	pub fn scan_tokens(mut self) -> Vec<Token<'a>> {
		let mut tokens = Vec::new();
		while self.cursor < self.source.len() {
			let rest = &self.source[self.cursor..];
			match longest_match(rest) {
				Some((Rule::Comment, len)) => self.advance(len),
				Some((rule, len)) => {
					tokens.push(self.token(rule, &rest[..len]));
					self.advance(len);
				}
				None => {
					let Some(c) = rest.chars().next() else { break };
					let len = c.len_utf8();
					if !c.is_whitespace() {
						tokens.push(Token::new(Invalid, &rest[..len], Attribute::None, self.line, self.column));
					}
					self.advance(len);
				}
			}
		}
		disambiguate_cast_brackets(&mut tokens);
		tokens
	}

	/// Build the token for a lexeme accepted by `rule`.
	fn token(&self, rule: Rule, lexeme: &'a str) -> Token<'a> {
		let (kind, attribute) = match rule {
			Rule::Literal(_, kind @ (RelOp | AddOp | MulOp)) => (kind, Attribute::Str(lexeme)),
			Rule::Literal(_, kind) => (kind, Attribute::None),
			Rule::Identifier => (Id, Attribute::Str(lexeme)),
			// A float that overflows to infinity is invalid, like an integer outside i64.
			Rule::Float => match lexeme.parse::<f64>() {
				Ok(value) if value.is_finite() => (Num, Attribute::Float(value)),
				_ => (Invalid, Attribute::None),
			},
			Rule::Integer => match lexeme.parse() {
				Ok(value) => (Num, Attribute::Int(value)),
				Err(_) => (Invalid, Attribute::None),
			},
			Rule::Comment | Rule::LongIdentifier | Rule::MalformedNumber => (Invalid, Attribute::None),
		};
		Token::new(kind, lexeme, attribute, self.line, self.column)
	}

	/// Move past `len` bytes, keeping line and column in step with every
	/// newline consumed, including those inside comments.
	fn advance(&mut self, len: usize) {
		for c in self.source[self.cursor..self.cursor + len].chars() {
			if c == '\n' {
				self.line += 1;
				self.column = 1;
			} else {
				self.column += 1;
			}
		}
		self.cursor += len;
	}
}

/// Scan `source` into its token stream.
pub fn tokenize(source: &str) -> Vec<Token<'_>> { Scanner::new(source).scan_tokens() }

/// Reclassify `<`/`>` around the type of a `static_cast`.
///
/// `<` becomes a bracket when the token right before it is `static_cast`, `>`
/// when `static_cast` sits three tokens before it. Invalid tokens take up a
/// position like any other token. The offsets are fixed, so `static_cast<int>`
/// is recognized and anything with extra tokens between the brackets is left
/// alone for the parser to reject.
fn disambiguate_cast_brackets(tokens: &mut [Token<'_>]) {
	for index in 0..tokens.len() {
		if tokens[index].kind != RelOp {
			continue;
		}
		let (distance, bracket) = match tokens[index].lexeme {
			"<" => (1, LeftCastBracket),
			">" => (3, RightCastBracket),
			_ => continue,
		};
		if index >= distance && tokens[index - distance].kind == StaticCast {
			tokens[index].kind = bracket;
			tokens[index].attribute = Attribute::None;
		}
	}
}
