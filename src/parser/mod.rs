//! The `Scanner` uses the `Lexical grammar`: its alphabet is characters and
//! its strings are lexemes. The `Parser` uses the `Syntactic grammar`: its
//! alphabet is tokens and its strings are programs.
//!
//! CPL grammar, one function per production. Left-recursive productions are
//! written as loops that fold to the left, so `a - b - c` is `(a - b) - c`.
//!
//! ``` BNF
//! program      → declaration* stmt_block ;
//! declaration  → idlist ":" type ";" | type idlist ";" ;
//! idlist       → ID ( "," ID )* ;
//! type         → "int" | "float" ;
//! stmt         → assignment | cast | input | output | if | while | switch
//!              | break | continue | stmt_block ;
//! assignment   → ID "=" expression ";" ;
//! cast         → ID "=" "static_cast" "<" type ">" "(" expression ")" ";" ;
//! input        → "read" "(" ID ")" ";" ;
//! output       → "write" "(" expression ")" ";" ;
//! if           → "if" "(" boolexpr ")" stmt "else" stmt ;
//! while        → "while" "(" boolexpr ")" stmt ;
//! switch       → "switch" "(" expression ")" "{" ( "case" NUM ":" stmt* )*
//!                "default" ":" stmt* "}" ;
//! stmt_block   → "{" stmt* "}" ;
//! boolexpr     → boolterm ( "||" boolterm )* ;
//! boolterm     → boolfactor ( "&&" boolfactor )* ;
//! boolfactor   → "!" "(" boolexpr ")" | expression RELOP expression ;
//! expression   → term ( ADDOP term )* ;
//! term         → factor ( MULOP factor )* ;
//! factor       → "(" expression ")" | ID | NUM ;
//! ```
//!
//! The first syntax error ends the parse; there is no recovery.

pub(crate) mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenKind::*;

use crate::{
	error::parser::{ParseError, ParseErrorType},
	parser::expression::{ArithmeticOperator, BoolExpression, Expression, Name, Number, RelationalOperator},
	quad::Type,
	scanner::{Attribute, Token, TokenKind},
	statement::{Case, Declaration, Program, Statement},
};

/// Recursive-descent parser over a scanned token stream.
pub struct Parser<'a> {
	/// The tokens to parse, invalid ones already removed.
	tokens: Peekable<IntoIter<Token<'a>>>,
	/// Line of the last consumed token, used for errors at end of input.
	line:   usize,
}

impl<'a> Parser<'a> {
	/// Invalid tokens are dropped here; reporting them is the caller's job.
	pub fn new(tokens: Vec<Token<'a>>) -> Self {
		let tokens: Vec<_> = tokens.into_iter().filter(|token| !token.is_invalid()).collect();
		Self { tokens: tokens.into_iter().peekable(), line: 1 }
	}

	pub fn parse(mut self) -> Result<Program<'a>, ParseError> {
		let program = self.program()?;
		if let Some(token) = self.tokens.next() {
			return Err(ParseError::new(token.line, ParseErrorType::TrailingInput(token.lexeme.to_string())));
		}
		Ok(program)
	}

	fn program(&mut self) -> Result<Program<'a>, ParseError> {
		let mut declarations = Vec::new();
		while !self.check(LeftBrace) {
			declarations.push(self.declaration()?);
		}
		let body = self.block()?;
		Ok(Program { declarations, body })
	}

	/// Parse either declaration form.
	fn declaration(&mut self) -> Result<Declaration<'a>, ParseError> {
		match self.peek_kind() {
			Some(Int | Float) => {
				let r#type = self.r#type()?;
				let names = self.id_list()?;
				self.consume(Semicolon, "';'")?;
				Ok(Declaration { names, r#type })
			}
			Some(Id) => {
				let names = self.id_list()?;
				self.consume(Colon, "':'")?;
				let r#type = self.r#type()?;
				self.consume(Semicolon, "';'")?;
				Ok(Declaration { names, r#type })
			}
			_ => Err(self.unexpected("a declaration or '{'")),
		}
	}

	fn id_list(&mut self) -> Result<Vec<Name<'a>>, ParseError> {
		let mut names = vec![self.name()?];
		while self.check(Comma) {
			self.advance()?;
			names.push(self.name()?);
		}
		Ok(names)
	}

	fn r#type(&mut self) -> Result<Type, ParseError> {
		match self.peek_kind() {
			Some(Int) => {
				self.advance()?;
				Ok(Type::Int)
			}
			Some(Float) => {
				self.advance()?;
				Ok(Type::Float)
			}
			_ => Err(self.unexpected("'int' or 'float'")),
		}
	}

	/// Parse `{ stmt* }`.
	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParseError> {
		self.consume(LeftBrace, "'{'")?;
		let statements = self.statements_until(&[RightBrace])?;
		self.consume(RightBrace, "'}'")?;
		Ok(statements)
	}

	/// Parse statements up to, not including, one of `stop` or end of input.
	fn statements_until(&mut self, stop: &[TokenKind]) -> Result<Vec<Statement<'a>>, ParseError> {
		let mut statements = Vec::new();
		while let Some(kind) = self.peek_kind() {
			if stop.contains(&kind) {
				break;
			}
			statements.push(self.statement()?);
		}
		Ok(statements)
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		match self.peek_kind() {
			Some(Id) => self.assignment_or_cast(),
			Some(Read) => {
				self.advance()?;
				self.consume(LeftParen, "'('")?;
				let target = self.name()?;
				self.consume(RightParen, "')'")?;
				self.consume(Semicolon, "';'")?;
				Ok(Statement::Input { target })
			}
			Some(Write) => {
				self.advance()?;
				self.consume(LeftParen, "'('")?;
				let value = self.expression()?;
				self.consume(RightParen, "')'")?;
				self.consume(Semicolon, "';'")?;
				Ok(Statement::Output { value })
			}
			Some(If) => {
				self.advance()?;
				let condition = self.condition()?;
				let then_branch = Box::new(self.statement()?);
				self.consume(Else, "'else'")?;
				let else_branch = Box::new(self.statement()?);
				Ok(Statement::If { condition, then_branch, else_branch })
			}
			Some(While) => {
				self.advance()?;
				let condition = self.condition()?;
				let body = Box::new(self.statement()?);
				Ok(Statement::While { condition, body })
			}
			Some(Switch) => self.switch(),
			Some(Break) => {
				let line = self.advance()?.line;
				self.consume(Semicolon, "';'")?;
				Ok(Statement::Break { line })
			}
			Some(Continue) => {
				let line = self.advance()?.line;
				self.consume(Semicolon, "';'")?;
				Ok(Statement::Continue { line })
			}
			Some(LeftBrace) => Ok(Statement::Block(self.block()?)),
			_ => Err(self.unexpected("a statement")),
		}
	}

	/// `ID = ...` is a cast when `static_cast` follows the `=`.
	fn assignment_or_cast(&mut self) -> Result<Statement<'a>, ParseError> {
		let target = self.name()?;
		self.consume(EqualSign, "'='")?;
		if self.check(StaticCast) {
			self.advance()?;
			self.consume(LeftCastBracket, "'<'")?;
			let r#type = self.r#type()?;
			self.consume(RightCastBracket, "'>'")?;
			self.consume(LeftParen, "'('")?;
			let value = self.expression()?;
			self.consume(RightParen, "')'")?;
			self.consume(Semicolon, "';'")?;
			return Ok(Statement::Cast { target, r#type, value });
		}
		let value = self.expression()?;
		self.consume(Semicolon, "';'")?;
		Ok(Statement::Assignment { target, value })
	}

	fn switch(&mut self) -> Result<Statement<'a>, ParseError> {
		let line = self.advance()?.line;
		self.consume(LeftParen, "'('")?;
		let selector = self.expression()?;
		self.consume(RightParen, "')'")?;
		self.consume(LeftBrace, "'{'")?;

		let mut cases = Vec::new();
		while self.check(Case) {
			let line = self.advance()?.line;
			let value = self.number()?;
			self.consume(Colon, "':'")?;
			let body = self.statements_until(&[Case, Default, RightBrace])?;
			cases.push(Case { value, body, line });
		}

		self.consume(Default, "'case' or 'default'")?;
		self.consume(Colon, "':'")?;
		let default = self.statements_until(&[RightBrace])?;
		self.consume(RightBrace, "'}'")?;
		Ok(Statement::Switch { selector, cases, default, line })
	}

	/// Parse `( boolexpr )` after `if` or `while`.
	fn condition(&mut self) -> Result<BoolExpression<'a>, ParseError> {
		self.consume(LeftParen, "'('")?;
		let condition = self.bool_expression()?;
		self.consume(RightParen, "')'")?;
		Ok(condition)
	}

	fn bool_expression(&mut self) -> Result<BoolExpression<'a>, ParseError> {
		let mut expression = self.bool_term()?;
		while self.check(Or) {
			self.advance()?;
			expression = BoolExpression::or(expression, self.bool_term()?);
		}
		Ok(expression)
	}

	fn bool_term(&mut self) -> Result<BoolExpression<'a>, ParseError> {
		let mut expression = self.bool_factor()?;
		while self.check(And) {
			self.advance()?;
			expression = BoolExpression::and(expression, self.bool_factor()?);
		}
		Ok(expression)
	}

	fn bool_factor(&mut self) -> Result<BoolExpression<'a>, ParseError> {
		if self.check(Not) {
			self.advance()?;
			self.consume(LeftParen, "'('")?;
			let inner = self.bool_expression()?;
			self.consume(RightParen, "')'")?;
			return Ok(BoolExpression::not(inner));
		}
		let left = self.expression()?;
		let token = self.consume(RelOp, "a relational operator")?;
		let operator = RelationalOperator::from_lexeme(token.lexeme).ok_or_else(|| unexpected_token(&token, "a relational operator"))?;
		let right = self.expression()?;
		Ok(BoolExpression::Relation { left, operator, right })
	}

	/// Parse additive expressions.
	fn expression(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.term()?;
		while self.check(AddOp) {
			let operator = self.arithmetic_operator()?;
			expression = Expression::binary(expression, operator, self.term()?);
		}
		Ok(expression)
	}

	/// Parse multiplicative expressions.
	fn term(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.factor()?;
		while self.check(MulOp) {
			let operator = self.arithmetic_operator()?;
			expression = Expression::binary(expression, operator, self.factor()?);
		}
		Ok(expression)
	}

	fn factor(&mut self) -> Result<Expression<'a>, ParseError> {
		match self.peek_kind() {
			Some(LeftParen) => {
				self.advance()?;
				let inner = self.expression()?;
				self.consume(RightParen, "')'")?;
				Ok(Expression::grouping(inner))
			}
			Some(Id) => Ok(Expression::Variable(self.name()?)),
			Some(Num) => Ok(Expression::Number(self.number()?)),
			_ => Err(self.unexpected("an expression")),
		}
	}

	fn arithmetic_operator(&mut self) -> Result<ArithmeticOperator, ParseError> {
		let token = self.advance()?;
		ArithmeticOperator::from_lexeme(token.lexeme).ok_or_else(|| unexpected_token(&token, "an arithmetic operator"))
	}

	fn name(&mut self) -> Result<Name<'a>, ParseError> {
		let token = self.consume(Id, "an identifier")?;
		Ok(Name::new(token.lexeme, token.line))
	}

	fn number(&mut self) -> Result<Number, ParseError> {
		let token = self.consume(Num, "a number")?;
		match token.attribute {
			Attribute::Int(n) => Ok(Number::Int(n)),
			Attribute::Float(n) => Ok(Number::Float(n)),
			_ => Err(unexpected_token(&token, "a number")),
		}
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParseError> {
		let token = self.tokens.next().ok_or_else(|| self.unexpected("a token"))?;
		self.line = token.line;
		Ok(token)
	}

	/// Take the next token if it is a `kind`, fail otherwise.
	fn consume(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'a>, ParseError> {
		if self.check(kind) { self.advance() } else { Err(self.unexpected(expected)) }
	}

	fn check(&mut self, kind: TokenKind) -> bool { self.peek_kind() == Some(kind) }

	/// Peek at the kind of the current token.
	fn peek_kind(&mut self) -> Option<TokenKind> { self.tokens.peek().map(|token| token.kind) }

	/// Error for whatever the current token is, or for end of input.
	fn unexpected(&mut self, expected: &'static str) -> ParseError {
		match self.tokens.peek() {
			Some(token) => unexpected_token(token, expected),
			None => ParseError::new(self.line, ParseErrorType::UnexpectedEof { expected }),
		}
	}
}

fn unexpected_token(token: &Token<'_>, expected: &'static str) -> ParseError {
	ParseError::new(token.line, ParseErrorType::UnexpectedToken { expected, found: token.lexeme.to_string() })
}

/// Parse a scanned token stream into a program.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Program<'_>, ParseError> { Parser::new(tokens).parse() }
