//! Expression nodes of the parse tree.
//!
//! Arithmetic expressions and boolean expressions are separate trees: the
//! grammar never lets one stand where the other is expected, and the only
//! bridge between them is a relation, `expression RELOP expression`.

use std::fmt::{self, Display};

/// A name as written in the source, with the line it appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a> {
	pub text: &'a str,
	pub line: usize,
}

impl<'a> Name<'a> {
	pub fn new(text: &'a str, line: usize) -> Self { Self { text, line } }
}

/// A numeric literal. Its type is decided by how it was written: `3` is an
/// integer, `3.` and `3.0` are floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	Int(i64),
	Float(f64),
}

impl Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Int(n) => write!(f, "{n}"),
			Number::Float(n) => write!(f, "{n:?}"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
	Add,
	Subtract,
	Multiply,
	Divide,
}

impl ArithmeticOperator {
	pub fn from_lexeme(lexeme: &str) -> Option<Self> {
		Some(match lexeme {
			"+" => Self::Add,
			"-" => Self::Subtract,
			"*" => Self::Multiply,
			"/" => Self::Divide,
			_ => return None,
		})
	}
}

impl Display for ArithmeticOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Add => "+",
			Self::Subtract => "-",
			Self::Multiply => "*",
			Self::Divide => "/",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
	Equal,
	NotEqual,
	Less,
	Greater,
	LessEqual,
	GreaterEqual,
}

impl RelationalOperator {
	pub fn from_lexeme(lexeme: &str) -> Option<Self> {
		Some(match lexeme {
			"==" => Self::Equal,
			"!=" => Self::NotEqual,
			"<" => Self::Less,
			">" => Self::Greater,
			"<=" => Self::LessEqual,
			">=" => Self::GreaterEqual,
			_ => return None,
		})
	}
}

impl Display for RelationalOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Equal => "==",
			Self::NotEqual => "!=",
			Self::Less => "<",
			Self::Greater => ">",
			Self::LessEqual => "<=",
			Self::GreaterEqual => ">=",
		})
	}
}

/// `expression`, `term` and `factor` productions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Binary { left: Box<Expression<'a>>, operator: ArithmeticOperator, right: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
	Variable(Name<'a>),
	Number(Number),
}

impl<'a> Expression<'a> {
	pub fn binary(left: Self, operator: ArithmeticOperator, right: Self) -> Self {
		Expression::Binary { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn grouping(inner: Self) -> Self { Expression::Grouping(Box::new(inner)) }
}

/// `boolexpr`, `boolterm` and `boolfactor` productions.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpression<'a> {
	Or(Box<BoolExpression<'a>>, Box<BoolExpression<'a>>),
	And(Box<BoolExpression<'a>>, Box<BoolExpression<'a>>),
	Not(Box<BoolExpression<'a>>),
	Relation { left: Expression<'a>, operator: RelationalOperator, right: Expression<'a> },
}

impl<'a> BoolExpression<'a> {
	pub fn or(left: Self, right: Self) -> Self { BoolExpression::Or(Box::new(left), Box::new(right)) }

	pub fn and(left: Self, right: Self) -> Self { BoolExpression::And(Box::new(left), Box::new(right)) }

	pub fn not(inner: Self) -> Self { BoolExpression::Not(Box::new(inner)) }
}

impl Display for Expression<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Binary { left, operator, right } => write!(f, "({operator} {left} {right})"),
			Expression::Grouping(inner) => write!(f, "(group {inner})"),
			Expression::Variable(name) => write!(f, "{}", name.text),
			Expression::Number(number) => write!(f, "{number}"),
		}
	}
}

impl Display for BoolExpression<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BoolExpression::Or(left, right) => write!(f, "(|| {left} {right})"),
			BoolExpression::And(left, right) => write!(f, "(&& {left} {right})"),
			BoolExpression::Not(inner) => write!(f, "(! {inner})"),
			BoolExpression::Relation { left, operator, right } => write!(f, "({operator} {left} {right})"),
		}
	}
}
