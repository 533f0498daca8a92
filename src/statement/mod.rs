//! Statement nodes and the program root.
//!
//! Statement lists are plain vectors, and a switch keeps its cases as one
//! ordered sequence in source order.

use crate::{
	parser::expression::{BoolExpression, Expression, Name, Number},
	quad::Type,
};

/// `program → declaration* stmt_block`
#[derive(Debug, Clone, PartialEq)]
pub struct Program<'a> {
	pub declarations: Vec<Declaration<'a>>,
	pub body:         Vec<Statement<'a>>,
}

/// `x, y: float;` or `float x, y;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
	pub names:  Vec<Name<'a>>,
	pub r#type: Type,
}

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// `x = expression;`
	Assignment { target: Name<'a>, value: Expression<'a> },
	/// `read(x);`
	Input { target: Name<'a> },
	/// `write(expression);`
	Output { value: Expression<'a> },
	/// `x = static_cast<type>(expression);`
	Cast { target: Name<'a>, r#type: Type, value: Expression<'a> },
	If {
		condition:   BoolExpression<'a>,
		then_branch: Box<Statement<'a>>,
		else_branch: Box<Statement<'a>>,
	},
	While {
		condition: BoolExpression<'a>,
		body:      Box<Statement<'a>>,
	},
	Switch {
		selector: Expression<'a>,
		cases:    Vec<Case<'a>>,
		default:  Vec<Statement<'a>>,
		/// Line of the `switch` keyword.
		line:     usize,
	},
	Break { line: usize },
	Continue { line: usize },
	/// `{ stmt* }`
	Block(Vec<Statement<'a>>),
}

/// `case NUM: stmt*`
#[derive(Debug, Clone, PartialEq)]
pub struct Case<'a> {
	pub value: Number,
	pub body:  Vec<Statement<'a>>,
	/// Line of the `case` keyword.
	pub line:  usize,
}
