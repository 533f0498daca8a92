//! QUAD instructions and their text form.
//!
//! A QUAD line is a four-letter opcode followed by up to three operands,
//! `IADD t1 a b` for instance. The opcode depends on both the operation and
//! the operand type, so the translator only ever names an [`Operator`] and a
//! [`Type`] and leaves the mnemonic to [`encode`].

use std::fmt::{self, Display};

/// The two value types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
	Int,
	Float,
}

impl Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Type::Int => write!(f, "int"),
			Type::Float => write!(f, "float"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Multiply,
	Divide,
	Add,
	Subtract,
	Equal,
	NotEqual,
	Greater,
	Less,
	Read,
	Write,
	Assign,
	WidenToFloat,
	NarrowToInt,
	ConditionalJump,
	Jump,
	Halt,
}

/// Opcode for `operator` applied to operands of type `type`.
///
/// Conversions, jumps and halt exist for one type only; asking for any other
/// combination is a bug in the caller, reported as `None`.
pub fn encode(operator: Operator, r#type: Type) -> Option<&'static str> {
	use Operator::*;
	use Type::*;
	#[rustfmt::skip]
	let opcode = match (operator, r#type) {
		(Multiply, Int) => "IMLT",
		(Multiply, Float) => "RMLT",
		(Divide, Int) => "IDIV",
		(Divide, Float) => "RDIV",
		(Add, Int) => "IADD",
		(Add, Float) => "RADD",
		(Subtract, Int) => "ISUB",
		(Subtract, Float) => "RSUB",
		(Equal, Int) => "IEQL",
		(Equal, Float) => "REQL",
		(NotEqual, Int) => "INQL",
		(NotEqual, Float) => "RNQL",
		(Greater, Int) => "IGRT",
		(Greater, Float) => "RGRT",
		(Less, Int) => "ILSS",
		(Less, Float) => "RLSS",
		(Read, Int) => "IINP",
		(Read, Float) => "RINP",
		(Write, Int) => "IPRT",
		(Write, Float) => "RPRT",
		(Assign, Int) => "IASN",
		(Assign, Float) => "RASN",
		(WidenToFloat, Int) => "ITOR",
		(NarrowToInt, Float) => "RTOI",
		(ConditionalJump, Int) => "JMPZ",
		(Jump, Int) => "JUMP",
		(Halt, Int) => "HALT",
		_ => return None,
	};
	Some(opcode)
}

/// A jump target. Prints as `<prefix>_label_<n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
	prefix: String,
	id:     usize,
}

impl Label {
	pub fn new(prefix: impl Into<String>, id: usize) -> Self { Self { prefix: prefix.into(), id } }
}

impl Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}_label_{}", self.prefix, self.id) }
}

/// One operand field of a QUAD instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
	/// An unused field.
	Empty,
	Variable(&'a str),
	/// A compiler temporary, printed as `t<n>`.
	Temporary(usize),
	Int(i64),
	Float(f64),
	Label(Label),
}

impl Operand<'_> {
	fn is_empty(&self) -> bool { matches!(self, Operand::Empty) }
}

impl Display for Operand<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Empty => Ok(()),
			Operand::Variable(name) => write!(f, "{name}"),
			Operand::Temporary(n) => write!(f, "t{n}"),
			Operand::Int(n) => write!(f, "{n}"),
			// Debug keeps the fractional part: `3.0`, not `3`.
			Operand::Float(n) => write!(f, "{n:?}"),
			Operand::Label(label) => write!(f, "{label}"),
		}
	}
}

/// A three-address instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad<'a> {
	pub operator:    Operator,
	pub r#type:      Type,
	pub destination: Operand<'a>,
	pub operand1:    Operand<'a>,
	pub operand2:    Operand<'a>,
}

impl<'a> Quad<'a> {
	pub(crate) fn new(
		operator: Operator,
		r#type: Type,
		destination: Operand<'a>,
		operand1: Operand<'a>,
		operand2: Operand<'a>,
	) -> Self {
		debug_assert!(encode(operator, r#type).is_some(), "no opcode for {operator:?} on {:?}", r#type);
		Self { operator, r#type, destination, operand1, operand2 }
	}

	pub(crate) fn widen(destination: Operand<'a>, source: Operand<'a>) -> Self {
		Self::new(Operator::WidenToFloat, Type::Int, destination, source, Operand::Empty)
	}

	pub(crate) fn narrow(destination: Operand<'a>, source: Operand<'a>) -> Self {
		Self::new(Operator::NarrowToInt, Type::Float, destination, source, Operand::Empty)
	}

	/// `JMPZ <label> <condition>`: jump when `condition` is zero.
	pub(crate) fn jump_if_zero(label: &Label, condition: Operand<'a>) -> Self {
		Self::new(Operator::ConditionalJump, Type::Int, Operand::Label(label.clone()), condition, Operand::Empty)
	}

	pub(crate) fn jump(label: &Label) -> Self {
		Self::new(Operator::Jump, Type::Int, Operand::Label(label.clone()), Operand::Empty, Operand::Empty)
	}

	pub(crate) fn halt() -> Self {
		Self::new(Operator::Halt, Type::Int, Operand::Empty, Operand::Empty, Operand::Empty)
	}

	pub fn opcode(&self) -> Option<&'static str> { encode(self.operator, self.r#type) }
}

impl Display for Quad<'_> {
	/// `<OPCODE> <dest> <op1> <op2>` with trailing empty fields dropped.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let opcode = self.opcode().ok_or(fmt::Error)?;
		f.write_str(opcode)?;
		let fields = [&self.destination, &self.operand1, &self.operand2];
		let used = fields.iter().rposition(|field| !field.is_empty()).map_or(0, |last| last + 1);
		for field in &fields[..used] {
			write!(f, " {field}")?;
		}
		Ok(())
	}
}

/// Whether a `break`/`continue` has learned where it jumps.
#[derive(Debug, Clone, PartialEq)]
pub enum JumpTarget {
	Unresolved,
	ResolvedTo(Label),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
	Break,
	Continue,
}

/// The jump a `break` or `continue` turns into once its enclosing loop or
/// switch assigns the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlJump {
	pub id:     usize,
	pub kind:   ControlKind,
	pub line:   usize,
	pub target: JumpTarget,
}

impl ControlJump {
	/// Set the target. A placeholder is resolved exactly once, by the innermost
	/// construct that owns it.
	pub(crate) fn resolve(&mut self, label: &Label) {
		debug_assert_eq!(self.target, JumpTarget::Unresolved, "placeholder {} resolved twice", self.id);
		self.target = JumpTarget::ResolvedTo(label.clone());
	}
}

impl Display for ControlJump {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.target {
			JumpTarget::ResolvedTo(label) => write!(f, "{}", Quad::jump(label)),
			JumpTarget::Unresolved => write!(f, "{} UNDEF", encode(Operator::Jump, Type::Int).ok_or(fmt::Error)?),
		}
	}
}

/// One line of translated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Code<'a> {
	Quad(Quad<'a>),
	Label(Label),
	Control(ControlJump),
}

impl Display for Code<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Code::Quad(quad) => write!(f, "{quad}"),
			Code::Label(label) => write!(f, "{label}:"),
			Code::Control(jump) => write!(f, "{jump}"),
		}
	}
}

impl<'a> From<Quad<'a>> for Code<'a> {
	fn from(quad: Quad<'a>) -> Self { Code::Quad(quad) }
}

impl From<Label> for Code<'_> {
	fn from(label: Label) -> Self { Code::Label(label) }
}
