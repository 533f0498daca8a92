//! Semantic-directed translation of the parse tree into QUAD code.
//!
//! The translator walks the tree bottom-up. Every expression becomes a
//! [`Value`]: the operand holding its result, its type, and the code that
//! computes it. Every statement becomes a [`Fragment`]: its code plus the
//! `break`/`continue` placeholders inside it that are still waiting for a
//! target.
//!
//! # Types
//!
//! A binary operation on two operands of the same type keeps that type. If
//! the types differ, the integer operand is widened with `ITOR` into a fresh
//! temporary and the operation is done on floats. Integers are never narrowed
//! implicitly: `int_var = float_expr;` is an error, `static_cast<int>(...)`
//! emits `RTOI`.
//!
//! # Booleans
//!
//! Conditions are integers, 0 or 1.
//!
//! ``` text
//! !(b)      INQL b b 1
//! a && b    IEQL t a 1 / IEQL u b 1 / IMLT t t u
//! a || b    IADD t a b / IGRT t t 0
//! a >= b    EQL u a b / GRT t a b / IADD t t u / IGRT t t 0
//! ```
//!
//! # Control flow
//!
//! Labels are allocated once the children are translated, so inner
//! constructs get lower label numbers than the ones around them. A `break` or
//! `continue` is emitted as a placeholder jump and resolved by the nearest
//! `while` or `switch` that may claim it; a placeholder nobody claims is
//! reported once the whole program has been translated.
//!
//! Errors never stop the walk. The code is complete even when errors were
//! found, but only an error-free translation should be used.

mod session;
mod value;

use std::collections::HashSet;

use session::Session;
use value::{Fragment, Value};

use crate::{
	error::semantic::{SemanticError, SemanticErrorType},
	parser::expression::{ArithmeticOperator, BoolExpression, Expression, Name, Number, RelationalOperator},
	quad::{Code, ControlKind, JumpTarget, Operand, Operator, Quad, Type},
	statement::{Case, Program, Statement},
	symbol_table::SymbolTable,
};

/// Everything the translator produced for one program.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation<'a> {
	pub errors: Vec<SemanticError>,
	pub code:   Vec<Code<'a>>,
}

/// Translate `program`, resolving names through `symbols`.
pub fn translate<'a>(program: &Program<'a>, symbols: &SymbolTable<'a>) -> Translation<'a> {
	let mut translator = Translator::new(symbols);
	let code = translator.program(program);
	log::debug!("translated {} instructions with {} errors", code.len(), translator.errors.len());
	Translation { errors: translator.errors, code }
}

/// Both operands of a binary operation after coercion to a common type.
struct Coerced<'a> {
	r#type: Type,
	left:   Operand<'a>,
	right:  Operand<'a>,
	code:   Vec<Code<'a>>,
}

struct Translator<'s, 'a> {
	symbols: &'s SymbolTable<'a>,
	session: Session,
	errors:  Vec<SemanticError>,
}

impl<'s, 'a> Translator<'s, 'a> {
	fn new(symbols: &'s SymbolTable<'a>) -> Self { Self { symbols, session: Session::new(), errors: Vec::new() } }

	fn error(&mut self, line: usize, r#type: SemanticErrorType) { self.errors.push(SemanticError::new(line, r#type)) }

	fn program(&mut self, program: &Program<'a>) -> Vec<Code<'a>> {
		let Fragment { mut code, .. } = self.statements(&program.body);
		for jump in code.iter().filter_map(|code| match code {
			Code::Control(jump) if jump.target == JumpTarget::Unresolved => Some(jump),
			_ => None,
		}) {
			let r#type = match jump.kind {
				ControlKind::Break => SemanticErrorType::BreakOutsideLoop,
				ControlKind::Continue => SemanticErrorType::ContinueOutsideLoop,
			};
			self.errors.push(SemanticError::new(jump.line, r#type));
		}
		code.push(Quad::halt().into());
		code
	}

	fn statements(&mut self, statements: &[Statement<'a>]) -> Fragment<'a> {
		statements.iter().map(|statement| self.statement(statement)).collect()
	}

	fn statement(&mut self, statement: &Statement<'a>) -> Fragment<'a> {
		match statement {
			Statement::Assignment { target, value } => {
				let target_type = self.lookup(target);
				let value = self.expression(value);
				if target_type == Type::Int && value.r#type == Type::Float {
					self.error(target.line, SemanticErrorType::IllegalAssignment(target.text.to_string()));
				}
				let r#type = if target_type == Type::Float || value.r#type == Type::Float { Type::Float } else { Type::Int };
				let mut code = value.code;
				code.push(Quad::new(Operator::Assign, r#type, Operand::Variable(target.text), value.operand, Operand::Empty).into());
				Fragment::new(code)
			}
			Statement::Input { target } => {
				let r#type = self.lookup(target);
				let read = Quad::new(Operator::Read, r#type, Operand::Variable(target.text), Operand::Empty, Operand::Empty);
				Fragment::new(vec![read.into()])
			}
			Statement::Output { value } => {
				let value = self.expression(value);
				let mut code = value.code;
				code.push(Quad::new(Operator::Write, value.r#type, value.operand, Operand::Empty, Operand::Empty).into());
				Fragment::new(code)
			}
			Statement::Cast { target, r#type, value } => {
				let target_type = self.lookup(target);
				let value = self.expression(value);
				if target_type == Type::Int && *r#type == Type::Float {
					self.error(target.line, SemanticErrorType::IllegalCast(target.text.to_string()));
				}
				let destination = Operand::Variable(target.text);
				let conversion = match (value.r#type, *r#type) {
					(Type::Int, Type::Float) => Quad::widen(destination, value.operand),
					(Type::Float, Type::Int) => Quad::narrow(destination, value.operand),
					_ => Quad::new(Operator::Assign, *r#type, destination, value.operand, Operand::Empty),
				};
				let mut code = value.code;
				code.push(conversion.into());
				Fragment::new(code)
			}
			Statement::If { condition, then_branch, else_branch } => {
				let condition = self.condition(condition);
				let then_branch = self.statement(then_branch);
				let else_branch = self.statement(else_branch);
				let else_label = self.session.label("else");
				let end_label = self.session.label("endif");

				let mut fragment = Fragment::new(condition.code);
				fragment.code.push(Quad::jump_if_zero(&else_label, condition.operand).into());
				fragment.append(then_branch);
				fragment.code.push(Quad::jump(&end_label).into());
				fragment.code.push(else_label.into());
				fragment.append(else_branch);
				fragment.code.push(end_label.into());
				fragment
			}
			Statement::While { condition, body } => {
				let condition = self.condition(condition);
				let mut body = self.statement(body);
				let condition_label = self.session.label("condition");
				let end_label = self.session.label("end_while");
				body.resolve(ControlKind::Break, &end_label);
				body.resolve(ControlKind::Continue, &condition_label);

				let mut fragment = Fragment::new(vec![condition_label.clone().into()]);
				fragment.code.extend(condition.code);
				fragment.code.push(Quad::jump_if_zero(&end_label, condition.operand).into());
				fragment.append(body);
				fragment.code.push(Quad::jump(&condition_label).into());
				fragment.code.push(end_label.into());
				fragment
			}
			Statement::Switch { selector, cases, default, line } => self.switch(selector, cases, default, *line),
			Statement::Break { line } => self.placeholder(ControlKind::Break, *line),
			Statement::Continue { line } => self.placeholder(ControlKind::Continue, *line),
			Statement::Block(statements) => self.statements(statements),
		}
	}

	/// Each case tests the selector and falls to the next case's label when it
	/// doesn't match; the last case falls to `default`. Every body, the default
	/// one included, ends with a jump to the end of the switch.
	fn switch(&mut self, selector: &Expression<'a>, cases: &[Case<'a>], default: &[Statement<'a>], line: usize) -> Fragment<'a> {
		let selector = self.expression(selector);
		if selector.r#type != Type::Int {
			self.error(line, SemanticErrorType::SwitchSelectorNotInteger);
		}

		let mut seen = HashSet::new();
		let bodies: Vec<_> = cases
			.iter()
			.map(|case| {
				self.check_case(case, &mut seen);
				self.statements(&case.body)
			})
			.collect();
		let default = self.statements(default);

		let labels: Vec<_> = cases.iter().map(|case| self.session.label(format!("case_{}", case.value))).collect();
		let end_label = self.session.label("end_switch");
		let default_label = self.session.label("default");

		let mut fragment = Fragment::new(selector.code);
		for (index, ((case, body), label)) in cases.iter().zip(bodies).zip(&labels).enumerate() {
			let next = labels.get(index + 1).unwrap_or(&default_label);
			let test = self.session.temporary();
			fragment.code.push(label.clone().into());
			fragment
				.code
				.push(Quad::new(Operator::Equal, Type::Int, test.clone(), selector.operand.clone(), number(case.value)).into());
			fragment.code.push(Quad::jump_if_zero(next, test).into());
			fragment.append(body);
			fragment.code.push(Quad::jump(&end_label).into());
		}
		fragment.code.push(default_label.into());
		fragment.append(default);
		fragment.code.push(Quad::jump(&end_label).into());
		fragment.resolve(ControlKind::Break, &end_label);
		fragment.code.push(end_label.into());
		fragment
	}

	fn check_case(&mut self, case: &Case<'a>, seen: &mut HashSet<i64>) {
		match case.value {
			Number::Int(n) => {
				if !seen.insert(n) {
					self.error(case.line, SemanticErrorType::DuplicateCase(n.to_string()));
				}
			}
			Number::Float(_) => self.error(case.line, SemanticErrorType::CaseNotInteger(case.value.to_string())),
		}
	}

	fn placeholder(&mut self, kind: ControlKind, line: usize) -> Fragment<'a> {
		let jump = self.session.placeholder(kind, line);
		let id = jump.id;
		let mut fragment = Fragment::new(vec![Code::Control(jump)]);
		match kind {
			ControlKind::Break => fragment.breaks.insert(id),
			ControlKind::Continue => fragment.continues.insert(id),
		};
		fragment
	}

	fn condition(&mut self, condition: &BoolExpression<'a>) -> Value<'a> {
		match condition {
			BoolExpression::Relation { left, operator, right } => self.relation(left, *operator, right),
			// Conditions always live in a temporary, so negate in place.
			BoolExpression::Not(inner) => {
				let mut value = self.condition(inner);
				let operand = value.operand.clone();
				value.code.push(Quad::new(Operator::NotEqual, Type::Int, operand.clone(), operand, Operand::Int(1)).into());
				value
			}
			BoolExpression::And(left, right) => {
				let left = self.condition(left);
				let right = self.condition(right);
				let result = self.session.temporary();
				let other = self.session.temporary();
				let mut code = left.code;
				code.extend(right.code);
				code.push(Quad::new(Operator::Equal, Type::Int, result.clone(), left.operand, Operand::Int(1)).into());
				code.push(Quad::new(Operator::Equal, Type::Int, other.clone(), right.operand, Operand::Int(1)).into());
				code.push(Quad::new(Operator::Multiply, Type::Int, result.clone(), result.clone(), other).into());
				Value { r#type: Type::Int, operand: result, code }
			}
			BoolExpression::Or(left, right) => {
				let left = self.condition(left);
				let right = self.condition(right);
				let result = self.session.temporary();
				let mut code = left.code;
				code.extend(right.code);
				or_into(&mut code, &result, left.operand, right.operand);
				Value { r#type: Type::Int, operand: result, code }
			}
		}
	}

	/// Comparisons use the opcode of the operand type, the result is an int.
	fn relation(&mut self, left: &Expression<'a>, operator: RelationalOperator, right: &Expression<'a>) -> Value<'a> {
		let left = self.expression(left);
		let right = self.expression(right);
		let result = self.session.temporary();
		let Coerced { r#type, left, right, mut code } = self.coerce(left, right);
		let compare = |operator: Operator, left: Operand<'a>, right: Operand<'a>| -> Code<'a> {
			Quad::new(operator, r#type, result.clone(), left, right).into()
		};
		match operator {
			RelationalOperator::Equal => code.push(compare(Operator::Equal, left, right)),
			RelationalOperator::NotEqual => code.push(compare(Operator::NotEqual, left, right)),
			RelationalOperator::Less => code.push(compare(Operator::Less, left, right)),
			RelationalOperator::Greater => code.push(compare(Operator::Greater, left, right)),
			RelationalOperator::GreaterEqual | RelationalOperator::LessEqual => {
				let strict = if operator == RelationalOperator::GreaterEqual { Operator::Greater } else { Operator::Less };
				let equal = self.session.temporary();
				code.push(Quad::new(Operator::Equal, r#type, equal.clone(), left.clone(), right.clone()).into());
				code.push(compare(strict, left, right));
				or_into(&mut code, &result, result.clone(), equal);
			}
		}
		Value { r#type: Type::Int, operand: result, code }
	}

	fn expression(&mut self, expression: &Expression<'a>) -> Value<'a> {
		match expression {
			Expression::Number(n) => match *n {
				Number::Int(_) => Value::plain(Type::Int, number(*n)),
				Number::Float(_) => Value::plain(Type::Float, number(*n)),
			},
			Expression::Variable(name) => Value::plain(self.lookup(name), Operand::Variable(name.text)),
			Expression::Grouping(inner) => self.expression(inner),
			Expression::Binary { left, operator, right } => {
				let left = self.expression(left);
				let right = self.expression(right);
				let result = self.session.temporary();
				let Coerced { r#type, left, right, mut code } = self.coerce(left, right);
				code.push(Quad::new(arithmetic(*operator), r#type, result.clone(), left, right).into());
				Value { r#type, operand: result, code }
			}
		}
	}

	/// Widen the integer side of a mixed operation.
	fn coerce(&mut self, left: Value<'a>, right: Value<'a>) -> Coerced<'a> {
		let mut code = left.code;
		code.extend(right.code);
		let (r#type, left, right) = match (left.r#type, right.r#type) {
			(Type::Int, Type::Float) => (Type::Float, self.widen(&mut code, left.operand), right.operand),
			(Type::Float, Type::Int) => (Type::Float, left.operand, self.widen(&mut code, right.operand)),
			(r#type, _) => (r#type, left.operand, right.operand),
		};
		Coerced { r#type, left, right, code }
	}

	fn widen(&mut self, code: &mut Vec<Code<'a>>, operand: Operand<'a>) -> Operand<'a> {
		let widened = self.session.temporary();
		code.push(Quad::widen(widened.clone(), operand).into());
		widened
	}

	/// Type of a name. An undeclared name is reported and treated as an int.
	fn lookup(&mut self, name: &Name<'a>) -> Type {
		match self.symbols.get(name.text) {
			Some(symbol) => symbol.r#type,
			None => {
				self.error(name.line, SemanticErrorType::UndefinedSymbol(name.text.to_string()));
				Type::Int
			}
		}
	}
}

/// `IADD dest a b`, `IGRT dest dest 0`
fn or_into<'a>(code: &mut Vec<Code<'a>>, destination: &Operand<'a>, left: Operand<'a>, right: Operand<'a>) {
	code.push(Quad::new(Operator::Add, Type::Int, destination.clone(), left, right).into());
	code.push(Quad::new(Operator::Greater, Type::Int, destination.clone(), destination.clone(), Operand::Int(0)).into());
}

fn number(n: Number) -> Operand<'static> {
	match n {
		Number::Int(n) => Operand::Int(n),
		Number::Float(n) => Operand::Float(n),
	}
}

fn arithmetic(operator: ArithmeticOperator) -> Operator {
	match operator {
		ArithmeticOperator::Add => Operator::Add,
		ArithmeticOperator::Subtract => Operator::Subtract,
		ArithmeticOperator::Multiply => Operator::Multiply,
		ArithmeticOperator::Divide => Operator::Divide,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::parse, scanner::tokenize};

	fn translate_source(input: &str) -> (Vec<String>, Vec<SemanticError>) {
		let program = parse(tokenize(input)).unwrap();
		let (symbols, declaration_errors) = SymbolTable::build(&program);
		assert!(declaration_errors.is_empty());
		let Translation { errors, code } = translate(&program, &symbols);
		(code.iter().map(ToString::to_string).collect(), errors)
	}

	/// Translate a program that must be error free.
	fn lines(input: &str) -> Vec<String> {
		let (code, errors) = translate_source(input);
		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
		code
	}

	fn error_types(input: &str) -> Vec<SemanticErrorType> { translate_source(input).1.into_iter().map(|e| e.r#type).collect() }

	const DECLARATIONS: &str = "aint, bint: int; cfloat, dfloat: float;";

	fn body(statements: &str) -> Vec<String> { lines(&format!("{DECLARATIONS} {{ {statements} }}")) }

	#[test]
	fn arithmetic_keeps_the_operand_type() {
		assert_eq!(body("aint = 3 * aint;"), vec!["IMLT t1 3 aint", "IASN aint t1", "HALT"]);
		assert_eq!(body("cfloat = cfloat - 1.5;"), vec!["RSUB t1 cfloat 1.5", "RASN cfloat t1", "HALT"]);
	}

	#[test]
	fn mixed_operation_widens_once() {
		assert_eq!(body("cfloat = 3.3 * aint;"), vec!["ITOR t2 aint", "RMLT t1 3.3 t2", "RASN cfloat t1", "HALT"]);
		assert_eq!(body("cfloat = 3.3 / aint;"), vec!["ITOR t2 aint", "RDIV t1 3.3 t2", "RASN cfloat t1", "HALT"]);
		assert_eq!(
			body("cfloat = 3.3 * (5 + aint);"),
			vec!["IADD t1 5 aint", "ITOR t3 t1", "RMLT t2 3.3 t3", "RASN cfloat t2", "HALT"]
		);
		let code = body("write(aint + cfloat * 2);");
		assert_eq!(code.iter().filter(|line| line.starts_with("ITOR")).count(), 2);
		assert_eq!(code, vec!["ITOR t2 2", "RMLT t1 cfloat t2", "ITOR t4 aint", "RADD t3 t4 t1", "RPRT t3", "HALT"]);
	}

	#[test]
	fn negated_relations() {
		let cases = [
			(">", vec!["ITOR t2 aint", "RGRT t1 t2 cfloat", "INQL t1 t1 1"]),
			("<", vec!["ITOR t2 aint", "RLSS t1 t2 cfloat", "INQL t1 t1 1"]),
			("==", vec!["ITOR t2 aint", "REQL t1 t2 cfloat", "INQL t1 t1 1"]),
			("!=", vec!["ITOR t2 aint", "RNQL t1 t2 cfloat", "INQL t1 t1 1"]),
			(">=", vec!["ITOR t2 aint", "REQL t3 t2 cfloat", "RGRT t1 t2 cfloat", "IADD t1 t1 t3", "IGRT t1 t1 0", "INQL t1 t1 1"]),
			("<=", vec!["ITOR t2 aint", "REQL t3 t2 cfloat", "RLSS t1 t2 cfloat", "IADD t1 t1 t3", "IGRT t1 t1 0", "INQL t1 t1 1"]),
		];
		for (operator, condition) in cases {
			let code = body(&format!("while (!(aint {operator} cfloat)) {{ }}"));
			let mut expected = vec!["condition_label_0:"];
			expected.extend(condition);
			expected.extend(["JMPZ end_while_label_1 t1", "JUMP condition_label_0", "end_while_label_1:", "HALT"]);
			assert_eq!(code, expected, "operator {operator}");
		}
	}

	#[test]
	fn and_or_collapse_to_zero_or_one() {
		assert_eq!(
			body("if (aint < bint && bint < 3) write(1); else write(2);"),
			vec![
				"ILSS t1 aint bint",
				"ILSS t2 bint 3",
				"IEQL t3 t1 1",
				"IEQL t4 t2 1",
				"IMLT t3 t3 t4",
				"JMPZ else_label_0 t3",
				"IPRT 1",
				"JUMP endif_label_1",
				"else_label_0:",
				"IPRT 2",
				"endif_label_1:",
				"HALT",
			]
		);
		assert_eq!(
			body("while (aint == 1 || cfloat != 2.) { }")[1..5],
			["IEQL t1 aint 1", "RNQL t2 cfloat 2.0", "IADD t3 t1 t2", "IGRT t3 t3 0"]
		);
	}

	#[test]
	fn if_statement() {
		assert_eq!(
			body("if (aint < bint) write(aint); else write(bint);"),
			vec![
				"ILSS t1 aint bint",
				"JMPZ else_label_0 t1",
				"IPRT aint",
				"JUMP endif_label_1",
				"else_label_0:",
				"IPRT bint",
				"endif_label_1:",
				"HALT",
			]
		);
	}

	#[test]
	fn while_with_break_and_continue() {
		let code = lines(
			"a, b: float;
			{
				while (a < b) {
					if (b > 100)
						break;
					else {
						a = a + 1;
						continue;
					}
				}
			}",
		);
		assert_eq!(code, vec![
			"condition_label_2:",
			"RLSS t1 a b",
			"JMPZ end_while_label_3 t1",
			"ITOR t3 100",
			"RGRT t2 b t3",
			"JMPZ else_label_0 t2",
			"JUMP end_while_label_3",
			"JUMP endif_label_1",
			"else_label_0:",
			"ITOR t5 1",
			"RADD t4 a t5",
			"RASN a t4",
			"JUMP condition_label_2",
			"endif_label_1:",
			"JUMP condition_label_2",
			"end_while_label_3:",
			"HALT",
		]);
	}

	#[test]
	fn nested_switch() {
		let code = lines(
			"a, b: int;
			{
				switch(a) {
					case 1: {
						write(1);
						break;
					}
					case 2: write(2);
					case 3: {
						switch(b) {
							case 5: write(5);
							default: break;
						}
					}
					case 4: write(4);
					default: write(0);
				}
			}",
		);
		assert_eq!(code, vec![
			"case_1_label_3:",
			"IEQL t2 a 1",
			"JMPZ case_2_label_4 t2",
			"IPRT 1",
			"JUMP end_switch_label_7",
			"JUMP end_switch_label_7",
			"case_2_label_4:",
			"IEQL t3 a 2",
			"JMPZ case_3_label_5 t3",
			"IPRT 2",
			"JUMP end_switch_label_7",
			"case_3_label_5:",
			"IEQL t4 a 3",
			"JMPZ case_4_label_6 t4",
			"case_5_label_0:",
			"IEQL t1 b 5",
			"JMPZ default_label_2 t1",
			"IPRT 5",
			"JUMP end_switch_label_1",
			"default_label_2:",
			"JUMP end_switch_label_1",
			"JUMP end_switch_label_1",
			"end_switch_label_1:",
			"JUMP end_switch_label_7",
			"case_4_label_6:",
			"IEQL t5 a 4",
			"JMPZ default_label_8 t5",
			"IPRT 4",
			"JUMP end_switch_label_7",
			"default_label_8:",
			"IPRT 0",
			"JUMP end_switch_label_7",
			"end_switch_label_7:",
			"HALT",
		]);
	}

	#[test]
	fn switch_emits_one_test_per_case_and_one_end_jump_per_body() {
		let code = body("switch (aint) { case 1: write(1); case 2: write(2); case 3: write(3); default: write(0); }");
		let count = |prefix: &str| code.iter().filter(|line| line.starts_with(prefix)).count();
		assert_eq!(count("IEQL"), 3);
		assert_eq!(count("JMPZ"), 3);
		assert_eq!(count("JUMP end_switch_label_3"), 4);
		let default = code.iter().position(|line| line == "default_label_4:").unwrap();
		assert!(code[default..].iter().all(|line| !line.starts_with("IEQL") && !line.starts_with("JMPZ")));
	}

	#[test]
	fn break_and_continue_find_their_owner() {
		let code = body("while (aint < 10) { switch (aint) { case 1: break; default: continue; } }");
		// switch labels first: case_1 0, end_switch 1, default 2; then while: condition 3, end_while 4
		assert!(code.contains(&"case_1_label_0:".to_string()));
		let after_case = code.iter().position(|line| line == "JMPZ default_label_2 t2").unwrap();
		assert_eq!(code[after_case + 1], "JUMP end_switch_label_1");
		let after_default = code.iter().position(|line| line == "default_label_2:").unwrap();
		assert_eq!(code[after_default + 1], "JUMP condition_label_3");
		assert!(!code.iter().any(|line| line.contains("UNDEF")));
	}

	#[test]
	fn statements_pick_the_target_type() {
		assert_eq!(body("cfloat = bint;"), vec!["RASN cfloat bint", "HALT"]);
		assert_eq!(body("read(aint); read(cfloat);"), vec!["IINP aint", "RINP cfloat", "HALT"]);
		assert_eq!(body("write(dfloat);"), vec!["RPRT dfloat", "HALT"]);
	}

	#[test]
	fn casts() {
		assert_eq!(body("aint = static_cast<int>(3.33);"), vec!["RTOI aint 3.33", "HALT"]);
		assert_eq!(body("cfloat = static_cast<float>(aint);"), vec!["ITOR cfloat aint", "HALT"]);
		assert_eq!(body("aint = static_cast<int>(bint);"), vec!["IASN aint bint", "HALT"]);
		assert_eq!(body("cfloat = static_cast<float>(dfloat);"), vec!["RASN cfloat dfloat", "HALT"]);
	}

	#[test]
	fn assign_then_write() {
		let code = lines("int x; { x = 1; write(x); }");
		assert_eq!(code, vec!["IASN x 1", "IPRT x", "HALT"]);
	}

	#[test]
	fn narrowing_is_an_error() {
		let (code, errors) = translate_source(&format!("{DECLARATIONS} {{ aint = cfloat; }}"));
		assert_eq!(code, vec!["RASN aint cfloat", "HALT"]);
		assert_eq!(errors[0].to_string(), "line 1: Invalid assignment: can't assign float to int 'aint'");
		assert_eq!(
			error_types(&format!("{DECLARATIONS} {{ aint = static_cast<float>(3.33); }}")),
			vec![SemanticErrorType::IllegalCast("aint".to_string())]
		);
	}

	#[test]
	fn undefined_symbol_is_reported_per_use() {
		let (code, errors) = translate_source("x: int;\n{\nx = y + y;\n}");
		assert_eq!(code, vec!["IADD t1 y y", "IASN x t1", "HALT"]);
		assert_eq!(errors.len(), 2);
		assert!(errors.iter().all(|e| e.line == 3 && e.r#type == SemanticErrorType::UndefinedSymbol("y".to_string())));
	}

	#[test]
	fn bad_switches_still_translate_every_case() {
		let (code, errors) = translate_source(&format!(
			"{DECLARATIONS}\n{{ switch (cfloat) {{\ncase 1: write(1);\ncase 1: write(2);\ncase 2.5: write(3);\ndefault: }} }}"
		));
		assert_eq!(errors.len(), 3);
		assert_eq!(errors[0].r#type, SemanticErrorType::SwitchSelectorNotInteger);
		assert_eq!(errors[1].r#type, SemanticErrorType::DuplicateCase("1".to_string()));
		assert_eq!(errors[1].line, 4);
		assert_eq!(errors[2].r#type, SemanticErrorType::CaseNotInteger("2.5".to_string()));
		for write in ["IPRT 1", "IPRT 2", "IPRT 3"] {
			assert!(code.contains(&write.to_string()));
		}
	}

	#[test]
	fn stray_break_and_continue() {
		let (code, errors) = translate_source("a: int;\n{\nbreak;\nswitch (a) { default: continue; }\n}");
		assert_eq!(errors, vec![
			SemanticError::new(3, SemanticErrorType::BreakOutsideLoop),
			SemanticError::new(4, SemanticErrorType::ContinueOutsideLoop),
		]);
		assert_eq!(errors[1].to_string(), "line 4: 'continue' used outside loop/switch");
		assert_eq!(code[0], "JUMP UNDEF");
		assert_eq!(code.last().map(String::as_str), Some("HALT"));
	}
}
