use std::collections::BTreeSet;

use crate::quad::{Code, ControlKind, Label, Operand, Type};

/// Translation of an expression: where its result lives, its type and the
/// code computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<'a> {
	pub r#type:  Type,
	pub operand: Operand<'a>,
	pub code:    Vec<Code<'a>>,
}

impl<'a> Value<'a> {
	/// A variable or a literal, available without any code.
	pub fn plain(r#type: Type, operand: Operand<'a>) -> Self { Self { r#type, operand, code: Vec::new() } }
}

/// Translation of a statement, with the `break` and `continue` placeholders
/// inside it that no loop or switch has claimed yet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fragment<'a> {
	pub code:      Vec<Code<'a>>,
	pub breaks:    BTreeSet<usize>,
	pub continues: BTreeSet<usize>,
}

impl<'a> Fragment<'a> {
	pub fn new(code: Vec<Code<'a>>) -> Self { Self { code, ..Default::default() } }

	/// Append `other`, taking over its pending placeholders.
	pub fn append(&mut self, other: Fragment<'a>) {
		self.code.extend(other.code);
		self.breaks.extend(other.breaks);
		self.continues.extend(other.continues);
	}

	/// Point every pending placeholder of `kind` at `label`. They stop being
	/// pending.
	pub fn resolve(&mut self, kind: ControlKind, label: &Label) {
		let pending = match kind {
			ControlKind::Break => std::mem::take(&mut self.breaks),
			ControlKind::Continue => std::mem::take(&mut self.continues),
		};
		if pending.is_empty() {
			return;
		}
		for code in &mut self.code {
			if let Code::Control(jump) = code {
				if jump.kind == kind && pending.contains(&jump.id) {
					jump.resolve(label);
				}
			}
		}
	}
}

impl<'a> FromIterator<Fragment<'a>> for Fragment<'a> {
	fn from_iter<I: IntoIterator<Item = Fragment<'a>>>(iter: I) -> Self {
		iter.into_iter().fold(Fragment::default(), |mut all, fragment| {
			all.append(fragment);
			all
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::quad::{ControlJump, JumpTarget};

	fn placeholder(id: usize, kind: ControlKind) -> Fragment<'static> {
		let jump = ControlJump { id, kind, line: 1, target: JumpTarget::Unresolved };
		let mut fragment = Fragment::new(vec![Code::Control(jump)]);
		match kind {
			ControlKind::Break => fragment.breaks.insert(id),
			ControlKind::Continue => fragment.continues.insert(id),
		};
		fragment
	}

	#[test]
	fn pending_sets_are_unioned() {
		let all: Fragment = [placeholder(0, ControlKind::Break), placeholder(1, ControlKind::Continue), placeholder(2, ControlKind::Break)]
			.into_iter()
			.collect();
		assert_eq!(all.code.len(), 3);
		assert_eq!(all.breaks, BTreeSet::from([0, 2]));
		assert_eq!(all.continues, BTreeSet::from([1]));
	}

	#[test]
	fn resolve_claims_one_kind() {
		let mut all: Fragment = [placeholder(0, ControlKind::Break), placeholder(1, ControlKind::Continue)].into_iter().collect();
		all.resolve(ControlKind::Break, &Label::new("end_while", 3));
		assert!(all.breaks.is_empty());
		assert_eq!(all.continues, BTreeSet::from([1]));
		let lines: Vec<_> = all.code.iter().map(ToString::to_string).collect();
		assert_eq!(lines, vec!["JUMP end_while_label_3", "JUMP UNDEF"]);
	}
}
