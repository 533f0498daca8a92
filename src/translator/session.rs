use crate::quad::{ControlJump, ControlKind, JumpTarget, Label, Operand};

/// Name counters of one compilation. Temporaries count from `t1`, labels
/// and placeholders from 0.
#[derive(Debug, Default)]
pub struct Session {
	temporaries:  usize,
	labels:       usize,
	placeholders: usize,
}

impl Session {
	pub fn new() -> Self { Self::default() }

	pub fn temporary(&mut self) -> Operand<'static> {
		self.temporaries += 1;
		Operand::Temporary(self.temporaries)
	}

	pub fn label(&mut self, prefix: impl Into<String>) -> Label {
		let label = Label::new(prefix, self.labels);
		self.labels += 1;
		label
	}

	/// A `break` or `continue` jump waiting for its target.
	pub fn placeholder(&mut self, kind: ControlKind, line: usize) -> ControlJump {
		let id = self.placeholders;
		self.placeholders += 1;
		ControlJump { id, kind, line, target: JumpTarget::Unresolved }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counters_are_independent() {
		let mut session = Session::new();
		assert_eq!(session.temporary(), Operand::Temporary(1));
		assert_eq!(session.label("else").to_string(), "else_label_0");
		assert_eq!(session.temporary(), Operand::Temporary(2));
		assert_eq!(session.label("endif").to_string(), "endif_label_1");
		assert_eq!(session.placeholder(ControlKind::Break, 4).id, 0);
		assert_eq!(session.placeholder(ControlKind::Continue, 5).id, 1);
	}

	#[test]
	fn sessions_do_not_share_counters() {
		let mut first = Session::new();
		first.temporary();
		first.label("x");
		let mut second = Session::new();
		assert_eq!(second.temporary(), Operand::Temporary(1));
		assert_eq!(second.label("x").to_string(), "x_label_0");
	}
}
