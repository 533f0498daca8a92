use std::collections::HashMap;

use crate::{
	error::semantic::{SemanticError, SemanticErrorType},
	parser::expression::Name,
	quad::Type,
	statement::Program,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
	pub name:   &'a str,
	pub r#type: Type,
	/// Line of the declaration.
	pub line:   usize,
}

/// Every declared name and its type. CPL has a single global scope.
#[derive(Default, Debug, Clone)]
pub struct SymbolTable<'a> {
	symbols: HashMap<&'a str, Symbol<'a>>,
}

impl<'a> SymbolTable<'a> {
	pub fn new() -> Self { Self { symbols: HashMap::new() } }

	/// Declare every name of the program's declarations. A duplicate is
	/// reported and the first declaration kept; the walk always finishes.
	pub fn build(program: &Program<'a>) -> (Self, Vec<SemanticError>) {
		let mut table = Self::new();
		let errors = program
			.declarations
			.iter()
			.flat_map(|declaration| declaration.names.iter().map(move |name| (*name, declaration.r#type)))
			.filter_map(|(name, r#type)| table.declare(name, r#type).err())
			.collect();
		log::debug!("declared {} symbols", table.len());
		(table, errors)
	}

	/// Declare `name` once. A second declaration is an error carrying both lines
	/// and leaves the first one in place.
	pub fn declare(&mut self, name: Name<'a>, r#type: Type) -> Result<(), SemanticError> {
		if let Some(first) = self.symbols.get(name.text) {
			return Err(SemanticError::new(
				name.line,
				SemanticErrorType::DuplicateSymbol { name: name.text.to_string(), first_line: first.line },
			));
		}
		self.symbols.insert(name.text, Symbol { name: name.text, r#type, line: name.line });
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<&Symbol<'a>> { self.symbols.get(name) }

	pub fn len(&self) -> usize { self.symbols.len() }

	pub fn is_empty(&self) -> bool { self.symbols.is_empty() }
}
