#[cfg(test)]
mod tests {
	use std::{
		fs,
		path::{Path, PathBuf},
	};

	use cpq::{CompileError, Compiler, CpqError, SemanticErrorType};

	const AVERAGE: &[&str] = &[
		"IINP n",
		"IASN i 0",
		"RASN sum 0",
		"condition_label_0:",
		"ILSS t1 i n",
		"JMPZ end_while_label_1 t1",
		"RINP value",
		"RADD t2 sum value",
		"RASN sum t2",
		"IADD t3 i 1",
		"IASN i t3",
		"JUMP condition_label_0",
		"end_while_label_1:",
		"IGRT t4 n 0",
		"JMPZ else_label_2 t4",
		"ITOR t6 n",
		"RDIV t5 sum t6",
		"RASN avg t5",
		"RPRT avg",
		"JUMP endif_label_3",
		"else_label_2:",
		"IPRT 0",
		"endif_label_3:",
		"case_0_label_4:",
		"IEQL t7 n 0",
		"JMPZ case_1_label_5 t7",
		"IPRT 0",
		"JUMP end_switch_label_6",
		"case_1_label_5:",
		"IEQL t8 n 1",
		"JMPZ default_label_7 t8",
		"IPRT 1",
		"JUMP end_switch_label_6",
		"default_label_7:",
		"RTOI i avg",
		"IPRT i",
		"JUMP end_switch_label_6",
		"end_switch_label_6:",
		"HALT",
	];

	fn program(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("programs").join(name) }

	/// A fresh directory for files a test writes.
	fn scratch(name: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("cpq-{}-{name}", std::process::id()));
		let _ = fs::remove_dir_all(&dir);
		fs::create_dir_all(&dir).unwrap();
		dir
	}

	fn copy_into(dir: &Path, name: &str) -> PathBuf {
		let path = dir.join(name);
		fs::copy(program(name), &path).unwrap();
		path
	}

	#[test]
	fn compile_file_writes_listing_next_to_source() {
		let dir = scratch("listing");
		let source = copy_into(&dir, "average.cpl");
		let compiler = Compiler::new("test signature");

		let written = compiler.compile_file(&source, None).unwrap();
		assert_eq!(written, dir.join("average.qud"));

		let listing = fs::read_to_string(&written).unwrap();
		let lines: Vec<_> = listing.lines().collect();
		assert_eq!(lines[..lines.len() - 1], *AVERAGE);
		assert_eq!(lines.last(), Some(&"test signature"));
	}

	#[test]
	fn compile_file_to_explicit_output() {
		let dir = scratch("explicit");
		let output = dir.join("out.qud");
		let compiler = Compiler::default();
		let written = compiler.compile_file(program("average.cpl"), Some(&output)).unwrap();
		assert_eq!(written, output);
		assert!(fs::read_to_string(&output).unwrap().ends_with(&format!("HALT\n{}\n", cpq::DEFAULT_SIGNATURE)));
	}

	#[test]
	fn failed_compilation_writes_nothing() {
		let dir = scratch("errors");
		let source = copy_into(&dir, "errors.cpl");
		let compiler = Compiler::default();

		let Err(CpqError::CompileErrors(errors)) = compiler.compile_file(&source, None) else {
			panic!("errors.cpl must not compile");
		};
		assert!(!dir.join("errors.qud").exists());

		let summary: Vec<_> = errors.iter().map(|e| (e.line(), e.to_string())).collect();
		assert_eq!(summary, vec![
			(8, "line 8: Invalid token '@'".to_string()),
			(3, "line 3: Symbol 'a' already declared at line 1".to_string()),
			(5, "line 5: Invalid assignment: can't assign float to int 'a'".to_string()),
			(6, "line 6: Undefined symbol 'c'".to_string()),
			(8, "line 8: Undefined symbol 'x'".to_string()),
			(7, "line 7: 'break' used outside loop/switch".to_string()),
		]);
		assert!(matches!(&errors[5], CompileError::Semantic(e) if e.r#type == SemanticErrorType::BreakOutsideLoop));
	}

	#[test]
	fn syntax_error_is_reported_with_its_line() {
		let compiler = Compiler::default();
		let Err(CpqError::CompileErrors(errors)) = compiler.compile_file(program("syntax.cpl"), None) else {
			panic!("syntax.cpl must not compile");
		};
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].to_string(), "line 4: Syntax error: expected ';', found 'write'");
	}

	#[test]
	fn missing_source_is_an_internal_error() {
		let compiler = Compiler::default();
		let error = compiler.compile_file(program("missing.cpl"), None).unwrap_err();
		assert!(matches!(error, CpqError::InternalError(_)));
		assert!(error.to_string().contains("missing.cpl"));
	}

	#[test]
	fn token_listing_file() {
		let dir = scratch("tokens");
		let source = copy_into(&dir, "errors.cpl");
		let compiler = Compiler::new("sig");

		let (written, errors) = compiler.tokenize_file(&source, None).unwrap();
		assert_eq!(written, dir.join("errors.tok"));
		assert_eq!(errors.len(), 1);
		assert_eq!((errors[0].line, errors[0].column, errors[0].lexeme.as_str()), (8, 8, "@"));

		let listing = fs::read_to_string(&written).unwrap();
		let lines: Vec<_> = listing.lines().collect();
		assert_eq!(lines[..4], ["ID\ta\ta", "COLON\t:\t", "INT\tint\t", "SEMICOLON\t;\t"]);
		assert!(!listing.contains('@'));
		assert_eq!(lines.last(), Some(&"sig"));
	}

	#[test]
	fn compile_in_memory() {
		let source = fs::read_to_string(program("average.cpl")).unwrap();
		let compiler = Compiler::default();
		let code = compiler.compile(&source).unwrap();
		let lines: Vec<_> = code.iter().map(ToString::to_string).collect();
		assert_eq!(lines, AVERAGE);
		assert!(compiler.render(&code).starts_with("IINP n\nIASN i 0\n"));
	}
}
