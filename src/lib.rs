//! # How CPL text becomes QUAD code
//!
//! User's source code: `x: float; { x = 3.3 * 2; }`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. At every position each rule tries to match, the
//! longest match wins and an earlier rule wins a tie. That is why `whilex` is
//! an identifier and `while` a keyword.
//!
//! Whitespaces and comments `/* ... */` are ignored. Text no rule accepts
//! becomes an invalid token, reported later with the other errors. So the
//! tokens are `["x", ":", "float", ";", "{", "x", "=", "3.3", "*", "2", ";",
//! "}"]`.
//!
//! One rule looks backwards: the `<` and `>` around the type in
//! `static_cast<int>(e)` are cast brackets, not comparisons.

//! ## Parsing
//!
//! The `parser` builds a tree of the program from the tokens and reports the
//! first `syntax error` it meets; there is nothing to check or translate
//! without a tree.
//!
//! ``` markdown
//! x (Stmt.Assignment)
//! └── * (Expr.Binary)
//!     ├── 3.3 (Expr.Number)
//!     └── 2 (Expr.Number)
//! ```

//! ## Static analysis
//!
//! The declarations fill the `symbol table`: every name with its type, `int`
//! or `float`. CPL has one scope, so a name declared twice is an error.
//!
//! The translator checks types while it generates code. Mixing `int` and
//! `float` widens the `int`; a `float` never flows into an `int` without an
//! explicit `static_cast`.

//! ## Code generation
//!
//! The output is QUAD, a three-address code: a four-letter opcode, then up to
//! three operands, with labels for jumps.
//!
//! ``` text
//! ITOR t2 2
//! RMLT t1 3.3 t2
//! RASN x t1
//! HALT
//! ```
//!
//! `if`, `while` and `switch` turn into conditional jumps to labels. A
//! `break` or `continue` doesn't know its label when it is translated, so it
//! is left as a placeholder and patched by the loop or switch around it.

//! ## Errors
//!
//! Every phase collects its errors instead of stopping at the first one, so
//! one run reports them all. Any error means no output file.

pub mod cli;
mod compiler;
mod error;
mod parser;
mod quad;
mod scanner;
mod statement;
mod symbol_table;
mod translator;

pub use compiler::{Compiler, DEFAULT_SIGNATURE};
pub use error::{
	CompileError, CpqError,
	parser::{ParseError, ParseErrorType},
	scanner::ScanError,
	semantic::{SemanticError, SemanticErrorType},
};
pub use parser::{
	Parser, parse,
	expression::{ArithmeticOperator, BoolExpression, Expression, Name, Number, RelationalOperator},
};
pub use quad::{Code, ControlJump, ControlKind, JumpTarget, Label, Operand, Operator, Quad, Type, encode};
pub use scanner::{Attribute, Scanner, Token, TokenKind, tokenize};
pub use statement::{Case, Declaration, Program, Statement};
pub use symbol_table::{Symbol, SymbolTable};
pub use translator::{Translation, translate};
