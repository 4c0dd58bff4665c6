//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use log::debug;

use crate::{
	diagnostic::DiagnosticKind,
	registry::Registry,
	result::CompilationResult,
	tokenizer::TokenLine,
};

/// Runs a single top-to-bottom pass over source lines.
///
/// Errors are line-local: a bad line is recorded in the result and skipped,
/// and the pass carries on with the next one.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'r> {
	registry: &'r Registry,
}

impl Default for Assembler<'static> {
	fn default() -> Self {
		Self::new(Registry::standard())
	}
}

impl<'r> Assembler<'r> {
	pub fn new(registry: &'r Registry) -> Self {
		Self { registry }
	}

	/// Compiles a whole source file. A leading byte order mark is ignored.
	pub fn compile(&self, source: &str) -> CompilationResult {
		let source = source.strip_prefix('\u{feff}').unwrap_or(source);
		self.compile_lines(source.lines())
	}

	pub fn compile_lines<'a, I>(&self, lines: I) -> CompilationResult
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut result = CompilationResult::new();
		for (index, line) in lines.into_iter().enumerate() {
			self.compile_line(line, index + 1, &mut result);
		}

		debug!(
			"pass complete: {} instruction(s), {} error(s), {} TODO(s)",
			result.instructions().len(),
			result.error_count(),
			result.todo_count()
		);
		result
	}

	/// Compiles one line into `result`. `line_num` is 1-based.
	pub fn compile_line(&self, line: &str, line_num: usize, result: &mut CompilationResult) {
		let tokens = TokenLine::parse(line);

		if let Some(description) = tokens.todo() {
			result.push_todo(line_num, description);
		}

		let name = match tokens.mnemonic() {
			Some(name) => name,
			None => return,
		};

		let mnemonic = match self.registry.lookup(name) {
			Some(mnemonic) => mnemonic,
			None => {
				result.push_error(
					line_num,
					DiagnosticKind::UnknownInstruction(name.to_owned()),
				);
				return;
			},
		};

		match mnemonic.encode(tokens.operands()) {
			Ok(instr) => {
				debug!("line {}: {} -> {:#06x}", line_num, name, instr.opcode);
				result.push_instruction(instr);
			},
			Err(errors) => {
				for kind in errors {
					result.push_error(line_num, kind);
				}
			},
		}
	}
}
