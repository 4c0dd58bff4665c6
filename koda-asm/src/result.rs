//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use log::debug;

use crate::{
	diagnostic::{Diagnostic, DiagnosticKind},
	record::Instruction,
};

/// A `TODO: ` note found in a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
	pub line: usize,
	pub description: String,
}

/// Everything produced by one pass over a source file.
///
/// Only grows while the pass runs: instructions are appended in source order
/// and never edited or removed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationResult {
	instructions: Vec<Instruction>,
	diagnostics: Vec<Diagnostic>,
	todos: Vec<Todo>,
}

impl CompilationResult {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn instructions(&self) -> &[Instruction] {
		&self.instructions
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	pub fn todos(&self) -> &[Todo] {
		&self.todos
	}

	pub fn error_count(&self) -> usize {
		self.diagnostics.len()
	}

	pub fn todo_count(&self) -> usize {
		self.todos.len()
	}

	pub fn is_ok(&self) -> bool {
		self.diagnostics.is_empty()
	}

	pub(crate) fn push_instruction(&mut self, instruction: Instruction) {
		self.instructions.push(instruction);
	}

	pub(crate) fn push_error(&mut self, line: usize, kind: DiagnosticKind) {
		debug!("line {}: {}", line, kind);
		self.diagnostics.push(Diagnostic { line, kind });
	}

	pub(crate) fn push_todo(&mut self, line: usize, description: String) {
		debug!("TODO on line {}: {:?}", line, description);
		self.todos.push(Todo { line, description });
	}
}
