//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! One-pass assembler for the Koda virtual CPU.
//!
//! Each source line becomes at most one fixed-size instruction record; the
//! records are emitted back to back with no header.

mod assembler;
mod diagnostic;
mod emitter;
mod error;
pub mod isa;
mod literal;
mod record;
mod registry;
mod result;
mod tokenizer;

pub use self::{
	assembler::Assembler,
	diagnostic::{Diagnostic, DiagnosticKind},
	emitter::{emit, serialize},
	error::{KodaError, KodaResult},
	literal::parse_number,
	record::{Instruction, Width, INSTRUCTION_SIZE, OPCODE_SIZE, PAYLOAD_SIZE},
	registry::Registry,
	result::{CompilationResult, Todo},
	tokenizer::TokenLine,
};

/// Compiles `source` with the standard instruction set.
pub fn compile(source: impl AsRef<str>) -> CompilationResult {
	Assembler::default().compile(source.as_ref())
}
