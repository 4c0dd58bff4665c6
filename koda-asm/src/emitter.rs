//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use log::debug;
use positioned_io::WriteAt;

use crate::{
	error::{KodaError, KodaResult},
	record::INSTRUCTION_SIZE,
	result::CompilationResult,
};

/// Writes every instruction of an error-free result to `output`, instruction
/// `i` landing at byte offset `i * INSTRUCTION_SIZE`.
///
/// Returns the number of bytes written. Nothing is written if the result has
/// errors.
pub fn emit<W: WriteAt>(result: &CompilationResult, output: &mut W) -> KodaResult<u64> {
	if !result.is_ok() {
		return Err(KodaError::ErrorsPresent(result.error_count()));
	}

	let mut addr = 0u64;
	for instr in result.instructions() {
		output.write_all_at(addr, &instr.to_bytes())?;
		addr += INSTRUCTION_SIZE as u64;
	}
	output.flush()?;

	debug!("emitted {} bytes", addr);
	Ok(addr)
}

/// Serializes an error-free result into a byte vector.
pub fn serialize(result: &CompilationResult) -> KodaResult<Vec<u8>> {
	let mut bytes = Vec::with_capacity(result.instructions().len() * INSTRUCTION_SIZE);
	emit(result, &mut bytes)?;
	Ok(bytes)
}
