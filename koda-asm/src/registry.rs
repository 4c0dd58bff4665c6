//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;

use crate::{
	diagnostic::DiagnosticKind,
	isa::{Mnemonic, INSTRUCTION_SET},
	literal::parse_number,
	record::Instruction,
};

lazy_static! {
	static ref STANDARD: Registry = Registry::from_table(INSTRUCTION_SET);
}

/// Maps mnemonic keywords to their encodings.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	mnemonics: HashMap<&'static str, Mnemonic>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_table(table: &[Mnemonic]) -> Self {
		let mut registry = Self::new();
		for mnemonic in table {
			registry.insert(*mnemonic);
		}
		registry
	}

	/// The registry holding the full Koda instruction set.
	pub fn standard() -> &'static Registry {
		&STANDARD
	}

	/// Adds or replaces the encoding for `mnemonic.keyword`.
	pub fn insert(&mut self, mnemonic: Mnemonic) -> Option<Mnemonic> {
		self.mnemonics.insert(mnemonic.keyword, mnemonic)
	}

	pub fn lookup(&self, keyword: &str) -> Option<&Mnemonic> {
		self.mnemonics.get(keyword)
	}

	pub fn len(&self) -> usize {
		self.mnemonics.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mnemonics.is_empty()
	}
}

impl Mnemonic {
	/// Encodes one instruction from its operand tokens.
	///
	/// An arity mismatch yields a single error. Otherwise every operand is
	/// parsed and each failing one contributes an error; the instruction is
	/// only produced when all of them succeed.
	pub fn encode(&self, operands: &[&str]) -> Result<Instruction, Vec<DiagnosticKind>> {
		let expected = self.required_arg_count();
		let got = operands.len();

		if got > expected {
			return Err(vec![DiagnosticKind::TooManyArguments { expected, got }]);
		}
		if got < expected {
			return Err(vec![DiagnosticKind::NotEnoughArguments { expected, got }]);
		}

		let mut instr = Instruction::new(self.opcode.into());
		let mut errors = Vec::new();

		for (field, operand) in self.fields.iter().zip(operands) {
			match parse_number(operand, field.width) {
				Ok(value) => {
					trace!("{}.{} = {}", self.keyword, field.name, value);
					instr.set_field(field.offset, field.width, value);
				},
				Err(kind) => errors.push(kind),
			}
		}

		if errors.is_empty() {
			Ok(instr)
		} else {
			Err(errors)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::isa::{Field, Opcode};

	fn encode(keyword: &str, operands: &[&str]) -> Result<Instruction, Vec<DiagnosticKind>> {
		Registry::standard()
			.lookup(keyword)
			.expect("mnemonic should be registered")
			.encode(operands)
	}

	#[test]
	fn standard_registry_holds_the_instruction_set() {
		let registry = Registry::standard();
		assert_eq!(registry.len(), INSTRUCTION_SET.len());
		assert!(registry.lookup("load").is_some());
		assert!(registry.lookup("LOAD").is_none());
		assert!(registry.lookup("foo").is_none());
	}

	#[test]
	fn encodes_without_operands() {
		let instr = encode("halt", &[]).unwrap();
		assert_eq!(instr, Instruction::new(0x0001));
	}

	#[test]
	fn encodes_fields_at_their_offsets() {
		let instr = encode("jcmp", &["3", "0x1234"]).unwrap();
		assert_eq!(instr.opcode, 0x0201);
		assert_eq!(&instr.payload[..3], &[3, 0x34, 0x12]);
		assert!(instr.payload[3..].iter().all(|&b| b == 0));

		let instr = encode("cmps", &["1", "2", "3", "4"]).unwrap();
		assert_eq!(&instr.payload[..5], &[1, 2, 3, 4, 0]);

		let instr = encode("not", &["7", "0b11"]).unwrap();
		assert_eq!(instr.opcode, 0x0314);
		assert_eq!(&instr.payload[..2], &[7, 3]);
	}

	#[test]
	fn arithmetic_opcodes() {
		let expected = [
			("add", 0x0310),
			("sub", 0x0311),
			("and", 0x0312),
			("or", 0x0313),
			("xor", 0x0315),
			("shl", 0x0316),
			("shr", 0x0317),
		];
		for (keyword, opcode) in expected {
			let instr = encode(keyword, &["1", "2", "3"]).unwrap();
			assert_eq!(instr.opcode, opcode, "{}", keyword);
			assert_eq!(&instr.payload[..3], &[1, 2, 3]);
		}
	}

	#[test]
	fn extended_takes_one_byte_per_payload_slot() {
		let operands: Vec<String> = (1..=22).map(|i| i.to_string()).collect();
		let operands: Vec<&str> = operands.iter().map(String::as_str).collect();

		let instr = encode("ext", &operands).unwrap();
		assert_eq!(instr.opcode, 0x1001);
		assert_eq!(instr.payload[0], 1);
		assert_eq!(instr.payload[21], 22);

		assert_eq!(
			encode("ext", &operands[..21]),
			Err(vec![DiagnosticKind::NotEnoughArguments {
				expected: 22,
				got: 21
			}])
		);
	}

	#[test]
	fn arity_mismatch_is_a_single_error() {
		assert_eq!(
			encode("load", &["1"]),
			Err(vec![DiagnosticKind::NotEnoughArguments {
				expected: 2,
				got: 1
			}])
		);
		assert_eq!(
			encode("noop", &["1", "2"]),
			Err(vec![DiagnosticKind::TooManyArguments {
				expected: 0,
				got: 2
			}])
		);
	}

	#[test]
	fn every_bad_operand_is_reported() {
		assert_eq!(
			encode("load", &["256", "x"]),
			Err(vec![
				DiagnosticKind::ValueTooLarge { bits: 8 },
				DiagnosticKind::MalformedNumber("x".to_owned()),
			])
		);
		assert_eq!(
			encode("jump", &["65536"]),
			Err(vec![DiagnosticKind::ValueTooLarge { bits: 16 }])
		);
	}

	#[test]
	fn custom_registry() {
		const FIELDS: &[Field] = &[Field::double_byte("addr", 0)];

		let mut registry = Registry::new();
		assert!(registry.is_empty());
		registry.insert(Mnemonic::new("goto", Opcode::Jump, FIELDS));

		let instr = registry
			.lookup("goto")
			.unwrap()
			.encode(&["0x0200"])
			.unwrap();
		assert_eq!(instr.opcode, 0x0200);
		assert_eq!(&instr.payload[..2], &[0x00, 0x02]);
		assert!(registry.lookup("jump").is_none());
	}
}
