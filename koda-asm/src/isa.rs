//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! The Koda instruction set: opcodes and the operand layout of every mnemonic.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::record::{Width, PAYLOAD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Opcode {
	Noop = 0x0000,
	Halt = 0x0001,
	Panic = 0x0002,

	IncrementRegister = 0x0100,
	DecrementRegister = 0x0101,
	Load = 0x0102,
	MemoryRead = 0x0103,
	MemoryWrite = 0x0104,

	StateWrite = 0x0110,
	StateRead = 0x0111,

	Jump = 0x0200,
	JumpCompare = 0x0201,

	CompareBytes = 0x0300,
	CompareShorts = 0x0301,

	Add = 0x0310,
	Sub = 0x0311,
	And = 0x0312,
	Or = 0x0313,
	Not = 0x0314,
	Xor = 0x0315,
	ShiftLeft = 0x0316,
	ShiftRight = 0x0317,

	Platform = 0x1000,
	Extended = 0x1001,
}

/// A named operand slot within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
	pub name: &'static str,
	pub width: Width,
	pub offset: usize,
}

impl Field {
	pub const fn byte(name: &'static str, offset: usize) -> Self {
		Self {
			name,
			width: Width::Byte,
			offset,
		}
	}

	pub const fn double_byte(name: &'static str, offset: usize) -> Self {
		Self {
			name,
			width: Width::DoubleByte,
			offset,
		}
	}

	pub const fn end(&self) -> usize {
		self.offset + self.width.byte_size() as usize
	}
}

/// Describes how a mnemonic is encoded. Operands map one-to-one onto `fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mnemonic {
	pub keyword: &'static str,
	pub opcode: Opcode,
	pub fields: &'static [Field],
}

impl Mnemonic {
	pub const fn new(keyword: &'static str, opcode: Opcode, fields: &'static [Field]) -> Self {
		Self {
			keyword,
			opcode,
			fields,
		}
	}

	pub const fn required_arg_count(&self) -> usize {
		self.fields.len()
	}
}

const fn raw_payload() -> [Field; PAYLOAD_SIZE] {
	let mut fields = [Field::byte("byte", 0); PAYLOAD_SIZE];
	let mut i = 0;
	while i < PAYLOAD_SIZE {
		fields[i] = Field::byte("byte", i);
		i += 1;
	}
	fields
}

const REG: &[Field] = &[Field::byte("reg", 0)];
const REG_VALUE: &[Field] = &[Field::byte("reg", 0), Field::byte("value", 1)];
const REG_ADDR: &[Field] = &[Field::byte("reg", 0), Field::double_byte("addr", 1)];
const ADDR: &[Field] = &[Field::double_byte("addr", 0)];
const TWO_REGS: &[Field] = &[Field::byte("regA", 0), Field::byte("regB", 1)];
const FOUR_REGS: &[Field] = &[
	Field::byte("regA", 0),
	Field::byte("regB", 1),
	Field::byte("regC", 2),
	Field::byte("regD", 3),
];
const BINARY_OP: &[Field] = &[
	Field::byte("regA", 0),
	Field::byte("regB", 1),
	Field::byte("out", 2),
];
const UNARY_OP: &[Field] = &[Field::byte("regA", 0), Field::byte("out", 1)];
const PLATFORM: &[Field] = &[Field::byte("in", 0), Field::byte("out", 1)];
const RAW_PAYLOAD: [Field; PAYLOAD_SIZE] = raw_payload();

/// Every mnemonic the assembler understands.
pub const INSTRUCTION_SET: &[Mnemonic] = &[
	Mnemonic::new("noop", Opcode::Noop, &[]),
	Mnemonic::new("halt", Opcode::Halt, &[]),
	Mnemonic::new("panic", Opcode::Panic, &[]),
	Mnemonic::new("regi", Opcode::IncrementRegister, REG),
	Mnemonic::new("regd", Opcode::DecrementRegister, REG),
	Mnemonic::new("load", Opcode::Load, REG_VALUE),
	Mnemonic::new("memr", Opcode::MemoryRead, REG_ADDR),
	Mnemonic::new("memw", Opcode::MemoryWrite, REG_ADDR),
	Mnemonic::new("staw", Opcode::StateWrite, REG),
	Mnemonic::new("star", Opcode::StateRead, REG),
	Mnemonic::new("jump", Opcode::Jump, ADDR),
	Mnemonic::new("jcmp", Opcode::JumpCompare, REG_ADDR),
	Mnemonic::new("cmpb", Opcode::CompareBytes, TWO_REGS),
	Mnemonic::new("cmps", Opcode::CompareShorts, FOUR_REGS),
	Mnemonic::new("add", Opcode::Add, BINARY_OP),
	Mnemonic::new("sub", Opcode::Sub, BINARY_OP),
	Mnemonic::new("and", Opcode::And, BINARY_OP),
	Mnemonic::new("or", Opcode::Or, BINARY_OP),
	Mnemonic::new("not", Opcode::Not, UNARY_OP),
	Mnemonic::new("xor", Opcode::Xor, BINARY_OP),
	Mnemonic::new("shl", Opcode::ShiftLeft, BINARY_OP),
	Mnemonic::new("shr", Opcode::ShiftRight, BINARY_OP),
	Mnemonic::new("plat", Opcode::Platform, PLATFORM),
	Mnemonic::new("ext", Opcode::Extended, &RAW_PAYLOAD),
];

/// Finds the mnemonic keyword for an encoded opcode, if it is part of the set.
pub fn keyword_of(opcode: u16) -> Option<&'static str> {
	let opcode = Opcode::try_from(opcode).ok()?;
	INSTRUCTION_SET
		.iter()
		.find(|mnemonic| mnemonic.opcode == opcode)
		.map(|mnemonic| mnemonic.keyword)
}
