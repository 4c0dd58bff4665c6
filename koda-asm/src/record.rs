//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use byteorder::{ByteOrder, LittleEndian};

/// The size of an encoded instruction, in bytes.
pub const INSTRUCTION_SIZE: usize = 24;

/// The size of the opcode at the start of every instruction, in bytes.
pub const OPCODE_SIZE: usize = 2;

/// The size of the operand area following the opcode, in bytes.
pub const PAYLOAD_SIZE: usize = INSTRUCTION_SIZE - OPCODE_SIZE;

/// Width of a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
	Byte = 1,
	DoubleByte = 2,
}

impl Width {
	pub const fn byte_size(&self) -> u8 {
		match self {
			Width::Byte => 1,
			Width::DoubleByte => 2,
		}
	}

	pub const fn bit_size(&self) -> u8 {
		self.byte_size() * 8
	}

	/// The largest value representable in a field of this width.
	pub const fn max_value(&self) -> u64 {
		const ALL_BITS: u64 = !0u64;
		ALL_BITS >> (64 - (self.bit_size() as u64))
	}

	pub fn read(&self, src: &[u8]) -> u64 {
		match self {
			Width::Byte => src[0] as u64,
			Width::DoubleByte => LittleEndian::read_u16(src) as u64,
		}
	}

	pub fn write(&self, src: u64, dst: &mut [u8]) {
		match self {
			Width::Byte => dst[0] = src as u8,
			Width::DoubleByte => LittleEndian::write_u16(dst, src as u16),
		}
	}
}

/// A single fixed-size instruction: an opcode followed by a zero-padded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
	pub opcode: u16,
	pub payload: [u8; PAYLOAD_SIZE],
}

impl Instruction {
	pub const fn new(opcode: u16) -> Self {
		Self {
			opcode,
			payload: [0; PAYLOAD_SIZE],
		}
	}

	/// Writes `value` into the payload at `offset`.
	///
	/// The caller is responsible for range-checking `value` against `width`;
	/// excess high bits are discarded.
	pub fn set_field(&mut self, offset: usize, width: Width, value: u64) {
		let end = offset + width.byte_size() as usize;
		width.write(value, &mut self.payload[offset..end]);
	}

	pub fn field(&self, offset: usize, width: Width) -> u64 {
		let end = offset + width.byte_size() as usize;
		width.read(&self.payload[offset..end])
	}

	pub fn to_bytes(&self) -> [u8; INSTRUCTION_SIZE] {
		let mut bytes = [0u8; INSTRUCTION_SIZE];
		LittleEndian::write_u16(&mut bytes[..OPCODE_SIZE], self.opcode);
		bytes[OPCODE_SIZE..].copy_from_slice(&self.payload);
		bytes
	}
}
