//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use std::fmt::{self, Display, Formatter};

/// A line-local problem found while compiling. Never fatal to the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// 1-based source line.
	pub line: usize,
	pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
	UnknownInstruction(String),
	TooManyArguments {
		expected: usize,
		got: usize,
	},
	NotEnoughArguments {
		expected: usize,
		got: usize,
	},
	/// The literal does not fit in a field `bits` wide.
	ValueTooLarge { bits: u8 },
	MalformedNumber(String),
}

impl Display for DiagnosticKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownInstruction(name) => write!(f, "Unknown instruction '{}'", name),
			Self::TooManyArguments { expected, got } => {
				write!(f, "Too many arguments. Expected {}, got {}", expected, got)
			},
			Self::NotEnoughArguments { expected, got } => {
				write!(f, "Not enough arguments. Expected {}, got {}", expected, got)
			},
			Self::ValueTooLarge { bits } => {
				write!(f, "Value too large. Number must be {}-bit", bits)
			},
			Self::MalformedNumber(token) => write!(f, "Malformed number '{}'", token),
		}
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Tokenizer error on line {}: {}", self.line, self.kind)
	}
}
