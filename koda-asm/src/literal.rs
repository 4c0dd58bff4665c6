//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use std::num::IntErrorKind;

use crate::{diagnostic::DiagnosticKind, record::Width};

/// Parses an unsigned integer literal that must fit in a field of `width`.
///
/// `0x` selects hexadecimal and `0b` binary; anything else is decimal.
pub fn parse_number(token: &str, width: Width) -> Result<u64, DiagnosticKind> {
	let (digits, radix) = if let Some(rest) = token.strip_prefix("0x") {
		(rest, 16)
	} else if let Some(rest) = token.strip_prefix("0b") {
		(rest, 2)
	} else {
		(token, 10)
	};

	// `from_str_radix` would also accept a leading sign
	if digits.is_empty() || !digits.chars().all(|char| char.is_digit(radix)) {
		return Err(DiagnosticKind::MalformedNumber(token.to_owned()));
	}

	let value = match u64::from_str_radix(digits, radix) {
		Ok(value) => value,
		Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
			return Err(DiagnosticKind::ValueTooLarge {
				bits: width.bit_size(),
			})
		},
		Err(_) => return Err(DiagnosticKind::MalformedNumber(token.to_owned())),
	};

	if value > width.max_value() {
		return Err(DiagnosticKind::ValueTooLarge {
			bits: width.bit_size(),
		});
	}

	Ok(value)
}
