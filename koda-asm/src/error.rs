//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use std::{
	fmt::{self, Display, Formatter},
	io,
};

pub type KodaResult<T> = std::result::Result<T, KodaError>;

#[derive(Debug)]
pub enum KodaError {
	/// The compilation pass reported this many errors, so there is nothing to emit.
	ErrorsPresent(usize),
	Io(io::Error),
}

impl Display for KodaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::ErrorsPresent(count) => {
				write!(f, "refusing to emit bytecode: {} error(s) reported", count)
			},
			Self::Io(err) => write!(f, "{}", err),
		}
	}
}

impl std::error::Error for KodaError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<io::Error> for KodaError {
	fn from(err: io::Error) -> Self {
		KodaError::Io(err)
	}
}
