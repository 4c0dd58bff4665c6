//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use log::trace;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "line.pest"]
struct LineParser;

const TODO_MARKER: &str = "TODO: ";

/// A source line split into its instruction tokens and its trailing comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLine<'a> {
	pub instruction: Vec<&'a str>,
	/// Comment tokens, without the leading `;`.
	pub comment: Vec<&'a str>,
}

impl<'a> TokenLine<'a> {
	pub fn parse(line: &'a str) -> Self {
		let mut tokens = Self::default();

		let pairs = match LineParser::parse(Rule::line, line) {
			Ok(pairs) => pairs,
			// the grammar accepts any input, newlines included
			Err(e) => unreachable!("line grammar rejected {:?}: {}", line, e),
		};
		for pair in pairs.flatten() {
			match pair.as_rule() {
				Rule::word => tokens.instruction.push(pair.as_str()),
				Rule::comment => tokens.comment.extend(
					pair.as_str()[1..]
						.split(' ')
						.filter(|token| !token.is_empty()),
				),
				_ => {},
			}
		}

		trace!("{:?} -> {:?}", line, tokens);
		tokens
	}

	pub fn is_empty(&self) -> bool {
		self.instruction.is_empty() && self.comment.is_empty()
	}

	pub fn mnemonic(&self) -> Option<&'a str> {
		self.instruction.first().copied()
	}

	pub fn operands(&self) -> &[&'a str] {
		match self.instruction.split_first() {
			Some((_, operands)) => operands,
			None => &[],
		}
	}

	pub fn comment_text(&self) -> String {
		self.comment.join(" ").trim().to_owned()
	}

	/// The description of a `TODO: ` note in the comment, if there is one.
	///
	/// The description is the text between the first and second colon.
	pub fn todo(&self) -> Option<String> {
		let text = self.comment_text();
		if !text.contains(TODO_MARKER) {
			return None;
		}

		let description = text.split(':').nth(1).unwrap_or_default();
		Some(description.trim().to_owned())
	}
}
