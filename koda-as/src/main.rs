//
// Copyright (C) 2023 Ariel Abreu
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

use std::{
	ffi::OsString,
	fs,
	path::{Path, PathBuf},
	process::exit,
};

use clap::Parser as ClapParser;
use koda_asm::{emit, isa, Assembler, CompilationResult, Instruction, Registry};
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_UNREADABLE_SOURCE: i32 = 2;
const EXIT_COMPILE_FAILED: i32 = 3;
const EXIT_OUTPUT_EXISTS: i32 = 4;

#[derive(ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
	source: Option<PathBuf>,

	#[arg(short, long)]
	output: Option<PathBuf>,

	/// List every compiled instruction with its operand fields
	#[arg(long)]
	print_instructions: bool,

	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// `foo.koda` becomes `foo.koda.bin`; `foo` becomes `foo.bin`.
fn default_output_path(source: &Path) -> PathBuf {
	source.with_extension(match source.extension() {
		Some(source) => {
			let mut tmp = source.to_owned();
			tmp.push(".bin");
			tmp
		},
		None => OsString::from("bin"),
	})
}

fn plural(noun: &str, count: usize) -> String {
	if count == 1 {
		format!("{} {}", count, noun)
	} else {
		format!("{} {}s", count, noun)
	}
}

fn describe(instr: &Instruction) -> String {
	let keyword = match isa::keyword_of(instr.opcode) {
		Some(keyword) => keyword,
		None => return format!("? {:04x}", instr.opcode),
	};

	let mut line = format!("{:<5} {:04x}", keyword, instr.opcode);
	if let Some(mnemonic) = Registry::standard().lookup(keyword) {
		for field in mnemonic.fields {
			let value = instr.field(field.offset, field.width);
			line.push_str(&format!(" {}={}", field.name, value));
		}
	}
	line
}

fn print_instructions(result: &CompilationResult) {
	for instr in result.instructions() {
		println!("{}", describe(instr));
	}
}

/// Assembles `cli.source` and returns the process exit code.
fn run(cli: Args) -> i32 {
	let source = match cli.source {
		Some(x) => x,
		None => {
			eprintln!("No file specified.");
			return EXIT_FAILURE;
		},
	};
	let output_path = cli.output.unwrap_or_else(|| default_output_path(&source));

	println!("Source File: {}", source.display());
	println!("Target File: {}", output_path.display());

	if output_path.exists() {
		eprintln!("Target file already exists!");
		return EXIT_OUTPUT_EXISTS;
	}

	println!();

	let input = match fs::read_to_string(&source) {
		Ok(x) => x,
		Err(e) => {
			eprintln!("Unable to open \"{}\": {}", source.display(), e);
			return EXIT_UNREADABLE_SOURCE;
		},
	};

	info!("assembling {} line(s)", input.lines().count());
	let result = Assembler::default().compile(&input);

	for diagnostic in result.diagnostics() {
		println!("{}", diagnostic);
	}
	for todo in result.todos() {
		debug!("TODO on line {}: \"{}\"", todo.line, todo.description);
	}

	println!();

	if cli.print_instructions {
		print_instructions(&result);
		println!();
	}

	if !result.is_ok() {
		println!(
			"Compile failed: Tokenizer reported {}.",
			plural("error", result.error_count())
		);
		print_todo_count(&result);
		return EXIT_COMPILE_FAILED;
	}

	println!(
		"Successfully compiled {}.",
		plural("instruction", result.instructions().len())
	);
	print_todo_count(&result);

	let mut output_file = match fs::OpenOptions::new()
		.write(true)
		.create_new(true)
		.open(&output_path)
	{
		Ok(file) => file,
		Err(err) => {
			eprintln!("Unable to open output file: {}", err);
			return EXIT_FAILURE;
		},
	};

	match emit(&result, &mut output_file) {
		Ok(written) => {
			info!(
				"wrote {} to {}",
				plural("byte", written as usize),
				output_path.display()
			);
			EXIT_SUCCESS
		},
		Err(err) => {
			eprintln!("Failed to write to output file: {}", err);
			EXIT_FAILURE
		},
	}
}

fn print_todo_count(result: &CompilationResult) {
	if result.todo_count() > 0 {
		println!("Found {}.", plural("to-do comment", result.todo_count()));
	}
}

fn main() {
	let cli = Args::parse();

	let level = match cli.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
		eprintln!("Failed to initialize logging: {}", e);
	}

	println!(
		"Koda Assembler v{}\n--------------------------\n",
		env!("CARGO_PKG_VERSION")
	);

	exit(run(cli));
}
