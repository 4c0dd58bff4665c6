use koda_asm::{compile, serialize, DiagnosticKind, KodaError, INSTRUCTION_SIZE};

#[test]
fn test_compile_counter() {
	let counter_asm = include_str!("programs/counter.koda");
	let counter_bytes = include_bytes!("programs/counter.bin");

	let result = compile(counter_asm);
	assert_eq!(result.error_count(), 0, "{:?}", result.diagnostics());
	assert_eq!(result.todo_count(), 1);
	assert_eq!(result.instructions().len(), 11);

	match serialize(&result) {
		Ok(bytecode) => {
			assert_eq!(
				bytecode.len(),
				result.instructions().len() * INSTRUCTION_SIZE
			);
			assert_eq!(bytecode.as_slice(), &counter_bytes[..]);
		},
		Err(err) => panic!("{}", err),
	}
}

#[test]
fn test_one_bad_line_blocks_output() {
	let result = compile("load 1 2\nfoo 1 2");
	assert_eq!(result.instructions().len(), 1);
	assert_eq!(result.error_count(), 1);
	assert_eq!(result.diagnostics()[0].line, 2);
	assert_eq!(
		result.diagnostics()[0].kind,
		DiagnosticKind::UnknownInstruction("foo".to_owned())
	);

	assert!(matches!(serialize(&result), Err(KodaError::ErrorsPresent(1))));
}

#[test]
fn test_literal_bases_encode_identically() {
	let dec = serialize(&compile("memw 255 4660")).unwrap();
	let hex = serialize(&compile("memw 0xff 0x1234")).unwrap();
	let bin = serialize(&compile("memw 0b11111111 0b1001000110100")).unwrap();
	assert_eq!(dec, hex);
	assert_eq!(dec, bin);
}

#[test]
fn test_field_bounds() {
	assert!(compile("load 0 255").is_ok());
	assert!(compile("jump 65535").is_ok());

	let result = compile("load 0 256\njump 65536");
	assert_eq!(
		result
			.diagnostics()
			.iter()
			.map(|d| d.to_string())
			.collect::<Vec<_>>(),
		vec![
			"Tokenizer error on line 1: Value too large. Number must be 8-bit",
			"Tokenizer error on line 2: Value too large. Number must be 16-bit",
		]
	);
}
