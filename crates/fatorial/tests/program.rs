use fatorial::program;
use fatorial::{factorial, FatConfig};
use std::io::Cursor;

#[test]
fn default_program_prints_two_lines() {
    let mut out = Vec::new();
    program::run(&FatConfig::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["CALCULA O FATORIAL RECURSIVO", "Fatorial:  3628800"]);
}

#[test]
fn ask_coerces_garbage_to_zero() {
    let mut input = Cursor::new(b"abc\n".to_vec());
    let mut out = Vec::new();
    let result = program::ask(&FatConfig::default(), &mut input, &mut out).unwrap();
    assert_eq!(result, factorial(0).unwrap());
}
