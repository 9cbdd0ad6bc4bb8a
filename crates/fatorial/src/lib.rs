pub mod config;
pub mod error;
pub mod factorial;
pub mod input;
pub mod program;
pub mod repl;
pub mod trans;

#[cfg(test)]
mod tests;

pub use crate::config::FatConfig;
pub use crate::error::{FatError, FatResult};
pub use crate::factorial::{factorial, wrapping_factorial, Overflow};
pub use crate::input::{parse_int, read_number, read_string, Console};

use std::io::{self, Write};
use std::path::Path;

/// Runs the program on the process console.
pub fn run(config: &FatConfig) -> FatResult<i32> {
    let mut console = Console::new();
    program::run(config, &mut console.output)
}

/// Reads the value from stdin, then runs.
pub fn ask(config: &FatConfig) -> FatResult<i32> {
    let mut console = Console::new();
    program::ask(config, &mut console.input, &mut console.output)
}

pub fn trans_c(config: &FatConfig) -> FatResult<String> {
    trans::c::transpile_c(config)
}

/// Writes the C translation unit to `path`, or to stdout when `None`.
pub fn trans_c_to(config: &FatConfig, path: Option<&Path>) -> FatResult<()> {
    let code = trans_c(config)?;
    match path {
        Some(path) => {
            std::fs::write(path, code)?;
            log::info!("C source written to {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(code.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
