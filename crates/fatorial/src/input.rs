//! Console input helpers
//!
//! Line-oriented readers with the behavior of a classic `fgets` + `atoi`
//! runtime: lines are capped at [`INPUT_BUFFER_SIZE`] bytes including the
//! terminator, one trailing newline is stripped and numbers are parsed
//! permissively.

use crate::error::FatResult;
use log::debug;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Size of the line buffer, terminator included.
pub const INPUT_BUFFER_SIZE: usize = 1024;

/// Locked standard streams used by the program.
pub struct Console {
    pub input: StdinLock<'static>,
    pub output: StdoutLock<'static>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout().lock(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Print `prompt` (without newline) and read one line.
///
/// Returns `Ok(None)` when the input is already at end of stream. A line
/// longer than the buffer is split: the rest stays in `input` for the next
/// call.
pub fn read_string<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: Option<&str>,
) -> FatResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    if let Some(prompt) = prompt {
        output.write_all(prompt.as_bytes())?;
        output.flush()?;
    }

    let mut line = match read_bounded_line(input, INPUT_BUFFER_SIZE - 1)? {
        Some(line) => line,
        None => {
            debug!("read_string: end of input");
            return Ok(None);
        }
    };
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

/// Read a line and convert it with [`parse_int`]. End of input reads as 0.
pub fn read_number<R, W>(input: &mut R, output: &mut W, prompt: Option<&str>) -> FatResult<i32>
where
    R: BufRead,
    W: Write,
{
    match read_string(input, output, prompt)? {
        Some(text) => {
            let n = parse_int(&text);
            debug!("read_number: {:?} -> {}", text, n);
            Ok(n)
        }
        None => Ok(0),
    }
}

/// Reads bytes up to and including the first `\n`, stopping early after
/// `limit` bytes. `None` means nothing was read before end of stream.
fn read_bounded_line<R: BufRead>(input: &mut R, limit: usize) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut reached_eof = false;
    while line.len() < limit {
        let available = match input.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            reached_eof = true;
            break;
        }
        let room = limit - line.len();
        let window = &available[..available.len().min(room)];
        match window.iter().position(|&b| b == b'\n') {
            Some(i) => {
                line.extend_from_slice(&window[..=i]);
                input.consume(i + 1);
                return Ok(Some(line));
            }
            None => {
                let taken = window.len();
                line.extend_from_slice(window);
                input.consume(taken);
            }
        }
    }
    if reached_eof && line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// `atoi`-style conversion: leading whitespace, optional sign, then digits.
/// Anything else yields 0.
///
/// Out-of-range values saturate at the 64-bit limits and are then truncated
/// to 32 bits, the way `atoi` behaves on LP64 platforms.
pub fn parse_int(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_c_space(bytes[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = i64::from(bytes[i] - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        i += 1;
    }
    value as i32
}

/// `isspace` in the C locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
