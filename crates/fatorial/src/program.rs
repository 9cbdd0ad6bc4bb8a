use crate::config::FatConfig;
use crate::error::FatResult;
use crate::input::read_number;
use log::info;
use std::io::{BufRead, Write};

/// Print the banner, evaluate `config.value` and print the labelled result.
pub fn run<W: Write>(config: &FatConfig, out: &mut W) -> FatResult<i32> {
    info!("computing {}! ({:?})", config.value, config.overflow);
    writeln!(out, "{}", config.banner)?;
    let result = config.overflow.eval(config.value)?;
    writeln!(out, "{} {}", config.label, result)?;
    out.flush()?;
    Ok(result)
}

/// Like [`run`], but the value is read from `input` first.
pub fn ask<R, W>(config: &FatConfig, input: &mut R, out: &mut W) -> FatResult<i32>
where
    R: BufRead,
    W: Write,
{
    let value = read_number(input, out, config.prompt())?;
    let config = FatConfig {
        value,
        ..config.clone()
    };
    run(&config, out)
}
