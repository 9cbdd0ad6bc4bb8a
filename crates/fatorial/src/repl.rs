use crate::config::FatConfig;
use crate::error::{FatError, FatResult};
use crate::input::parse_int;
use miette::{MietteHandlerOpts, Report};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Debug, PartialEq, Eq)]
enum CmdResult {
    Exit,
    Continue,
}

fn try_command(line: &str, config: &FatConfig) -> CmdResult {
    let words = line.split_whitespace().collect::<Vec<&str>>();
    if words.is_empty() {
        return CmdResult::Continue;
    }
    match words[0] {
        "help" => {
            println!("help - show this help");
            println!("q | quit - leave");
            println!("<n> - print n!");
            CmdResult::Continue
        }
        "q" | "quit" => CmdResult::Exit,
        _ => match eval_line(line, config) {
            Ok(result) => {
                println!("{} {}", config.label, result);
                CmdResult::Continue
            }
            Err(error) => {
                print_miette_error(error);
                CmdResult::Continue
            }
        },
    }
}

/// Evaluates one REPL line with the configured overflow mode.
fn eval_line(line: &str, config: &FatConfig) -> FatResult<i32> {
    config.overflow.eval(parse_int(line))
}

fn print_miette_error(err: FatError) {
    let report = Report::new(err);

    miette::set_hook(Box::new(|_| {
        Box::new(MietteHandlerOpts::new().terminal_links(true).build())
    }))
    .ok();

    eprintln!("{:?}", report);
}

pub fn main_loop(config: &FatConfig) -> FatResult<()> {
    let mut rl = DefaultEditor::new()?;
    #[cfg(feature = "with-file-history")]
    if rl.load_history(".history.txt").is_err() {
        println!("No previous history");
    }
    println!("{}", config.banner);
    let prompt = config.prompt().unwrap_or(">> ");
    loop {
        let readline = rl.readline(prompt);
        match readline {
            Ok(line) => {
                if rl.add_history_entry(line.as_str()).is_err() {
                    println!("Unable to add history");
                    break;
                }
                match try_command(&line, config) {
                    CmdResult::Exit => break,
                    CmdResult::Continue => continue,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history(".history.txt")?;
    Ok(())
}
