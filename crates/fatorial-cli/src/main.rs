use clap::{Parser, Subcommand};
use fatorial::{repl, FatConfig, Overflow};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Recursive factorial", long_about = None)]
struct Cli {
    /// JSON config file; without it the built-in defaults apply
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print n! (default n = 10)")]
    Run {
        #[arg(long, allow_negative_numbers = true)]
        value: Option<i32>,
        /// Wrap on overflow like a C int instead of failing
        #[arg(long)]
        wrapping: bool,
    },
    #[command(about = "Read n from stdin and print n!")]
    Ask,
    #[command(about = "Factorial REPL")]
    Repl,
    #[command(about = "Emit the program as C")]
    C {
        #[arg(long, allow_negative_numbers = true)]
        value: Option<i32>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = FatConfig::load(cli.config.as_deref())?;
    log::debug!("config: {:?}", config);

    match cli.command {
        Some(Commands::Run { value, wrapping }) => {
            if let Some(value) = value {
                config.value = value;
            }
            if wrapping {
                config.overflow = Overflow::Wrapping;
            }
            fatorial::run(&config)?;
        }
        Some(Commands::Ask) => {
            fatorial::ask(&config)?;
        }
        Some(Commands::Repl) => {
            repl::main_loop(&config)?;
        }
        Some(Commands::C { value, out }) => {
            if let Some(value) = value {
                config.value = value;
            }
            fatorial::trans_c_to(&config, out.as_deref())?;
        }
        None => {
            fatorial::run(&config)?;
        }
    }

    Ok(())
}
