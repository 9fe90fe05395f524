use clap::{Parser, Subcommand};

use std::process;

mod cmd;
mod config;
mod error;
mod git;
mod paths;

#[macro_export]
macro_rules! werr {
    ($code:expr, $($arg:tt)*) => ({
        use std::io::Write;
        let _ = writeln!(&mut ::std::io::stderr(), $($arg)*);
        ::std::process::exit($code)
    });
}

pub type CliResult<T> = Result<T, error::CliError>;

#[derive(Parser, Debug)]
#[command(name = "mission-control", version, about = "Push the current repository to its mirrors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run `git push` for sourcehut and then for github
    Push(cmd::push::Args),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.run() {
        Ok(code) => process::exit(code),
        Err(err) => werr!(1, "{}", err),
    }
}

impl Command {
    fn run(self) -> CliResult<i32> {
        match self {
            Command::Push(args) => cmd::push::run(args),
        }
    }
}
