//! Spawning of the external `git` executable.

use log::error;

use std::io;
use std::process::{Command, ExitStatus};

pub static PROGRAM: &str = "git";

const NOT_FOUND: i32 = 127;
const NOT_EXECUTABLE: i32 = 126;
const SIGNAL_BASE: i32 = 128;

/// How an external invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited(i32),
    Terminated(i32),
    Unavailable(io::ErrorKind),
}

impl Outcome {
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Exited(0))
    }

    /// Exit code to hand back to our own caller, following shell conventions.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Exited(code) => *code,
            Outcome::Terminated(signal) => SIGNAL_BASE + signal,
            Outcome::Unavailable(io::ErrorKind::NotFound) => NOT_FOUND,
            Outcome::Unavailable(_) => NOT_EXECUTABLE,
        }
    }
}

impl From<ExitStatus> for Outcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Outcome::Exited(code),
            None => Outcome::Terminated(signal(&status)),
        }
    }
}

#[cfg(unix)]
fn signal(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.signal().unwrap_or_default()
}

#[cfg(not(unix))]
fn signal(_status: &ExitStatus) -> i32 {
    0
}

pub trait Invoker {
    fn invoke(&mut self, program: &str, args: &[&str]) -> Outcome;
}

/// Runs the program attached to our terminal and waits for it.
#[derive(Debug, Default)]
pub struct System;

impl Invoker for System {
    fn invoke(&mut self, program: &str, args: &[&str]) -> Outcome {
        match Command::new(program).args(args).status() {
            Ok(status) => Outcome::from(status),
            Err(e) => {
                error!("Failed to run `{} {}`: {}", program, args.join(" "), e);
                Outcome::Unavailable(e.kind())
            }
        }
    }
}
