use clap::Parser;
use log::{debug, info};

use crate::config::Config;
use crate::git::{self, Invoker, Outcome, System};
use crate::CliResult;

static PUSH: &str = "push";

#[derive(Parser, Debug, Default)]
pub struct Args {}

pub fn run(_args: Args) -> CliResult<i32> {
    let config = Config::new()?;

    let outcome = Push::new(&config).perform(&mut System);

    Ok(outcome.code())
}

pub struct Push<'a> {
    remotes: &'a [String; 2],
}

impl<'a> Push<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            remotes: &config.remotes,
        }
    }

    // Both remotes are always attempted, the result is the one of the last push.
    pub fn perform<I: Invoker>(&self, invoker: &mut I) -> Outcome {
        let [first, second] = self.remotes;

        Self::push(invoker, first);
        Self::push(invoker, second)
    }

    fn push<I: Invoker>(invoker: &mut I, remote: &str) -> Outcome {
        info!("Pushing to {}", remote);

        let outcome = invoker.invoke(git::PROGRAM, &[PUSH, remote]);

        if outcome.success() {
            debug!("Pushed to {}", remote);
        } else {
            debug!("Push to {} failed with exit code {}", remote, outcome.code());
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::io;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, Vec<String>)>,
        outcomes: VecDeque<Outcome>,
    }

    impl Recorder {
        fn answering(outcomes: &[Outcome]) -> Self {
            Self {
                calls: Vec::new(),
                outcomes: outcomes.iter().copied().collect(),
            }
        }
    }

    impl Invoker for Recorder {
        fn invoke(&mut self, program: &str, args: &[&str]) -> Outcome {
            self.calls.push((
                program.to_string(),
                args.iter().map(|arg| arg.to_string()).collect(),
            ));
            self.outcomes.pop_front().unwrap_or(Outcome::Exited(0))
        }
    }

    fn call(remote: &str) -> (String, Vec<String>) {
        ("git".to_string(), vec!["push".to_string(), remote.to_string()])
    }

    #[test]
    fn pushes_to_sourcehut_then_github() {
        let config = Config::default();
        let mut recorder = Recorder::default();

        let outcome = Push::new(&config).perform(&mut recorder);

        assert_eq!(outcome, Outcome::Exited(0));
        assert_eq!(recorder.calls, vec![call("sourcehut"), call("github")]);
    }

    #[test]
    fn second_push_runs_after_first_fails() {
        let config = Config::default();
        let mut recorder = Recorder::answering(&[Outcome::Exited(1), Outcome::Exited(0)]);

        let outcome = Push::new(&config).perform(&mut recorder);

        assert_eq!(recorder.calls.len(), 2);
        assert_eq!(outcome, Outcome::Exited(0));
    }

    #[test]
    fn reports_last_push_outcome() {
        let config = Config::default();
        let mut recorder = Recorder::answering(&[Outcome::Exited(0), Outcome::Exited(128)]);

        let outcome = Push::new(&config).perform(&mut recorder);

        assert_eq!(outcome.code(), 128);
    }

    #[test]
    fn unavailable_git_is_attempted_for_both_remotes() {
        let config = Config::default();
        let missing = Outcome::Unavailable(io::ErrorKind::NotFound);
        let mut recorder = Recorder::answering(&[missing, missing]);

        let outcome = Push::new(&config).perform(&mut recorder);

        assert_eq!(recorder.calls, vec![call("sourcehut"), call("github")]);
        assert_eq!(outcome.code(), 127);
    }

    #[test]
    fn uses_configured_remotes() {
        let config = Config {
            remotes: ["origin".to_string(), "backup".to_string()],
        };
        let mut recorder = Recorder::default();

        Push::new(&config).perform(&mut recorder);

        assert_eq!(recorder.calls, vec![call("origin"), call("backup")]);
    }
}
