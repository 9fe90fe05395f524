use serde::Deserialize;

use std::fs::File;
use std::path::Path;

use crate::error::CliError;
use crate::{paths, CliResult};

const CONFIGURATION_FILENAME: &str = "config";

static SOURCEHUT: &str = "sourcehut";
static GITHUB: &str = "github";

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub remotes: [String; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remotes: [SOURCEHUT.to_string(), GITHUB.to_string()],
        }
    }
}

impl Config {
    // A missing file is not created here, pushing must not write anything.
    pub fn new() -> CliResult<Config> {
        match paths::config_file(CONFIGURATION_FILENAME)? {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load(path: &Path) -> CliResult<Config> {
        let file = File::open(path).map_err(|source| CliError::ReadConfiguration {
            path: path.display().to_string(),
            source,
        })?;

        serde_yaml::from_reader(file).map_err(|source| CliError::InvalidConfiguration {
            path: path.display().to_string(),
            source,
        })
    }
}
