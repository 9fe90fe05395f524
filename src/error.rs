use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not determine the configuration directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("Could not read configuration file {path}: {source}")]
    ReadConfiguration {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid configuration file {path}: {source}")]
    InvalidConfiguration {
        path: String,
        source: serde_yaml::Error,
    },
}
