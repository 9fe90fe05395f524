use xdg::BaseDirectories;

use std::path::PathBuf;

use crate::error::CliError;
use crate::CliResult;

/// Looks up `filename` in the XDG configuration directories without creating anything.
pub fn config_file(filename: &str) -> CliResult<Option<PathBuf>> {
    Ok(directory()?.find_config_file(filename))
}

fn directory() -> CliResult<BaseDirectories> {
    BaseDirectories::with_prefix(env!("CARGO_PKG_NAME")).map_err(CliError::from)
}
