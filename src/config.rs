use std::path::PathBuf;

use crate::model::error::SalesError;

/// Environment variable naming a file to append the run log to.
pub const LOG_PATH_VAR: &str = "CALCULATE_SALES_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub directory: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// `args` excludes the program name. Exactly one directory is accepted.
    pub fn from_args<I>(args: I, log_path: Option<PathBuf>) -> Result<Self, SalesError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (Some(directory), None) = (args.next(), args.next()) else {
            return Err(SalesError::UnknownError);
        };

        Ok(Config {
            directory: PathBuf::from(directory),
            log_path,
        })
    }

    pub fn from_env() -> Result<Self, SalesError> {
        let log_path = std::env::var_os(LOG_PATH_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::from_args(std::env::args().skip(1), log_path)
    }
}
