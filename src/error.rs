use crate::config::ConfigError;
use crate::http::ServerError;

/// Startup failures. Any of these ends the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
