use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnstyleError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Stdio(#[from] std::io::Error),
}
