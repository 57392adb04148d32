use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report")]
    Write(#[source] io::Error),

    #[error("invalid tag pattern")]
    Pattern(#[from] regex::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
