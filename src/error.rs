use std::path::PathBuf;

use thiserror::Error;

use crate::downloader::DownloadError;
use crate::keys::KeysError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Keys(#[from] KeysError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("cannot create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build icon URL for key '{key}': {source}")]
    InvalidKeyUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },
}
