mod fetcher;

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub use fetcher::UReqFetcher;

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

/// Bodies are copied to disk in chunks of this many bytes.
pub const CHUNK_SIZE: usize = 8192;

pub type Body = Box<dyn Read + Send>;

/// What a fetcher got back for a single GET.
pub enum Response {
    Ok(Body),
    Status(u16),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: impl Read + Send + 'static) -> Self {
        Self::Ok(Box::new(body))
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn not_found() -> Self {
        Self::Status(404)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Ok(_) => f.write_str("Ok(..)"),
            Response::Status(code) => f.debug_tuple("Status").field(code).finish(),
            Response::NetworkError(message) => {
                f.debug_tuple("NetworkError").field(message).finish()
            }
        }
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL has no usable file name in its last path segment: {url}")]
    MissingFileName { url: String },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub bytes: u64,
}

impl Download {
    pub fn new(source: String, file: PathBuf, bytes: u64) -> Self {
        Self {
            source,
            file,
            bytes,
        }
    }
}

/// Streams remote files into a single folder, one GET per call.
///
/// The folder is expected to exist already; the driver creates it.
pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    folder: PathBuf,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(folder: impl Into<PathBuf>, fetcher: T) -> Self {
        Downloader {
            folder: folder.into(),
            fetcher,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn fetcher(&self) -> &T {
        &self.fetcher
    }

    /// Downloads `url` into `<folder>/<last path segment of url>`, replacing
    /// any file already there.
    ///
    /// A non-2xx status or transport failure is returned as an error before
    /// anything is written. If the body breaks off midway the partial file is
    /// left on disk.
    pub fn download(&self, url: &str) -> Result<Download, DownloadError> {
        let parsed = Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let url = parsed.as_str();

        let file_name = file_name_for(&parsed).ok_or_else(|| DownloadError::MissingFileName {
            url: url.to_string(),
        })?;
        let file_path = self.folder.join(&file_name);

        let mut body = match self.fetcher.fetch(url) {
            Response::Ok(body) => body,
            Response::Status(status) => {
                return Err(DownloadError::Status {
                    url: url.to_string(),
                    status,
                })
            }
            Response::NetworkError(message) => {
                return Err(DownloadError::Network {
                    url: url.to_string(),
                    message,
                })
            }
        };

        let io_error = |source: io::Error| DownloadError::Io {
            path: file_path.clone(),
            source,
        };

        let mut file = File::create(&file_path).map_err(io_error)?;
        let bytes = copy_in_chunks(&mut body, &mut file).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        debug!(url, file = %file_path.display(), bytes, "download written");

        Ok(Download::new(url.to_string(), file_path, bytes))
    }
}

/// Percent-decoded last path segment of `url`, the name the file is saved
/// under. `None` when it is empty, not UTF-8, or would leave the folder.
fn file_name_for(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    let name = percent_decode_str(segment).decode_utf8().ok()?;

    let leaves_folder = name == "." || name == ".." || name.contains(|c: char| c == '/' || c == '\\');
    if name.is_empty() || leaves_folder {
        return None;
    }

    Some(name.into_owned())
}

fn copy_in_chunks(reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<u64> {
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut written = 0u64;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => return Ok(written),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&chunk[..n])?;
        written += n as u64;
    }
}
