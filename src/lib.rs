//! Downloads one champion icon per key listed in a local JSON file.
//!
//! [`KeyList`] loads the keys, [`Downloader`] streams a single file to disk
//! and [`run`] drives the two over the whole list, stopping at the first
//! failure.

pub mod config;
pub mod downloader;
pub mod driver;
pub mod error;
pub mod keys;
pub mod logging;

pub use config::Config;
pub use downloader::{Download, DownloadError, Downloader, FileDownloader, Response, UReqFetcher};
pub use driver::run;
pub use error::{Error, Result};
pub use keys::{KeyList, KeysError};
