//! HTTP transports a [`Downloader`](super::Downloader) can fetch through.

mod ureq_fetcher;

#[cfg(test)]
mod mock_fetcher;

use super::{FileDownloader, Response};

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

/// A borrowed fetcher works too, so the caller keeps the fetcher after a run.
impl<T: FileDownloader + ?Sized> FileDownloader for &T {
    fn fetch(&self, url: &str) -> Response {
        (**self).fetch(url)
    }
}
