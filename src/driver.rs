use std::fs;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::config::Config;
use crate::downloader::{Download, Downloader, FileDownloader};
use crate::error::{Error, Result};
use crate::keys::KeyList;

/// Downloads `<base_url>/<key>.png` for every key, in order, into the
/// configured output folder, creating that folder first if needed.
///
/// Fails fast: the first key that cannot be downloaded ends the run and its
/// error is returned. Later keys are never requested and files written so far
/// are kept.
pub fn run<T: FileDownloader>(
    config: &Config,
    keys: KeyList,
    fetcher: &T,
) -> Result<Vec<Download>> {
    let folder = config.output_folder();

    fs::create_dir_all(folder).map_err(|source| Error::OutputDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let downloader = Downloader::with_fetcher(folder, fetcher);

    debug!(
        base_url = %config.base_url(),
        folder = %folder.display(),
        keys = %keys.iter().join(", "),
        "starting icon downloads"
    );

    let mut downloads = Vec::with_capacity(keys.len());

    for key in keys {
        let url = config
            .icon_url(&key)
            .map_err(|source| Error::InvalidKeyUrl {
                key: key.clone(),
                source,
            })?;

        println!("Downloading {url}");

        let download = downloader.download(url.as_str()).map_err(|err| {
            warn!(key = %key, %err, "download failed, stopping");
            err
        })?;

        println!("Downloaded {url}");

        downloads.push(download);
    }

    Ok(downloads)
}
