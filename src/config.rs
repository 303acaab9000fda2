use std::path::{Path, PathBuf};

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/champion-icons/";
pub const DEFAULT_KEYS_PATH: &str = "src/constants/champs.json";
pub const DEFAULT_OUTPUT_DIR: &str = "./champion_icons";

/// Where the keys come from, where the icons live remotely and where they go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
    keys_path: PathBuf,
    output_dir: PathBuf,
}

impl Config {
    /// The built-in community dragon endpoint, key file and output folder.
    pub fn new() -> Result<Self, url::ParseError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Default paths with a different remote prefix.
    pub fn with_base_url(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            keys_path: PathBuf::from(DEFAULT_KEYS_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        })
    }

    pub fn keys_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.keys_path = path.into();
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn keys_file(&self) -> &Path {
        &self.keys_path
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_dir
    }

    /// `<base_url>/<key>.png`, with `<key>.png` escaped as one path segment.
    ///
    /// Fails when the base URL cannot carry a path (e.g. `data:` URLs).
    pub fn icon_url(&self, key: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(&format!("{key}.png"));

        Ok(url)
    }
}
