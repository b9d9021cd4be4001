use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct SongRef {
    pub name: String,
    pub unique_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct SongJson {
    pub title: String,
    pub unique_name: String,
    pub album: String,
    pub album_unique_name: String,
    pub artists: Vec<String>,
    pub artist_unique_names: Vec<String>,
    #[serde(default)]
    pub track: Option<u32>,
    /// Absolute path of the media file on the server, e.g. `/cdn/files/...`.
    pub url: String,
}
