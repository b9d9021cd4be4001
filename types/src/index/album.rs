use serde::{Deserialize, Serialize};

use super::{ArtistRef, SongRef};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct AlbumJson {
    pub name: String,
    pub unique_name: String,
    pub artists: Vec<ArtistRef>,
    /// Ordered by track number. `None` marks a track missing from the index.
    pub songs: Vec<Option<SongRef>>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub tracked: bool,
}

impl AlbumJson {
    pub fn song_count(&self) -> usize {
        self.songs.iter().flatten().count()
    }

    pub fn missing_count(&self) -> usize {
        self.songs.len() - self.song_count()
    }
}
