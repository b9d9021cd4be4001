mod album;
mod artist;
mod song;

pub use album::AlbumJson;
pub use artist::{ArtistJson, ArtistRef};
pub use song::{SongJson, SongRef};
