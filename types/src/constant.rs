pub const ALBUMS_URL: &str = "/cdn/index/albums";
pub const ARTISTS_URL: &str = "/cdn/index/artists";
pub const ALBUM_URL: &str = "/cdn/index/album";
pub const ARTIST_URL: &str = "/cdn/index/artist";
