use concat_string::concat_string;
use music_server_types::constant::{ALBUMS_URL, ALBUM_URL, ARTISTS_URL, ARTIST_URL};
use music_server_types::index::{AlbumJson, ArtistJson, SongJson};
use music_server_types::ResponseResult;

use super::Client;
use crate::error::ClientError;

impl Client {
    pub async fn get_albums(&self) -> Result<ResponseResult<Vec<AlbumJson>>, ClientError> {
        self.get(ALBUMS_URL).await
    }

    pub async fn get_artists(&self) -> Result<ResponseResult<Vec<ArtistJson>>, ClientError> {
        self.get(ARTISTS_URL).await
    }

    pub async fn get_album(
        &self,
        unique_name: &str,
    ) -> Result<ResponseResult<AlbumJson>, ClientError> {
        self.get(&concat_string!(ALBUM_URL, "/", unique_name)).await
    }

    pub async fn get_artist(
        &self,
        unique_name: &str,
    ) -> Result<ResponseResult<ArtistJson>, ClientError> {
        self.get(&concat_string!(ARTIST_URL, "/", unique_name)).await
    }

    pub async fn get_song(
        &self,
        album_unique_name: &str,
        song_unique_name: &str,
    ) -> Result<ResponseResult<SongJson>, ClientError> {
        self.get(&concat_string!(ALBUM_URL, "/", album_unique_name, "/", song_unique_name)).await
    }

    pub fn file_url(&self, song: &SongJson) -> String {
        self.url(&song.url)
    }
}
