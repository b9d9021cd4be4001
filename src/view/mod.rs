mod render;

use futures::{stream, Stream};
use itertools::Itertools;
use music_server_client::{Client, ClientError};
use music_server_types::index::AlbumJson;
use music_server_types::ResponseResult;
pub use render::render;

use crate::breakpoint::{Breakpoint, BreakpointObserver, Signal};

/// View state of the album page.
#[derive(Debug, Clone)]
pub struct Presenter {
    client: Client,
    is_handset: Signal<bool>,
}

impl Presenter {
    pub fn new(client: Client, observer: &mut BreakpointObserver) -> Self {
        Self { client, is_handset: observer.observe(Breakpoint::Handset) }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn is_handset(&self) -> Signal<bool> {
        self.is_handset.clone()
    }

    /// Yields a single album list. The request is only sent once the stream is polled.
    pub fn albums(&self) -> impl Stream<Item = Result<Vec<AlbumJson>, ClientError>> + Unpin {
        let client = self.client.clone();
        stream::once(Box::pin(async move { client.get_albums().await.map(albums_from_response) }))
    }
}

pub fn albums_from_response(response: ResponseResult<Vec<AlbumJson>>) -> Vec<AlbumJson> {
    response.ok.unwrap_or_default()
}

pub fn artists_summary(album: &AlbumJson) -> String {
    let mut summary = album.artists.iter().take(2).map(|artist| artist.name.as_str()).join(", ");
    if album.artists.len() > 2 {
        summary.push_str(", ...");
    }
    summary
}
