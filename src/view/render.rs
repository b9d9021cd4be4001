use std::io::{self, Write};

use music_server_client::Client;
use music_server_types::index::AlbumJson;

use super::artists_summary;

pub fn render<W: Write>(
    writer: &mut W,
    client: &Client,
    albums: &[AlbumJson],
    is_handset: bool,
) -> io::Result<()> {
    if albums.is_empty() {
        return writeln!(writer, "No albums");
    }

    for album in albums {
        let summary = artists_summary(album);
        if is_handset {
            if summary.is_empty() {
                writeln!(writer, "{}", album.name)?;
            } else {
                writeln!(writer, "{} - {}", album.name, summary)?;
            }
            continue;
        }

        write!(writer, "{}\t{}\t{} tracks", album.name, summary, album.song_count())?;
        let missing = album.missing_count();
        if missing > 0 {
            write!(writer, " ({missing} missing)")?;
        }
        match album.cover_url.as_deref() {
            Some(cover_url) => writeln!(writer, "\t{}", client.url(cover_url))?,
            None => writeln!(writer, "\t-")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use music_server_types::index::{ArtistRef, SongRef};

    use super::*;

    fn album() -> AlbumJson {
        AlbumJson {
            name: "Album".into(),
            unique_name: "album".into(),
            artists: ["A", "B", "C"]
                .into_iter()
                .map(|name| ArtistRef { name: name.into(), unique_name: name.to_lowercase() })
                .collect(),
            songs: vec![
                Some(SongRef { name: "One".into(), unique_name: "one".into() }),
                None,
                Some(SongRef { name: "Three".into(), unique_name: "three".into() }),
            ],
            cover_url: Some("/cdn/files/Album/cover.jpg".into()),
            tracked: true,
        }
    }

    fn render_to_string(albums: &[AlbumJson], is_handset: bool) -> String {
        let client = Client::new("http://localhost:8980".into());
        let mut output = Vec::new();
        render(&mut output, &client, albums, is_handset).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_to_string(&[], false), "No albums\n");
        assert_eq!(render_to_string(&[], true), "No albums\n");
    }

    #[test]
    fn test_render_handset() {
        let untitled = AlbumJson { name: "Untitled".into(), artists: vec![], ..album() };
        assert_eq!(render_to_string(&[album(), untitled], true), "Album - A, B, ...\nUntitled\n");
    }

    #[test]
    fn test_render_wide() {
        let uncovered = AlbumJson { cover_url: None, songs: vec![], ..album() };
        assert_eq!(
            render_to_string(&[album(), uncovered], false),
            "Album\tA, B, ...\t2 tracks (1 missing)\thttp://localhost:8980/cdn/files/Album/cover.jpg\n\
             Album\tA, B, ...\t0 tracks\t-\n"
        );
    }
}
