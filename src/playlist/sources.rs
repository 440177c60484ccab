use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::playlist::{
    entities::{Playlist, RawEntry},
    errors::{Error, Result},
    normalizer::normalize_entry,
};

/// Column holding the track title in Exportify CSV exports
pub const TRACK_NAME_COLUMN: &str = "Track Name";
/// Column holding the (possibly comma separated) artists in Exportify CSV exports
pub const ARTIST_NAME_COLUMN: &str = "Artist Name(s)";

/// Where songs come from. Every variant yields the same normalized [`Playlist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReader {
    /// Exportify style CSV export
    Csv(PathBuf),
    /// One `Artist - Title` (or bare title) per line
    Text(PathBuf),
    /// Songs typed on stdin
    Interactive,
}

impl SourceReader {
    /// Pick the adapter from the file extension: `.csv` or plain text
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            SourceReader::Csv(path)
        } else {
            SourceReader::Text(path)
        }
    }

    /// Read and normalize every entry of this source
    pub async fn read(&self) -> Result<Playlist> {
        match self {
            SourceReader::Csv(path) => {
                info!("Processing Spotify CSV export: {}", path.display());
                parse_csv(&read_input(path).await?)
            }
            SourceReader::Text(path) => {
                info!("Processing text file: {}", path.display());
                Ok(parse_text(&read_input(path).await?))
            }
            SourceReader::Interactive => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                let mut stdout = tokio::io::stdout();
                read_interactive(stdin, &mut stdout).await
            }
        }
    }
}

async fn read_input(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            debug!("Read {} bytes from {path:?}", contents.len());
            Ok(contents)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::InputNotFound(path.to_path_buf())),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse an Exportify CSV export. Rows without a track name are skipped and recorded.
pub fn parse_csv(contents: &str) -> Result<Playlist> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers = reader.headers()?.clone();
    let track_idx = headers.iter().position(|h| h == TRACK_NAME_COLUMN);
    let artist_idx = headers.iter().position(|h| h == ARTIST_NAME_COLUMN);
    if track_idx.is_none() {
        warn!("CSV has no '{TRACK_NAME_COLUMN}' column, every row will be skipped");
    }

    let mut playlist = Playlist::new();
    for (row_num, record) in reader.records().enumerate() {
        let row_num = row_num + 1;
        let record = record?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

        let track_name = field(track_idx);
        if track_name.is_empty() {
            warn!("Row {row_num}: No track name found, skipping");
            playlist.skip(row_num, "No track name found");
            continue;
        }

        let artist_name = field(artist_idx);
        let entry = RawEntry::new(Some(artist_name), track_name);
        playlist.push(normalize_entry(&entry));
    }

    debug!(
        "Parsed {} songs from CSV ({} skipped)",
        playlist.len(),
        playlist.diagnostics().len()
    );
    Ok(playlist)
}

/// Parse a plain text list. Blank lines and `#` comments are ignored.
pub fn parse_text(contents: &str) -> Playlist {
    let mut playlist = Playlist::new();
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        playlist.push(normalize_entry(&RawEntry::from_line(line)));
    }
    debug!("Parsed {} songs from text list", playlist.len());
    playlist
}

/// Prompt for songs until an empty line, `q`, or end of input
pub async fn read_interactive<R, W>(input: R, output: &mut W) -> Result<Playlist>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(
            "\nInteractive Playlist Creator\n\
             ========================================\n\
             Enter songs in format 'Artist - Title' (or just 'Title')\n\
             Press Enter with empty line to finish, or 'q' to quit\n"
                .as_bytes(),
        )
        .await?;

    let mut playlist = Playlist::new();
    let mut lines = input.lines();
    loop {
        output
            .write_all(format!("Song {}: ", playlist.len() + 1).as_bytes())
            .await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") {
            break;
        }
        playlist.push(normalize_entry(&RawEntry::from_line(line)));
    }
    Ok(playlist)
}
