use serde::Serialize;

/// Artist placeholder used when an entry carries no artist information
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One raw line or row as read from a source, before any cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Artist part, absent for bare titles
    pub artist: Option<String>,
    /// Title part as written in the source
    pub title: String,
}

impl RawEntry {
    /// Build an entry from borrowed parts
    pub fn new(artist: Option<&str>, title: &str) -> Self {
        RawEntry {
            artist: artist.map(str::to_string),
            title: title.to_string(),
        }
    }

    /// Split an `Artist - Title` line on the first `" - "`.
    /// Lines without the separator are treated as a bare title.
    pub fn from_line(line: &str) -> Self {
        match line.split_once(" - ") {
            Some((artist, title)) => RawEntry::new(Some(artist.trim()), title.trim()),
            None => RawEntry::new(None, line),
        }
    }
}

/// A normalized track, ready to be turned into a search directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    artist: String,
    title: String,
    search: String,
}

impl Song {
    pub(crate) fn new(artist: String, title: String, search: String) -> Self {
        Song {
            artist,
            title,
            search,
        }
    }

    /// Cleaned primary artist, or the placeholder
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Cleaned title, may be empty
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Final search query, empty when the title cleaned to nothing
    pub fn search(&self) -> &str {
        &self.search
    }

    /// `true` when the artist is the placeholder rather than a real name
    pub fn has_unknown_artist(&self) -> bool {
        self.artist == UNKNOWN_ARTIST
    }
}

/// A source entry that was left out of the playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based data row
    pub line: usize,
    /// Why it was skipped
    pub reason: String,
}

/// Ordered songs plus whatever was skipped while reading them
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Playlist {
    songs: Vec<Song>,
    diagnostics: Vec<Diagnostic>,
}

impl Playlist {
    /// Empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song, keeping input order
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Record an entry that was left out
    pub fn skip(&mut self, line: usize, reason: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            line,
            reason: reason.into(),
        });
    }

    /// Songs in input order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Skipped entries
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// `true` when no song was read
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_line_splits_on_first_separator() {
        let entry = RawEntry::from_line("Simon & Garfunkel - The Boxer - Live");
        assert_eq!(entry.artist.as_deref(), Some("Simon & Garfunkel"));
        assert_eq!(entry.title, "The Boxer - Live");
    }

    #[test]
    fn from_line_without_separator_is_title_only() {
        let entry = RawEntry::from_line("Hey-Ya");
        assert_eq!(entry.artist, None);
        assert_eq!(entry.title, "Hey-Ya");
    }

    #[test]
    fn playlist_keeps_insertion_order_and_duplicates() {
        let mut playlist = Playlist::new();
        let song = Song::new("A".into(), "B".into(), "A B".into());
        playlist.push(song.clone());
        playlist.push(Song::new("C".into(), "D".into(), "C D".into()));
        playlist.push(song.clone());
        playlist.skip(4, "No track name found");

        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.songs()[0], song);
        assert_eq!(playlist.songs()[2], song);
        assert_eq!(playlist.diagnostics()[0].line, 4);
    }
}
