use std::fmt;

use clap::ValueEnum;

use crate::playlist::Song;

/// Directive prefix telling yt-dlp to download the top search hit
pub const SEARCH_PREFIX: &str = "ytsearch1:";

/// Download quality. Drives both the search suffix and the audio quality flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Quality {
    /// Best audio, `official audio` searches
    #[default]
    Best,
    /// Smaller files, `official` searches
    Good,
    /// Plain searches, lowest audio quality
    Fast,
}

impl Quality {
    /// CLI name
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Best => "best",
            Quality::Good => "good",
            Quality::Fast => "fast",
        }
    }

    /// Extra words appended to each query
    pub fn search_suffix(self) -> Option<&'static str> {
        match self {
            Quality::Best => Some("official audio"),
            Quality::Fast => None,
            Quality::Good => Some("official"),
        }
    }

    /// Value for yt-dlp's `--audio-quality` (0 is best, 10 is worst)
    pub fn audio_quality(self) -> u8 {
        match self {
            Quality::Best => 0,
            Quality::Good => 2,
            Quality::Fast => 5,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio container yt-dlp converts downloads into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AudioFormat {
    /// MPEG layer 3
    #[default]
    Mp3,
    /// Lossless
    Flac,
    /// AAC in an MP4 container
    M4a,
    /// Ogg Vorbis
    Ogg,
}

impl AudioFormat {
    /// File extension and yt-dlp `--audio-format` value
    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::M4a => "m4a",
            AudioFormat::Ogg => "ogg",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search text with the quality suffix appended
pub fn query_for(search: &str, quality: Quality) -> String {
    match quality.search_suffix() {
        Some(suffix) => format!("{search} {suffix}"),
        None => search.to_string(),
    }
}

/// `ytsearch1:` directive for one search
pub fn directive_for(search: &str, quality: Quality) -> String {
    format!("{SEARCH_PREFIX}{}", query_for(search, quality))
}

/// One search directive per song, in playlist order
pub fn generate_directives(songs: &[Song], quality: Quality) -> Vec<String> {
    songs
        .iter()
        .map(|song| directive_for(song.search(), quality))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_per_quality() {
        assert_eq!(
            directive_for("Drake One Dance", Quality::Best),
            "ytsearch1:Drake One Dance official audio"
        );
        assert_eq!(
            directive_for("Drake One Dance", Quality::Good),
            "ytsearch1:Drake One Dance official"
        );
        assert_eq!(
            directive_for("Drake One Dance", Quality::Fast),
            "ytsearch1:Drake One Dance"
        );
    }

    #[test]
    fn audio_quality_flags() {
        assert_eq!(Quality::Best.audio_quality(), 0);
        assert_eq!(Quality::Good.audio_quality(), 2);
        assert_eq!(Quality::Fast.audio_quality(), 5);
    }
}
