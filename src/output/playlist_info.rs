use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use serde::Serialize;

use crate::output::write_output;
use crate::playlist::{Song, errors::Result};

// Same layout as date(1): weekday, month, day, time, zone, year
const CREATED_AT_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// File name of the JSON snapshot
pub const PLAYLIST_INFO_FILE_NAME: &str = "playlist_info.json";

#[derive(Serialize, Debug)]
struct PlaylistInfo<'a> {
    total_songs: usize,
    songs: &'a [Song],
    created_at: String,
}

/// Pretty printed JSON with the song count, songs and a creation timestamp
pub fn render_playlist_info(songs: &[Song], created_at: &str) -> Result<String> {
    let info = PlaylistInfo {
        total_songs: songs.len(),
        songs,
        created_at: created_at.to_string(),
    };
    Ok(serde_json::to_string_pretty(&info)?)
}

/// Write the snapshot into `dir`, stamped with the local time and timezone
pub async fn write_playlist_info(dir: &Path, songs: &[Song]) -> Result<PathBuf> {
    let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();
    let contents = render_playlist_info(songs, &created_at)?;
    let path = write_output(dir, PLAYLIST_INFO_FILE_NAME, &contents).await?;
    info!("Saved playlist info to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_carries_timezone() {
        let stamp = chrono::FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 9, 5, 0)
            .unwrap()
            .format(CREATED_AT_FORMAT)
            .to_string();
        assert_eq!(stamp, "Fri Oct 16 09:05:00 +02:00 2026");
    }
}
