/// Query-list file consumed by `yt-dlp --batch-file`
pub mod batch_file;
/// JSON snapshot of the normalized playlist
pub mod playlist_info;
/// Generated download script
pub mod script;
/// Search directive generation and quality settings
pub mod search;

use std::path::{Path, PathBuf};

use log::debug;

use crate::playlist::errors::{Error, Result};

pub use search::{AudioFormat, Quality};

// Writes `contents` to `dir/name`, any failure is fatal for the run
pub(crate) async fn write_output(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    debug!("Wrote {} bytes to {path:?}", contents.len());
    Ok(path)
}
