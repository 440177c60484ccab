use std::path::{Path, PathBuf};

use log::info;

use crate::output::write_output;
use crate::playlist::errors::Result;

/// File name of the query list
pub const BATCH_FILE_NAME: &str = "youtube_downloads.txt";

/// Newline terminated list of directives
pub fn render_batch(directives: &[String]) -> String {
    directives.iter().fold(String::new(), |mut acc, directive| {
        acc.push_str(directive);
        acc.push('\n');
        acc
    })
}

/// Write the query list into `dir`
pub async fn write_batch_file(dir: &Path, directives: &[String]) -> Result<PathBuf> {
    let path = write_output(dir, BATCH_FILE_NAME, &render_batch(directives)).await?;
    info!("Created {} with {} songs", path.display(), directives.len());
    Ok(path)
}
