use std::path::{Path, PathBuf};

use log::info;

use crate::output::{AudioFormat, Quality, write_output};
use crate::playlist::errors::{Error, Result};

/// File name of the generated script
pub const SCRIPT_FILE_NAME: &str = "download_spotify_music.sh";

/// Everything the download script needs to know
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Query list passed to `--batch-file`
    pub batch_file: PathBuf,
    /// Where yt-dlp puts the audio
    pub output_dir: PathBuf,
    /// Target audio format
    pub format: AudioFormat,
    /// Drives `--audio-quality`
    pub quality: Quality,
}

// Escape for use inside a double quoted shell string
fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Bash script driving yt-dlp over the batch file
pub fn render_script(options: &ScriptOptions) -> String {
    let output_dir = shell_quote(&options.output_dir.to_string_lossy());
    let batch_file = shell_quote(&options.batch_file.to_string_lossy());
    let format = options.format;
    let quality = options.quality;
    let audio_quality = quality.audio_quality();

    format!(
        r#"#!/bin/bash

# Auto-generated YouTube music download script
# Downloads songs from a playlist export

OUTPUT_DIR={output_dir}
BATCH_FILE={batch_file}

# Colors
RED='\033[0;31m'
GREEN='\033[0;32m'
YELLOW='\033[1;33m'
BLUE='\033[0;34m'
NC='\033[0m' # No Color

echo -e "${{GREEN}}🎵 Starting batch music download...${{NC}}"
echo -e "${{BLUE}}Output directory: $OUTPUT_DIR${{NC}}"
echo -e "${{BLUE}}Batch file: $BATCH_FILE${{NC}}"
echo -e "${{BLUE}}Audio format: {format}${{NC}}"
echo -e "${{BLUE}}Quality: {quality}${{NC}}"

# Create output directory
mkdir -p "$OUTPUT_DIR"

# Count total songs
TOTAL_SONGS=$(wc -l < "$BATCH_FILE")
echo -e "${{YELLOW}}Total songs to download: $TOTAL_SONGS${{NC}}"

# Download all songs with yt-dlp
yt-dlp \
    --extract-audio \
    --audio-format {format} \
    --audio-quality {audio_quality} \
    --output "$OUTPUT_DIR/%(uploader)s - %(title)s.%(ext)s" \
    --embed-metadata \
    --add-metadata \
    --embed-thumbnail \
    --batch-file "$BATCH_FILE" \
    --ignore-errors \
    --no-overwrites \
    --continue \
    --retries 3 \
    --fragment-retries 3 \
    --progress \
    --console-title

echo -e "${{GREEN}}✅ Batch download completed!${{NC}}"
echo -e "${{YELLOW}}📁 Check $OUTPUT_DIR for your downloaded music${{NC}}"

# Show download summary
DOWNLOADED=$(find "$OUTPUT_DIR" -name "*.{format}" | wc -l)
echo -e "${{BLUE}}Downloaded: $DOWNLOADED/$TOTAL_SONGS songs${{NC}}"

if [ $DOWNLOADED -lt $TOTAL_SONGS ]; then
    echo -e "${{YELLOW}}⚠ Some songs may have failed to download. Check the log above.${{NC}}"
fi
"#
    )
}

/// Write the script into `dir` and make it executable
pub async fn write_script(dir: &Path, options: &ScriptOptions) -> Result<PathBuf> {
    let path = write_output(dir, SCRIPT_FILE_NAME, &render_script(options)).await?;
    make_executable(&path).await?;
    info!("Created executable script: {}", path.display());
    Ok(path)
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ScriptOptions {
        ScriptOptions {
            batch_file: PathBuf::from("./youtube_downloads.txt"),
            output_dir: PathBuf::from("./Music"),
            format: AudioFormat::Flac,
            quality: Quality::Good,
        }
    }

    #[test]
    fn script_carries_options() {
        let script = render_script(&options());
        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("OUTPUT_DIR=\"./Music\"\n"));
        assert!(script.contains("BATCH_FILE=\"./youtube_downloads.txt\"\n"));
        assert!(script.contains("--audio-format flac \\\n"));
        assert!(script.contains("--audio-quality 2 \\\n"));
        assert!(script.contains("-name \"*.flac\""));
        assert!(script.contains("echo -e \"${GREEN}"));
    }

    #[test]
    fn output_dir_is_escaped() {
        let mut opts = options();
        opts.output_dir = PathBuf::from("My \"$HOME\" Music");
        let script = render_script(&opts);
        assert!(script.contains(r#"OUTPUT_DIR="My \"\$HOME\" Music""#));
    }
}
