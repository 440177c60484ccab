use std::io::ErrorKind;

use log::{debug, info, warn};

use crate::playlist::errors::{Error, Result};

/// External program the generated script relies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Binary looked up on PATH
    pub name: &'static str,
    /// Argument that makes it print its version and exit
    pub version_arg: &'static str,
    /// Manual install instructions
    pub install_hint: &'static str,
}

/// The downloader
pub const YT_DLP: Tool = Tool {
    name: "yt-dlp",
    version_arg: "--version",
    install_hint: "  Arch: sudo pacman -S yt-dlp\n  Other: pip install yt-dlp",
};

/// Needed by yt-dlp for audio extraction
pub const FFMPEG: Tool = Tool {
    name: "ffmpeg",
    version_arg: "-version",
    install_hint: "  Arch: sudo pacman -S ffmpeg\n  Ubuntu/Debian: sudo apt install ffmpeg",
};

/// `true` if the tool runs and exits successfully. A binary missing from PATH is `false`.
pub async fn is_available(tool: &Tool) -> Result<bool> {
    let output = tokio::process::Command::new(tool.name)
        .arg(tool.version_arg)
        .output()
        .await;

    match output {
        Ok(output) => Ok(output.status.success()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

/// yt-dlp is required, ffmpeg only produces a warning
pub async fn check_dependencies() -> Result<()> {
    info!("Checking dependencies ...");
    let (yt_dlp, ffmpeg) = tokio::join!(is_available(&YT_DLP), is_available(&FFMPEG));

    if yt_dlp? {
        debug!("{} is installed", YT_DLP.name);
    } else {
        return Err(Error::MissingDependency {
            tool: YT_DLP.name,
            hint: YT_DLP.install_hint.to_string(),
        });
    }

    if ffmpeg? {
        debug!("{} is available", FFMPEG.name);
    } else {
        warn!(
            "{} not found, audio conversion will fail. Please install manually:\n{}",
            FFMPEG.name, FFMPEG.install_hint
        );
    }
    Ok(())
}
