use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::info;
use playlist2yt::output::{AudioFormat, Quality};
use playlist2yt::playlist::{
    SourceReader,
    errors::{Error, Result},
};

use crate::converter;

const INPUT_HINTS: &str = "\nFor CSV files: Use exportify.net to export your Spotify playlist\n\
                           For TXT files: Create a text file with 'Artist - Song' on each line";

#[derive(Parser)]
#[command(name = "playlist2yt")]
#[command(
    version,
    about = "Convert a playlist export into YouTube searches for yt-dlp",
    long_about = None,
    after_help = "Examples:\n  \
        playlist2yt playlist.csv\n  \
        playlist2yt songs.txt --format flac\n  \
        playlist2yt --interactive\n  \
        playlist2yt playlist.csv --quality fast --output ./Downloads"
)]
struct Cli {
    /// Input file (CSV or TXT)
    input_file: Option<PathBuf>,

    /// Interactive mode - enter songs manually
    #[arg(short, long)]
    interactive: bool,

    /// Output directory for downloaded music [default: ./Music]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Audio format
    #[arg(short, long, value_enum, default_value_t = AudioFormat::Mp3)]
    format: AudioFormat,

    /// Download quality
    #[arg(short, long, value_enum, default_value_t = Quality::Best)]
    quality: Quality,

    /// Directory where the batch file, playlist info and script are written
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Skip dependency checking
    #[arg(long)]
    no_deps_check: bool,

    /// Only create batch file, don't create download script
    #[arg(long)]
    batch_only: bool,
}

impl Cli {
    fn source(&self) -> Option<SourceReader> {
        if self.interactive {
            info!("Interactive mode selected");
            return Some(SourceReader::Interactive);
        }
        self.input_file.clone().map(SourceReader::from_path)
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(source) = cli.source() else {
        Cli::command().print_help()?;
        println!("{INPUT_HINTS}");
        return Err(Error::ConfigurationError(
            "Either an input file or --interactive is required".into(),
        ));
    };

    let config = converter::ConfigBuilder::new()
        .source(source)
        .quality(cli.quality)
        .format(cli.format)
        .output_dir(cli.output)
        .dest_dir(cli.dest)
        .batch_only(cli.batch_only)
        .check_deps(!cli.no_deps_check)
        .build()?;

    converter::Converter::new(config).convert().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn interactive_wins_over_input_file() {
        let cli = Cli::parse_from(["playlist2yt", "songs.txt", "-i"]);
        assert_eq!(cli.source(), Some(SourceReader::Interactive));
    }

    #[test]
    fn parses_format_and_quality() {
        let cli = Cli::parse_from(["playlist2yt", "list.csv", "-f", "flac", "-q", "fast"]);
        assert_eq!(cli.format, AudioFormat::Flac);
        assert_eq!(cli.quality, Quality::Fast);
        assert_eq!(cli.source(), Some(SourceReader::Csv(PathBuf::from("list.csv"))));
    }

    #[test]
    fn no_input_means_no_source() {
        let cli = Cli::parse_from(["playlist2yt"]);
        assert_eq!(cli.source(), None);
    }
}
