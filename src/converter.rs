use std::path::PathBuf;

use log::{debug, info, warn};
use playlist2yt::deps;
use playlist2yt::output::{
    AudioFormat, Quality,
    batch_file::write_batch_file,
    playlist_info::write_playlist_info,
    script::{ScriptOptions, write_script},
    search::generate_directives,
};
use playlist2yt::playlist::{
    Playlist, Song, SourceReader,
    errors::{Error, Result},
};

const MUSIC_DIR_ENV: &str = "PLAYLIST2YT_MUSIC_DIR";
const DEFAULT_MUSIC_DIR: &str = "./Music";
const PREVIEW_LEN: usize = 5;

// Configuration for the Converter struct
pub struct Config {
    pub source: SourceReader,
    pub quality: Quality,
    pub format: AudioFormat,
    pub output_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub batch_only: bool,
    pub check_deps: bool,
}

pub struct ConfigBuilder {
    source: Option<SourceReader>,
    quality: Option<Quality>,
    format: Option<AudioFormat>,
    output_dir: Option<PathBuf>,
    dest_dir: Option<PathBuf>,
    batch_only: bool,
    check_deps: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            quality: None,
            format: None,
            output_dir: None, // Falls back to $PLAYLIST2YT_MUSIC_DIR, then ./Music
            dest_dir: None,
            batch_only: false,
            check_deps: true,
        }
    }

    pub fn source(mut self, source: SourceReader) -> Self {
        self.source = Some(source);
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn format(mut self, format: AudioFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn dest_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dest_dir = dir;
        self
    }

    pub fn batch_only(mut self, batch_only: bool) -> Self {
        self.batch_only = batch_only;
        self
    }

    pub fn check_deps(mut self, check_deps: bool) -> Self {
        self.check_deps = check_deps;
        self
    }

    pub fn build(self) -> Result<Config> {
        let source = self.source.ok_or_else(|| {
            Error::ConfigurationError("No input file given and interactive mode is off".into())
        })?;
        let output_dir = resolve_output_dir(self.output_dir, std::env::var(MUSIC_DIR_ENV).ok());
        let dest_dir = self.dest_dir.unwrap_or_else(|| PathBuf::from("."));
        if !dest_dir.is_dir() {
            return Err(Error::ConfigurationError(format!(
                "Destination {} is not a directory",
                dest_dir.display()
            )));
        }
        Ok(Config {
            source,
            quality: self.quality.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            output_dir,
            dest_dir,
            batch_only: self.batch_only,
            check_deps: self.check_deps,
        })
    }
}

// Explicit directory, then the environment, then ./Music
fn resolve_output_dir(explicit: Option<PathBuf>, from_env: Option<String>) -> PathBuf {
    explicit
        .or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MUSIC_DIR))
}

// 1-based playlist positions of songs whose search query cleaned down to nothing
fn empty_searches(playlist: &Playlist) -> Vec<(usize, &Song)> {
    playlist
        .songs()
        .iter()
        .enumerate()
        .filter(|(_, song)| song.search().is_empty())
        .map(|(i, song)| (i + 1, song))
        .collect()
}

/// Paths of everything a run produced
#[derive(Debug)]
pub struct Outputs {
    pub batch_file: PathBuf,
    pub playlist_info: PathBuf,
    pub script: Option<PathBuf>,
}

// Reads the playlist, then writes the batch file, playlist info and download script
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    pub async fn convert(&self) -> Result<Outputs> {
        let config = &self.config;
        if config.check_deps {
            deps::check_dependencies().await?;
        } else {
            debug!("Skipping dependency check");
        }

        let playlist = config.source.read().await?;
        if !playlist.diagnostics().is_empty() {
            warn!("Skipped {} entries", playlist.diagnostics().len());
        }
        if playlist.is_empty() {
            return Err(Error::EmptyPlaylist);
        }

        println!("\n✓ Found {} songs", playlist.len());
        print_preview(&playlist);

        for (position, song) in empty_searches(&playlist) {
            warn!(
                "Song {position} (artist: {}) has an empty search query after cleanup, \
                 its directive will match an arbitrary video",
                song.artist()
            );
        }

        info!(
            "Generating YouTube search URLs (quality: {}) ...",
            config.quality
        );
        let directives = generate_directives(playlist.songs(), config.quality);

        let batch_file = write_batch_file(&config.dest_dir, &directives).await?;
        let playlist_info = write_playlist_info(&config.dest_dir, playlist.songs()).await?;

        let script = if config.batch_only {
            None
        } else {
            let options = ScriptOptions {
                batch_file: batch_file.clone(),
                output_dir: config.output_dir.clone(),
                format: config.format,
                quality: config.quality,
            };
            Some(write_script(&config.dest_dir, &options).await?)
        };

        let outputs = Outputs {
            batch_file,
            playlist_info,
            script,
        };
        self.print_instructions(&outputs, playlist.len());
        Ok(outputs)
    }

    fn print_instructions(&self, outputs: &Outputs, song_count: usize) {
        let config = &self.config;
        println!(
            "\n📝 Playlist info saved to {}",
            outputs.playlist_info.display()
        );
        match &outputs.script {
            Some(script) => {
                println!("\n{}", "=".repeat(50));
                println!("🚀 Setup complete! Now run:");
                println!("  {}", script.display());
                println!("\n🛠 Or manually with yt-dlp:");
                println!(
                    "  yt-dlp -x --audio-format {} -a {}",
                    config.format,
                    outputs.batch_file.display()
                );
                println!(
                    "\n📊 This will download {song_count} songs as {} files",
                    config.format.as_str().to_uppercase()
                );
                println!("📁 Output directory: {}", config.output_dir.display());
            }
            None => {
                println!("\n📄 Batch file created: {}", outputs.batch_file.display());
                println!("Run without --batch-only to also create the download script");
            }
        }
    }
}

fn print_preview(playlist: &Playlist) {
    println!("\n🎵 Preview of songs to download:");
    for (i, song) in playlist.songs().iter().take(PREVIEW_LEN).enumerate() {
        if song.has_unknown_artist() {
            println!("  {}. {}", i + 1, song.title());
        } else {
            println!("  {}. {} - {}", i + 1, song.artist(), song.title());
        }
    }
    if playlist.len() > PREVIEW_LEN {
        println!("  ... and {} more", playlist.len() - PREVIEW_LEN);
    }
}
