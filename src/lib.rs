//! Playlist2yt - Turn playlist exports into YouTube downloads
//!
//! This library normalizes "Artist - Title" entries from CSV exports, text lists
//! or interactive input into YouTube search queries, and writes the batch file,
//! playlist metadata and download script that drive `yt-dlp`.

/// Presence checks for external tools
pub mod deps;
/// Batch file, playlist metadata and download script generation
pub mod output;
/// Playlist entities, normalization and input adapters
pub mod playlist;
