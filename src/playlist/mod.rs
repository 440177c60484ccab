/// Song, playlist and raw entry types
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Title/artist cleanup and search query assembly
pub mod normalizer;
/// CSV, text and interactive input adapters
pub mod sources;

pub use entities::{Playlist, RawEntry, Song};
pub use sources::SourceReader;
