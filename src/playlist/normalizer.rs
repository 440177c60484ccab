//! Turns raw `Artist - Title` data into clean YouTube search strings.
//!
//! Cleanup is driven by ordered lists of regex rules. Each rule replaces every
//! match of its pattern, and rules run in the order they are listed.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::playlist::entities::{RawEntry, Song, UNKNOWN_ARTIST};

/// A single cleanup step: every match of `pattern` is replaced with `replacement`
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("cleanup rule pattern must compile"),
            replacement,
        }
    }

    /// Apply this rule to `input`
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

/// Title noise, in application order: anything in square brackets, whitespace
/// collapsing, featured artists, remix/version/edit parentheticals, then a final
/// collapse of the gaps the removals leave behind.
pub static TITLE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?s)\[.*?\]", ""),
        Rule::new(r"\s+", " "),
        Rule::new(r"(?is)\(feat\..*?\)", ""),
        Rule::new(r"(?is)\(ft\..*?\)", ""),
        Rule::new(r"(?is)\(with.*?\)", ""),
        Rule::new(r"(?is)\(.*?remix.*?\)", ""),
        Rule::new(r"(?is)\(.*?version.*?\)", ""),
        Rule::new(r"(?is)\(.*?edit.*?\)", ""),
        Rule::new(r"\s+", " "),
    ]
});

/// Artist cleanup: keep only the primary artist.
pub static ARTIST_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"\s*[,&]\s*.*$", ""),
        Rule::new(r"(?i)\s*feat\..*$", ""),
        Rule::new(r"(?i)\s*ft\..*$", ""),
    ]
});

/// Run `rules` over `input` in order
pub fn apply_rules(rules: &[Rule], input: &str) -> String {
    rules
        .iter()
        .fold(input.to_string(), |acc, rule| rule.apply(&acc))
}

/// Strip featuring credits, remix/version/edit tags and bracketed noise from a title
pub fn clean_title(title: &str) -> String {
    apply_rules(&TITLE_RULES, title).trim().to_string()
}

/// Reduce an artist credit to its primary artist
pub fn clean_artist(artist: &str) -> String {
    apply_rules(&ARTIST_RULES, artist).trim().to_string()
}

/// Whether prefixing `artist` to the query adds anything the title doesn't already carry
pub fn should_add_artist(artist: &str, title: &str) -> bool {
    if artist.is_empty() || artist == UNKNOWN_ARTIST {
        return false;
    }

    let artist_lower = artist.to_lowercase();
    let title_lower = title.to_lowercase();

    if title_lower.contains(&artist_lower) {
        return false;
    }

    // A whitespace-only artist has no first word; nothing to duplicate then
    match artist_lower.split_whitespace().next() {
        Some(first_word) if first_word.chars().count() > 2 => !title_lower.contains(first_word),
        Some(_) => true,
        None => false,
    }
}

/// Build the search string for an already cleaned artist/title pair.
/// An empty title always yields an empty search string.
pub fn search_query(artist: &str, title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    if should_add_artist(artist, title) {
        format!("{artist} {title}")
    } else {
        title.to_string()
    }
}

/// Normalize one raw entry into a [`Song`]
pub fn normalize_entry(entry: &RawEntry) -> Song {
    let title = clean_title(&entry.title);
    let artist = entry
        .artist
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(clean_artist)
        .unwrap_or_default();

    let search = search_query(&artist, &title);
    if search.is_empty() {
        debug!("Entry {entry:?} produced an empty search query");
    }

    let artist = if artist.is_empty() {
        UNKNOWN_ARTIST.to_string()
    } else {
        artist
    };
    Song::new(artist, title, search)
}
