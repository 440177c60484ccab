use playlist2yt::playlist::RawEntry;
use playlist2yt::playlist::entities::UNKNOWN_ARTIST;
use playlist2yt::playlist::normalizer::{
    clean_artist, clean_title, normalize_entry, search_query, should_add_artist,
};

#[test]
fn test_clean_title_removes_featuring() {
    assert_eq!(clean_title("Song (feat. Drake)"), "Song");
    assert_eq!(clean_title("Song (ft. Drake) Part 2"), "Song Part 2");
    assert_eq!(clean_title("Song (with Kygo)"), "Song");
}

#[test]
fn test_clean_title_removes_brackets() {
    assert_eq!(clean_title("Song [Explicit]"), "Song");
    assert_eq!(clean_title("[2019] Song   [Live]"), "Song");
}

#[test]
fn test_clean_title_removes_remix_version_edit_parentheticals() {
    assert_eq!(clean_title("Levels (Skrillex Remix)"), "Levels");
    assert_eq!(clean_title("Hurt (Acoustic Version)"), "Hurt");
    assert_eq!(clean_title("Titanium (Radio EDIT)"), "Titanium");
    assert_eq!(
        clean_title("One More Time (feat. X) [Explicit] (Club Remix)"),
        "One More Time"
    );
}

#[test]
fn test_clean_title_is_idempotent() {
    let titles = [
        "Song (feat. Drake)",
        "Song [Explicit]",
        "  Many   spaces\there ",
        "A (Live) (Remix) B",
        "Plain Title",
        "(Remix)",
        "",
        "Song (with\nFriends)",
        "Titanium (Radio Ed[x]it)",
    ];
    for title in titles {
        let once = clean_title(title);
        assert_eq!(clean_title(&once), once, "not idempotent for {title:?}");
    }
}

#[test]
fn test_clean_artist_keeps_primary_artist() {
    assert_eq!(clean_artist("Drake, Wizkid, Kyla"), "Drake");
    assert_eq!(clean_artist("Macklemore & Ryan Lewis"), "Macklemore");
    assert_eq!(clean_artist("Major Lazer Feat. MØ"), "Major Lazer");
    assert_eq!(clean_artist("Daft Punk"), "Daft Punk");
}

#[test]
fn test_should_add_artist() {
    assert!(!should_add_artist("Drake", "One Dance by Drake"));
    assert!(should_add_artist("Drake", "One Dance"));
    assert!(!should_add_artist(UNKNOWN_ARTIST, "Anything"));
    assert!(!should_add_artist("", "Anything"));
}

#[test]
fn test_search_query_assembly() {
    assert_eq!(
        search_query("The Weeknd", "Blinding Lights"),
        "The Weeknd Blinding Lights"
    );
    assert_eq!(search_query("Adele", "Adele - Hello"), "Adele - Hello");
}

#[test]
fn test_normalize_delimited_line() {
    let song = normalize_entry(&RawEntry::from_line("Pink Floyd - Comfortably Numb"));
    assert_eq!(song.artist(), "Pink Floyd");
    assert_eq!(song.title(), "Comfortably Numb");
    assert_eq!(song.search(), "Pink Floyd Comfortably Numb");
}

#[test]
fn test_normalize_bare_title() {
    let entry = RawEntry::from_line("Bohemian Rhapsody");
    assert_eq!(entry.artist, None);

    let song = normalize_entry(&entry);
    assert_eq!(song.title(), "Bohemian Rhapsody");
    assert_eq!(song.artist(), UNKNOWN_ARTIST);
    assert!(song.has_unknown_artist());
    assert_eq!(song.search(), "Bohemian Rhapsody");
}

#[test]
fn test_normalize_noise_only_title_keeps_entry() {
    let song = normalize_entry(&RawEntry::new(Some("Avicii"), "(Remix)"));
    assert_eq!(song.title(), "");
    assert_eq!(song.artist(), "Avicii");
    assert_eq!(song.search(), "");
}

#[test]
fn test_normalize_artist_that_cleans_to_empty() {
    let song = normalize_entry(&RawEntry::new(Some("& Friends"), "Song"));
    assert_eq!(song.artist(), UNKNOWN_ARTIST);
    assert_eq!(song.search(), "Song");
}
