//! Integration tests for hymnal-chords
//!
//! Parses annotated lyric lines and song documents, transposes them and
//! renders them through the public API.

use hymnal_chords::{
    parse_line, render_song, render_transposed, transpose_chord, transpose_line, ChordWord,
    Format, Song,
};
use pretty_assertions::assert_eq;

const SAILING: &str = r#"---
title: Sailing Home
number: 42
key: G
---

Un[G]til [Am - C]we are [D]sailing [G]hom[C]e. [G]

Safe [D]in the [G]harbor
"#;

#[test]
fn test_parse_empty_line() {
    assert_eq!(parse_line("").words(), &[ChordWord::new("", None)]);
}

#[test]
fn test_parse_plain_words() {
    let line = parse_line("a b c");
    assert_eq!(line.words().len(), 3);
    assert!(line.words().iter().all(|w| w.chords.is_none()));
}

#[test]
fn test_parse_empty_bracket() {
    let line = parse_line("[]a");
    assert_eq!(line.words(), &[ChordWord::new("a", Some(vec![]))]);
    assert_eq!(line.words()[0].chord_string().as_deref(), Some(" "));
}

#[test]
fn test_parse_annotated_line() {
    let line = parse_line("Un[G]til [Am - C]we are [D]sailing [G]hom[C]e. [G]");
    let words: Vec<&str> = line.words().iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["Until", "we", "are", "sailing", "home.", ""]);

    let chords: Vec<Vec<String>> = line
        .words()
        .iter()
        .map(|w| w.chords.clone().expect("every word in a chord line has chords present"))
        .collect();
    let expected: Vec<Vec<String>> = vec![
        vec!["G".into()],
        vec!["Am - C".into()],
        vec![],
        vec!["D".into()],
        vec!["G".into(), "C".into()],
        vec!["G".into()],
    ];
    assert_eq!(chords, expected);
}

#[test]
fn test_transpose_examples() {
    assert_eq!(transpose_chord("B", 1), "C");
    assert_eq!(transpose_chord("C", -1), "B");
    assert_eq!(transpose_chord("Am - C", 1), "A#m - C#");
    assert_eq!(transpose_chord("---", 7), "---");
}

#[test]
fn test_transpose_line_down() {
    let line = transpose_line("Un[G]til [Am - C]we are", -1);
    let chords: Vec<Option<String>> = line.words().iter().map(|w| w.chord_string()).collect();
    assert_eq!(
        chords,
        vec![
            Some("Gb".to_string()),
            Some("Abm - B".to_string()),
            Some(" ".to_string()),
        ]
    );
}

#[test]
fn test_song_sheet() {
    let song = Song::parse(SAILING).unwrap();
    assert_eq!(song.lines().len(), 3);
    let out = render_song(&song, Format::Sheet).unwrap();
    let expected = "\
42. Sailing Home (key of G)

G     Am - C     D       G C   G
Until we     are sailing home.

     D      G
Safe in the harbor
";
    assert_eq!(out, expected);
}

#[test]
fn test_song_transposed_annotated() {
    let out = render_transposed(SAILING, 2, Format::Annotated).unwrap();
    assert_eq!(
        out,
        "42. Sailing Home (key of A)\n\n\
         [A]Until [Bm - D]we are [E]sailing [A][D]home. [A]\n\
         \n\
         Safe [E]in the [A]harbor\n"
    );
}

#[test]
fn test_song_default_transpose_applied() {
    let source = "---\nkey: E\ntranspose: -4\n---\n[E]Holy, [B7]holy";
    let out = render_transposed(source, 0, Format::Annotated).unwrap();
    assert_eq!(out, "[C]Holy, [G7]holy\n");
}

#[test]
fn test_song_json_keeps_absent_and_empty_distinct() {
    let song = Song::parse("plain words\n[]blank row").unwrap();
    let json = render_song(&song, Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["lines"][0]["words"][0]["chords"].is_null());
    assert_eq!(value["lines"][1]["words"][0]["chords"], serde_json::json!([]));
}
