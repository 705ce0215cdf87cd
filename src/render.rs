//! Renderers for parsed lines and songs.

use std::fmt;
use std::str::FromStr;

use crate::chord_line::{ChordLine, ChordWord};
use crate::error::ChordError;
use crate::song::Song;

/// Output formats for [`render_song`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Chord row above each lyric row
    #[default]
    Sheet,
    /// Bracket-annotated lines, the input syntax
    Annotated,
    Json,
}

impl FromStr for Format {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sheet" => Ok(Format::Sheet),
            "annotated" => Ok(Format::Annotated),
            "json" => Ok(Format::Json),
            other => Err(ChordError::InvalidArgument(format!("unknown output format: {}", other))),
        }
    }
}

fn brackets(chords: &[String]) -> String {
    if chords.is_empty() {
        return "[]".to_string();
    }
    chords.iter().map(|c| format!("[{}]", c)).collect()
}

/// Render a line back to bracket syntax, chords in front of their word.
///
/// ```
/// use hymnal_chords::{to_annotated, ChordLine};
///
/// let line = ChordLine::parse("Un[G]til [Am - C]we are [G]hom[C]e. [G]");
/// assert_eq!(to_annotated(&line), "[G]Until [Am - C]we are [G][C]home. [G]");
/// ```
pub fn to_annotated(line: &ChordLine) -> String {
    let any_brackets = line
        .words()
        .iter()
        .any(|w| match &w.chords {
            Some(chords) => !chords.is_empty() || w.word.is_empty(),
            None => false,
        });
    // A line with chords present but none written still needs one bracket
    let mut mark_first = line.has_chords() && !any_brackets;

    let parts: Vec<String> = line
        .words()
        .iter()
        .map(|w| match &w.chords {
            Some(chords) if !chords.is_empty() || w.word.is_empty() || mark_first => {
                mark_first = false;
                format!("{}{}", brackets(chords), w.word)
            }
            _ => w.word.clone(),
        })
        .collect();
    parts.join(" ")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(row: &mut String, text: &str, to: usize) {
    row.push_str(text);
    row.extend(std::iter::repeat(' ').take(to.saturating_sub(width(text))));
}

fn cell_width(word: &ChordWord, chord: &str) -> usize {
    let chord_width = width(chord.trim_end());
    let chord_cell = if chord_width == 0 { 0 } else { chord_width + 1 };
    (width(&word.word) + 1).max(chord_cell)
}

/// Lay a line out as a chord row over a lyric row.
///
/// Lines without chords give only the lyric row. Lines with chords always
/// give both, even when the chord row is blank.
///
/// ```
/// use hymnal_chords::{to_chord_sheet, ChordLine};
///
/// let rows = to_chord_sheet(&ChordLine::parse("Un[G]til [Am - C]we are"));
/// assert_eq!(rows, vec!["G     Am - C", "Until we     are"]);
/// ```
pub fn to_chord_sheet(line: &ChordLine) -> Vec<String> {
    if !line.has_chords() {
        let lyric: Vec<&str> = line.words().iter().map(|w| w.word.as_str()).collect();
        return vec![lyric.join(" ")];
    }

    let mut chord_row = String::new();
    let mut lyric_row = String::new();
    for word in line.words() {
        let chord = word.chord_string().unwrap_or_default();
        let cell = cell_width(word, &chord);
        pad(&mut chord_row, chord.trim_end(), cell);
        pad(&mut lyric_row, &word.word, cell);
    }

    vec![
        chord_row.trim_end().to_string(),
        lyric_row.trim_end().to_string(),
    ]
}

fn header(song: &Song) -> Option<String> {
    let meta = song.metadata();
    let title = meta.title.as_deref()?;
    let mut header = match meta.number {
        Some(number) => format!("{}. {}", number, title),
        None => title.to_string(),
    };
    if let Some(key) = &meta.key {
        header.push_str(&format!(" (key of {})", key));
    }
    Some(header)
}

/// Render a whole song in the given format.
pub fn render_song(song: &Song, format: Format) -> Result<String, ChordError> {
    if format == Format::Json {
        return serde_json::to_string_pretty(song).map_err(|e| ChordError::Serialize(e.to_string()));
    }

    let mut rows: Vec<String> = Vec::new();
    if let Some(header) = header(song) {
        rows.push(header);
        rows.push(String::new());
    }
    for line in song.lines() {
        match format {
            Format::Annotated => rows.push(to_annotated(line)),
            _ => rows.extend(to_chord_sheet(line)),
        }
    }

    let mut out = rows.join("\n");
    out.push('\n');
    Ok(out)
}

impl fmt::Display for ChordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_annotated(self))
    }
}
