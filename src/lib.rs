pub mod chord_line;
pub mod error;
pub mod render;
pub mod song;
pub mod transpose;

pub use chord_line::{ChordLine, ChordWord};
pub use error::*;
pub use render::{render_song, to_annotated, to_chord_sheet, Format};
pub use song::{Song, SongMetadata};
pub use transpose::{transpose_chord, transpose_key, PitchClass, Spelling};

/// Parse one bracket-annotated lyric line.
pub fn parse_line(line: &str) -> ChordLine {
    ChordLine::parse(line)
}

/// Parse a line and shift all of its chords by `shift` semitones.
pub fn transpose_line(line: &str, shift: i32) -> ChordLine {
    ChordLine::parse(line).transposed(shift)
}

/// Parse a song document, apply its own default transposition plus `shift`,
/// and render it.
pub fn render_transposed(source: &str, shift: i32, format: Format) -> Result<String, ChordError> {
    let song = Song::parse(source)?.with_default_transpose().transposed(shift);
    render_song(&song, format)
}
