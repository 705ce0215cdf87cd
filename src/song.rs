//! # Song Documents
//!
//! A song is a plain-text file of bracket-annotated lyric lines, optionally
//! preceded by YAML frontmatter:
//!
//! ```text
//! ---
//! title: Amazing Grace
//! number: 1151
//! author: John Newton
//! key: G
//! transpose: -2
//! ---
//! A[G]mazing [G7]grace, how [C]sweet the [G]sound
//! ```
//!
//! Every metadata key is optional; unknown keys are ignored. `transpose` is
//! the song's preferred shift, applied by [`Song::with_default_transpose`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chord_line::ChordLine;
use crate::error::ChordError;
use crate::transpose::{transpose_key, PitchClass};

const FRONTMATTER_MARKER: &str = "---";

/// Validated song metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SongMetadata {
    pub title: Option<String>,
    pub number: Option<u32>,
    pub author: Option<String>,
    pub key: Option<String>,
    pub transpose: i32,
}

/// Raw metadata for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    title: Option<String>,
    number: Option<u32>,
    author: Option<String>,
    key: Option<String>,
    transpose: Option<i32>,
}

impl SongMetadata {
    fn from_yaml(content: &str) -> Result<Self, ChordError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawMetadata =
            serde_yaml::from_str(content).map_err(|e| ChordError::Metadata(e.to_string()))?;

        let key = match raw.key {
            Some(key) => {
                let key = key.trim().to_string();
                if PitchClass::parse_root(&key).is_none() {
                    return Err(ChordError::Metadata(format!(
                        "key must start with a note letter A-G: {}",
                        key
                    )));
                }
                Some(key)
            }
            None => None,
        };

        Ok(Self {
            title: raw.title,
            number: raw.number,
            author: raw.author,
            key,
            transpose: raw.transpose.unwrap_or(0),
        })
    }
}

/// A whole song: metadata plus one [`ChordLine`] per lyric line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    metadata: SongMetadata,
    lines: Vec<ChordLine>,
}

/// Split leading frontmatter from the body.
/// Returns (frontmatter_content, body_lines)
fn extract_frontmatter(source: &str) -> Result<(Option<String>, Vec<&str>), ChordError> {
    let lines: Vec<&str> = source.lines().collect();

    let start = match lines.iter().position(|line| !line.trim().is_empty()) {
        Some(i) if lines[i].trim() == FRONTMATTER_MARKER => i,
        _ => return Ok((None, lines)),
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.trim() == FRONTMATTER_MARKER)
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| ChordError::Parse {
            line: start + 1,
            column: 1,
            message: "frontmatter opened with '---' is never closed".to_string(),
        })?;

    log::debug!("frontmatter found on lines {}..={}", start + 1, end + 1);
    let content = lines[start + 1..end].join("\n");
    Ok((Some(content), lines[end + 1..].to_vec()))
}

impl Song {
    /// Parse a song document.
    ///
    /// ```
    /// use hymnal_chords::Song;
    ///
    /// let song = Song::parse("---\ntitle: Sailing\nkey: G\n---\nUn[G]til we are [D]sailing\n")?;
    /// assert_eq!(song.metadata().title.as_deref(), Some("Sailing"));
    /// assert_eq!(song.lines().len(), 1);
    /// assert!(song.has_chords());
    /// # Ok::<(), hymnal_chords::ChordError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self, ChordError> {
        let (frontmatter, body) = extract_frontmatter(source)?;
        let metadata = match frontmatter {
            Some(content) => SongMetadata::from_yaml(&content)?,
            None => SongMetadata::default(),
        };

        let first = body.iter().position(|line| !line.trim().is_empty());
        let last = body.iter().rposition(|line| !line.trim().is_empty());
        let lines = match (first, last) {
            (Some(first), Some(last)) => body[first..=last]
                .iter()
                .map(|line| ChordLine::parse(line))
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self { metadata, lines })
    }

    /// Read and parse a song file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), source.len());
        Self::parse(&source)
    }

    pub fn new(metadata: SongMetadata, lines: Vec<ChordLine>) -> Self {
        Self { metadata, lines }
    }

    pub fn metadata(&self) -> &SongMetadata {
        &self.metadata
    }

    pub fn lines(&self) -> &[ChordLine] {
        &self.lines
    }

    pub fn has_chords(&self) -> bool {
        self.lines.iter().any(ChordLine::has_chords)
    }

    /// Copy of the song with every chord and the key shifted by `shift` semitones.
    pub fn transposed(&self, shift: i32) -> Song {
        let key = self
            .metadata
            .key
            .as_ref()
            .map(|key| transpose_key(key, shift).unwrap_or_else(|| key.clone()));
        Song {
            metadata: SongMetadata {
                key,
                ..self.metadata.clone()
            },
            lines: self.lines.iter().map(|line| line.transposed(shift)).collect(),
        }
    }

    /// Apply the frontmatter's `transpose` value. The result records a
    /// `transpose` of 0 since the shift is now baked into its chords.
    pub fn with_default_transpose(&self) -> Song {
        let mut song = self.transposed(self.metadata.transpose);
        song.metadata.transpose = 0;
        song
    }
}
