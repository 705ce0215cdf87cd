//! # Error Types
//!
//! This module defines the error type for song documents and the command-line tool.
//!
//! Parsing a single chord line and transposing chords never fail: every input,
//! including malformed brackets, has a defined result. Errors only arise when a
//! whole song document is read, its frontmatter is interpreted, or output is
//! written.
//!
//! ## Error Types
//! - `Parse` - Structural problems in a song document, with line and column
//! - `Metadata` - Invalid YAML frontmatter or unsupported metadata values
//! - `Io` - A song file could not be read or an output file written
//! - `InvalidArgument` - An option value the tool does not understand
//! - `Serialize` - JSON rendering failed
//!
//! ## Usage
//! ```rust
//! use hymnal_chords::{ChordError, Song};
//!
//! match Song::parse("---\ntitle: Amazing Grace\n") {
//!     Ok(song) => println!("{} lines", song.lines().len()),
//!     Err(ChordError::Parse { line, column, message }) => {
//!         eprintln!("Parse error at {}:{}: {}", line, column, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// Structural error with location information.
    ///
    /// # Example
    /// ```
    /// # use hymnal_chords::ChordError;
    /// let err = ChordError::Parse {
    ///     line: 1,
    ///     column: 1,
    ///     message: "frontmatter is never closed".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Parse error at line 1, column 1: frontmatter is never closed");
    /// ```
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Invalid frontmatter metadata.
    ///
    /// # Example
    /// ```
    /// # use hymnal_chords::ChordError;
    /// let err = ChordError::Metadata("key must start with a note letter A-G: H".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: key must start with a note letter A-G: H");
    /// ```
    #[error("Invalid metadata: {0}")]
    Metadata(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
