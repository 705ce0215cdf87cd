//! # Chord Lines
//!
//! A lyric line carries its chords inline, in square brackets placed right
//! before the word (or syllable) they are played on:
//!
//! ```text
//! Un[G]til [Am - C]we are [D]sailing [G]hom[C]e. [G]
//! ```
//!
//! [`ChordLine::parse`] turns such a line into a sequence of [`ChordWord`]s.
//! Brackets are stripped out of the words and attached to the word that
//! follows them; brackets in the middle of a word (`hom[C]e.`) belong to that
//! word. Chords left over after the last word end up on a trailing word with
//! empty text.
//!
//! ## Absent vs. empty chords
//! - `chords: None` - the line has no bracket at all; render no chord row
//! - `chords: Some(vec![])` - the line has chords, but none on this word;
//!   render a blank slot in the chord row
//!
//! Parsing is total: unterminated brackets swallow the rest of the line and
//! nothing ever returns an error.

use serde::Serialize;

/// One whitespace-delimited word of a lyric line and the chords played on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChordWord {
    pub word: String,
    pub chords: Option<Vec<String>>,
}

impl ChordWord {
    pub fn new(word: impl Into<String>, chords: Option<Vec<String>>) -> Self {
        Self {
            word: word.into(),
            chords,
        }
    }

    /// Chords joined for display.
    ///
    /// `None` when the chords are absent. A present list that is empty, or
    /// holds only blank entries, becomes a single space so that the chord row
    /// still occupies a line.
    ///
    /// ```
    /// use hymnal_chords::ChordWord;
    ///
    /// let word = ChordWord::new("home.", Some(vec!["G".into(), "C".into()]));
    /// assert_eq!(word.chord_string().as_deref(), Some("G C"));
    /// assert_eq!(ChordWord::new("are", Some(vec![])).chord_string().as_deref(), Some(" "));
    /// assert_eq!(ChordWord::new("are", None).chord_string(), None);
    /// ```
    pub fn chord_string(&self) -> Option<String> {
        let chords = self.chords.as_ref()?;
        if chords.iter().all(|chord| chord.trim().is_empty()) {
            return Some(" ".to_string());
        }
        Some(chords.join(" "))
    }

    /// Whether at least one non-blank chord is attached.
    pub fn has_chord_symbols(&self) -> bool {
        self.chords
            .as_ref()
            .is_some_and(|chords| chords.iter().any(|c| !c.trim().is_empty()))
    }
}

/// A parsed lyric line. Always holds at least one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordLine {
    words: Vec<ChordWord>,
}

/// Scanner states
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Word,
    Bracket,
}

/// Accumulates one word and the chords waiting to be attached to it.
struct LineBuilder {
    has_brackets: bool,
    words: Vec<ChordWord>,
    word: String,
    pending: Vec<String>,
    /// A bracket (possibly empty) was seen since the last emitted word
    pending_seen: bool,
}

impl LineBuilder {
    fn new(has_brackets: bool) -> Self {
        Self {
            has_brackets,
            words: Vec::new(),
            word: String::new(),
            pending: Vec::new(),
            pending_seen: false,
        }
    }

    fn push_bracket(&mut self, content: String) {
        self.pending_seen = true;
        if !content.is_empty() {
            self.pending.push(content);
        }
    }

    fn emit(&mut self) {
        let chords = if self.has_brackets {
            Some(std::mem::take(&mut self.pending))
        } else {
            None
        };
        self.words
            .push(ChordWord::new(std::mem::take(&mut self.word), chords));
        self.pending_seen = false;
    }

    /// Ends the current word, if any.
    fn end_word(&mut self) {
        if !self.word.is_empty() {
            self.emit();
        }
    }

    fn finish(mut self) -> Vec<ChordWord> {
        self.end_word();
        if self.pending_seen || self.words.is_empty() {
            self.emit();
        }
        self.words
    }
}

impl ChordLine {
    /// Parse one line of bracket-annotated lyrics.
    ///
    /// ```
    /// use hymnal_chords::ChordLine;
    ///
    /// let line = ChordLine::parse("Un[G]til [Am - C]we are");
    /// let words: Vec<&str> = line.words().iter().map(|w| w.word.as_str()).collect();
    /// assert_eq!(words, vec!["Until", "we", "are"]);
    /// assert_eq!(line.words()[1].chords, Some(vec!["Am - C".to_string()]));
    /// assert_eq!(line.words()[2].chords, Some(vec![]));
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut builder = LineBuilder::new(line.contains('['));
        let mut state = ScanState::Word;
        let mut bracket = String::new();

        for c in line.chars() {
            match state {
                ScanState::Word => match c {
                    '[' => state = ScanState::Bracket,
                    c if c.is_whitespace() => builder.end_word(),
                    c => builder.word.push(c),
                },
                ScanState::Bracket => match c {
                    ']' => {
                        builder.push_bracket(std::mem::take(&mut bracket));
                        state = ScanState::Word;
                    }
                    c => bracket.push(c),
                },
            }
        }

        if state == ScanState::Bracket {
            log::debug!("unterminated chord bracket in line {:?}", line);
            builder.push_bracket(bracket);
        }

        Self {
            words: builder.finish(),
        }
    }

    /// Build a line from already-separated words. An empty list becomes the
    /// single empty word an empty line parses to.
    pub fn from_words(words: Vec<ChordWord>) -> Self {
        if words.is_empty() {
            return Self {
                words: vec![ChordWord::default()],
            };
        }
        Self { words }
    }

    pub fn words(&self) -> &[ChordWord] {
        &self.words
    }

    pub fn into_words(self) -> Vec<ChordWord> {
        self.words
    }

    /// Whether the line carries a chord row (any word has chords present).
    pub fn has_chords(&self) -> bool {
        self.words.iter().any(|w| w.chords.is_some())
    }

    /// Whether the line consists of the single empty word of a blank line.
    pub fn is_blank(&self) -> bool {
        self.words.len() == 1 && self.words[0].word.is_empty() && self.words[0].chords.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(line: &ChordLine) -> Vec<&str> {
        line.words().iter().map(|w| w.word.as_str()).collect()
    }

    fn chords(line: &ChordLine) -> Vec<Option<Vec<String>>> {
        line.words().iter().map(|w| w.chords.clone()).collect()
    }

    fn some(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_line() {
        let line = ChordLine::parse("");
        assert_eq!(line.words(), &[ChordWord::new("", None)]);
        assert!(line.is_blank());
    }

    #[test]
    fn test_plain_words_have_absent_chords() {
        let line = ChordLine::parse("a b c");
        assert_eq!(words(&line), vec!["a", "b", "c"]);
        assert_eq!(chords(&line), vec![None, None, None]);
        assert!(!line.has_chords());
    }

    #[test]
    fn test_empty_bracket_is_present_but_empty() {
        let line = ChordLine::parse("[]a");
        assert_eq!(line.words(), &[ChordWord::new("a", Some(vec![]))]);
        assert_eq!(line.words()[0].chord_string().as_deref(), Some(" "));
    }

    #[test]
    fn test_full_line() {
        let line = ChordLine::parse("Un[G]til [Am - C]we are [D]sailing [G]hom[C]e. [G]");
        assert_eq!(
            words(&line),
            vec!["Until", "we", "are", "sailing", "home.", ""]
        );
        assert_eq!(
            chords(&line),
            vec![
                some(&["G"]),
                some(&["Am - C"]),
                some(&[]),
                some(&["D"]),
                some(&["G", "C"]),
                some(&["G"]),
            ]
        );
        assert_eq!(line.words()[4].chord_string().as_deref(), Some("G C"));
    }

    #[test]
    fn test_bracket_before_whitespace_carries_to_next_word() {
        let line = ChordLine::parse("[G] Amazing grace");
        assert_eq!(words(&line), vec!["Amazing", "grace"]);
        assert_eq!(chords(&line), vec![some(&["G"]), some(&[])]);
    }

    #[test]
    fn test_adjacent_brackets_append_in_order() {
        let line = ChordLine::parse("[G][Am]word");
        assert_eq!(chords(&line), vec![some(&["G", "Am"])]);
    }

    #[test]
    fn test_unterminated_bracket_runs_to_end_of_line() {
        let line = ChordLine::parse("sweet [G7 the sound");
        assert_eq!(words(&line), vec!["sweet", ""]);
        assert_eq!(chords(&line), vec![some(&[]), some(&["G7 the sound"])]);
    }

    #[test]
    fn test_trailing_empty_bracket_emits_empty_word() {
        let line = ChordLine::parse("a []");
        assert_eq!(words(&line), vec!["a", ""]);
        assert_eq!(chords(&line), vec![some(&[]), some(&[])]);
    }

    #[test]
    fn test_whitespace_only_line() {
        let line = ChordLine::parse("   \t ");
        assert_eq!(line.words(), &[ChordWord::new("", None)]);
    }

    #[test]
    fn test_stray_closing_bracket_is_text() {
        let line = ChordLine::parse("a] b");
        assert_eq!(words(&line), vec!["a]", "b"]);
        assert_eq!(chords(&line), vec![None, None]);
    }

    #[test]
    fn test_chord_string_blank_entries() {
        let word = ChordWord::new("x", some(&["  ", ""]));
        assert_eq!(word.chord_string().as_deref(), Some(" "));
        assert!(!word.has_chord_symbols());
    }

    #[test]
    fn test_has_chord_symbols() {
        assert!(ChordWord::new("x", some(&["G"])).has_chord_symbols());
        assert!(!ChordWord::new("x", some(&[])).has_chord_symbols());
        assert!(!ChordWord::new("x", None).has_chord_symbols());
    }

    #[test]
    fn test_into_words_rebuilds_line() {
        let line = ChordLine::parse("[G]hom[C]e. [G]");
        let words = line.clone().into_words();
        assert_eq!(words.len(), 2);
        assert_eq!(ChordLine::from_words(words), line);
    }

    #[test]
    fn test_from_words_never_empty() {
        let line = ChordLine::from_words(vec![]);
        assert_eq!(line, ChordLine::parse(""));
    }
}
