use crate::chord_line::{ChordLine, ChordWord};

/// Spellings used when shifting up
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Spellings used when shifting down
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which accidental a transposed root is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    Sharp,
    Flat,
}

impl Spelling {
    /// Sharps going up, flats going down. `None` for a shift that is a whole
    /// number of octaves.
    pub fn for_shift(shift: i32) -> Option<Self> {
        match effective_shift(shift) {
            0 => None,
            s if s > 0 => Some(Spelling::Sharp),
            _ => Some(Spelling::Flat),
        }
    }
}

/// Chromatic pitch class, 0 = C through 11 = B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Read a root (`A`-`G`, optionally followed by `#` or `b`) from the start
    /// of `text`. Returns the pitch class and the root's length in bytes.
    ///
    /// ```
    /// use hymnal_chords::PitchClass;
    ///
    /// assert_eq!(PitchClass::parse_root("Bbm7"), Some((PitchClass::new(10), 2)));
    /// assert_eq!(PitchClass::parse_root("G/D"), Some((PitchClass::new(7), 1)));
    /// assert_eq!(PitchClass::parse_root("m7"), None);
    /// ```
    pub fn parse_root(text: &str) -> Option<(Self, usize)> {
        let mut chars = text.chars();
        let base: i32 = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let (acc, len) = match chars.next() {
            Some('#') => (1, 2),
            Some('b') => (-1, 2),
            _ => (0, 1),
        };
        Some((PitchClass::new(base + acc), len))
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }

    pub fn shifted(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }
}

/// Reduce a shift to -11..=11, keeping its direction.
fn effective_shift(shift: i32) -> i32 {
    shift % 12
}

/// Transpose every root in a chord group by `shift` semitones.
///
/// Roots are a letter `A`-`G` with an optional `#` or `b`; everything else
/// (qualities, slashes, separators, free text) is copied unchanged. Bass notes
/// after `/` are roots like any other.
///
/// ```
/// use hymnal_chords::transpose_chord;
///
/// assert_eq!(transpose_chord("Am - C", 1), "A#m - C#");
/// assert_eq!(transpose_chord("G/D", 2), "A/E");
/// assert_eq!(transpose_chord("B", 1), "C");
/// assert_eq!(transpose_chord("C", -1), "B");
/// assert_eq!(transpose_chord("D", -1), "Db");
/// ```
pub fn transpose_chord(text: &str, shift: i32) -> String {
    let steps = effective_shift(shift);
    let spelling = match Spelling::for_shift(steps) {
        Some(spelling) => spelling,
        None => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len() + 4);
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match PitchClass::parse_root(rest) {
            Some((pitch, len)) => {
                out.push_str(pitch.shifted(steps).name(spelling));
                rest = &rest[len..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    log::trace!("transposed {:?} by {} -> {:?}", text, shift, out);
    out
}

/// Transpose a key name such as `"G"` or `"Ebm"`. `None` when the key does
/// not start with a root letter.
pub fn transpose_key(key: &str, shift: i32) -> Option<String> {
    let trimmed = key.trim();
    PitchClass::parse_root(trimmed)?;
    Some(transpose_chord(trimmed, shift))
}

impl ChordWord {
    /// Copy of this word with every chord transposed. Absent chords stay absent.
    pub fn transposed(&self, shift: i32) -> ChordWord {
        ChordWord {
            word: self.word.clone(),
            chords: self.chords.as_ref().map(|chords| {
                chords
                    .iter()
                    .map(|chord| transpose_chord(chord, shift))
                    .collect()
            }),
        }
    }
}

impl ChordLine {
    pub fn transposed(&self, shift: i32) -> ChordLine {
        ChordLine::from_words(self.words().iter().map(|w| w.transposed(shift)).collect())
    }
}
