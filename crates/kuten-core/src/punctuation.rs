//! Kuten-style and comma-style punctuation marks and the conversion between them.

use std::fmt;
use std::str::FromStr;

/// Fixed (kuten, comma) pairs, applied in this order.
pub static PUNCTUATION_PAIRS: &[PunctuationPair] = &[
    PunctuationPair {
        kuten: '、',
        comma: '，',
    },
    PunctuationPair {
        kuten: '。',
        comma: '．',
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationPair {
    pub kuten: char,
    pub comma: char,
}

impl PunctuationPair {
    /// `(source, target)` for the given direction.
    pub fn oriented(&self, direction: Direction) -> (char, char) {
        match direction {
            Direction::KutenToComma => (self.kuten, self.comma),
            Direction::CommaToKuten => (self.comma, self.kuten),
        }
    }
}

/// Conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// 「、。」 to 「，．」
    #[default]
    KutenToComma,
    /// 「，．」 to 「、。」
    CommaToKuten,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    #[error("Undefined Option")]
    UndefinedOption,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::KutenToComma, Direction::CommaToKuten];

    pub fn pairs(self) -> &'static [PunctuationPair] {
        PUNCTUATION_PAIRS
    }

    /// Characters that trigger a replacement in this direction.
    pub fn source_chars(self) -> impl Iterator<Item = char> {
        PUNCTUATION_PAIRS.iter().map(move |p| p.oriented(self).0)
    }

    /// Replacement for `c`, or `None` if `c` is not a source character.
    pub fn target_of(self, c: char) -> Option<char> {
        PUNCTUATION_PAIRS.iter().find_map(|p| {
            let (src, dst) = p.oriented(self);
            (src == c).then_some(dst)
        })
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::KutenToComma => Direction::CommaToKuten,
            Direction::CommaToKuten => Direction::KutenToComma,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::KutenToComma => "kuten-to-comma",
            Direction::CommaToKuten => "comma-to-kuten",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer flags as exposed to the UI: 0 = kuten→comma, 1 = comma→kuten.
impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Direction::KutenToComma),
            1 => Ok(Direction::CommaToKuten),
            _ => Err(DirectionError::UndefinedOption),
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kuten-to-comma" => Ok(Direction::KutenToComma),
            "comma-to-kuten" => Ok(Direction::CommaToKuten),
            _ => Err(DirectionError::UndefinedOption),
        }
    }
}

/// Detection pattern for one direction: "contains at least one source character".
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
}

impl Pattern {
    pub fn compile(direction: Direction) -> Self {
        Self {
            chars: direction.source_chars().collect(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        text.contains(self.chars.as_slice())
    }

    pub fn count(&self, text: &str) -> usize {
        text.matches(self.chars.as_slice()).count()
    }
}

pub fn contains_source(text: &str, direction: Direction) -> bool {
    Pattern::compile(direction).is_match(text)
}

pub fn count_source(text: &str, direction: Direction) -> usize {
    Pattern::compile(direction).count(text)
}

/// Replace every source character with its target, pair by pair.
pub fn convert(text: &str, direction: Direction) -> String {
    let mut result = text.to_string();
    for pair in direction.pairs() {
        let (src, dst) = pair.oriented(direction);
        if result.contains(src) {
            result = result.replace(src, dst.encode_utf8(&mut [0; 4]));
        }
    }
    result
}
