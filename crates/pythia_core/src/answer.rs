//! The closed answer vocabulary.
//!
//! Five values a player can give, each carrying a fixed scalar weight in
//! [0, 1] that expresses how strongly the answer leans toward "yes". The
//! set is not extensible at runtime; persisted observation records refer
//! to values by their stable index.

use serde::Serialize;

/// One of the five answers a player can give to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    No,
    Yes,
    Unknown,
    Probably,
    Doubtful,
}

impl Answer {
    /// Every value, ordered by stable index.
    pub const ALL: [Answer; 5] = [
        Answer::No,
        Answer::Yes,
        Answer::Unknown,
        Answer::Probably,
        Answer::Doubtful,
    ];

    /// The two decisive answers probed during question lookahead.
    pub const POLAR: [Answer; 2] = [Answer::No, Answer::Yes];

    /// Scalar weight in [0, 1]; 1 is a firm yes, 0 a firm no.
    pub fn weight(self) -> f64 {
        match self {
            Answer::No => 0.0,
            Answer::Yes => 1.0,
            Answer::Unknown => 0.5,
            Answer::Probably => 0.75,
            Answer::Doubtful => 0.25,
        }
    }

    /// Stable index used in the observations file.
    pub fn index(self) -> u8 {
        match self {
            Answer::No => 0,
            Answer::Yes => 1,
            Answer::Unknown => 2,
            Answer::Probably => 3,
            Answer::Doubtful => 4,
        }
    }

    /// Inverse of [`Answer::index`].
    pub fn from_index(index: u8) -> Option<Answer> {
        Answer::ALL.get(index as usize).copied()
    }

    /// Single-letter prompt key.
    pub fn key(self) -> char {
        match self {
            Answer::No => 'n',
            Answer::Yes => 'y',
            Answer::Unknown => 'u',
            Answer::Probably => 'p',
            Answer::Doubtful => 'd',
        }
    }

    /// Parse a prompt key, case-insensitively.
    pub fn from_key(key: char) -> Option<Answer> {
        match key.to_ascii_lowercase() {
            'n' => Some(Answer::No),
            'y' => Some(Answer::Yes),
            'u' => Some(Answer::Unknown),
            'p' => Some(Answer::Probably),
            'd' => Some(Answer::Doubtful),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Answer::No => "no",
            Answer::Yes => "yes",
            Answer::Unknown => "unknown",
            Answer::Probably => "probably",
            Answer::Doubtful => "doubtful",
        }
    }

    /// True for the two answers lookahead probes.
    pub fn is_polar(self) -> bool {
        matches!(self, Answer::No | Answer::Yes)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
