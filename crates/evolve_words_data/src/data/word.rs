use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a string cannot be used as a [`Word`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("a word cannot be empty")]
    Empty,

    #[error("'{word}' contains {found:?}; only lowercase ASCII letters are allowed")]
    InvalidCharacter { word: String, found: char },
}

/// A nonempty run of lowercase ASCII letters.
///
/// Population members are kept as plain `String`s because a mutation may
/// briefly produce something that is not a word (the empty string, for one);
/// `Word` is used wherever a value must be valid up front, such as the
/// progenitor of a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(value: impl Into<String>) -> Result<Self, WordError> {
        let value = value.into();
        if value.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(found) = value.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter { word: value, found });
        }
        Ok(Self(value))
    }

    /// Lower-cases `value` before validating it.
    pub fn normalized(value: &str) -> Result<Self, WordError> {
        Self::new(value.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}
