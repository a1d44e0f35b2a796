#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// A zero-based column position, interconvertible with spreadsheet letters.
///
/// The letter form is base-26 with digits 1–26 and no zero digit:
/// `A` is column 0, `Z` is 25, `AA` is 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnRef(usize);

impl ColumnRef {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Parses a letter reference such as `C` or `aa`, case-insensitive.
    pub fn from_letters(letters: &str) -> Result<Self, ModelError> {
        let trimmed = letters.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidColumnLetter(letters.to_string()));
        }
        let mut value: u64 = 0;
        for ch in trimmed.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(ModelError::InvalidColumnLetter(letters.to_string()));
            }
            let digit = u64::from(ch.to_ascii_uppercase() as u8 - b'A') + 1;
            value = value
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| ModelError::InvalidColumnLetter(letters.to_string()))?;
        }
        Ok(Self((value - 1) as usize))
    }

    /// Accepts a 1-based column number (`3` is column C).
    pub fn from_one_based(number: i64) -> Result<Self, ModelError> {
        if number < 1 {
            return Err(ModelError::InvalidColumnIndex(number.to_string()));
        }
        Ok(Self((number - 1) as usize))
    }

    /// Parses either a letter reference or a 1-based column number.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let trimmed = input.trim();
        if trimmed.chars().all(|ch| ch.is_ascii_digit()) && !trimmed.is_empty() {
            let number = trimmed
                .parse::<i64>()
                .map_err(|_| ModelError::InvalidColumnIndex(input.to_string()))?;
            return Self::from_one_based(number);
        }
        Self::from_letters(input)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Renders the uppercase letter form.
    pub fn letters(&self) -> String {
        let mut remaining = self.0 + 1;
        let mut letters = Vec::new();
        while remaining > 0 {
            let digit = (remaining - 1) % 26;
            letters.push(b'A' + digit as u8);
            remaining = (remaining - 1) / 26;
        }
        letters.reverse();
        String::from_utf8(letters).expect("letters are ASCII")
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

impl serde::Serialize for ColumnRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.letters())
    }
}

impl<'de> serde::Deserialize<'de> for ColumnRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
