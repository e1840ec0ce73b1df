//! Validated value types shared by the HMS crates.
//!
//! - [`NonEmptyText`]: trimmed text with at least one non-whitespace character
//! - [`Code`]: a catalogue key with a bounded length and no inner whitespace
//! - [`Blob`]: opaque binary content carried by persistence models

mod blob;

pub use blob::Blob;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The trimmed input is longer than allowed
    #[error("Text is too long (max {max} characters, got {actual})")]
    TooLong { max: usize, actual: usize },
    /// A code contained whitespace between its characters
    #[error("Code must not contain whitespace")]
    InnerWhitespace,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a new `NonEmptyText` that is at most `max` characters once trimmed.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` or `TextError::TooLong`.
    pub fn bounded(input: impl AsRef<str>, max: usize) -> Result<Self, TextError> {
        let text = Self::new(input)?;
        let actual = text.0.chars().count();
        if actual > max {
            return Err(TextError::TooLong { max, actual });
        }
        Ok(text)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A catalogue key.
///
/// Codes are trimmed, non-empty, contain no whitespace and are at most `max`
/// characters long. The maximum is a property of the catalogue, so it is
/// supplied at parse time rather than encoded in the type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(String);

impl Code {
    /// Parses a code of at most `max` characters.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty`, `TextError::TooLong` or `TextError::InnerWhitespace`.
    pub fn parse(input: impl AsRef<str>, max: usize) -> Result<Self, TextError> {
        let text = NonEmptyText::bounded(input, max)?;
        if text.as_str().chars().any(char::is_whitespace) {
            return Err(TextError::InnerWhitespace);
        }
        Ok(Self(text.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Emergency  ").unwrap();
        assert_eq!(text.as_str(), "Emergency");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   "), Err(TextError::Empty));
    }

    #[test]
    fn test_bounded_text_counts_characters_not_bytes() {
        assert!(NonEmptyText::bounded("éé", 2).is_ok());
        assert_eq!(
            NonEmptyText::bounded("abc", 2),
            Err(TextError::TooLong { max: 2, actual: 3 })
        );
    }

    #[test]
    fn test_code_parse() {
        assert_eq!(Code::parse(" ZZ ", 10).unwrap().as_str(), "ZZ");
        assert_eq!(Code::parse("A B", 10), Err(TextError::InnerWhitespace));
        assert_eq!(Code::parse("", 10), Err(TextError::Empty));
        assert_eq!(
            Code::parse("123", 1),
            Err(TextError::TooLong { max: 1, actual: 3 })
        );
    }

    #[test]
    fn test_non_empty_text_deserialize_rejects_blank() {
        let ok: NonEmptyText = serde_json::from_str("\" Normal \"").unwrap();
        assert_eq!(ok.as_str(), "Normal");
        assert!(serde_json::from_str::<NonEmptyText>("\"  \"").is_err());
    }
}
