//! Plate Value Object
//!
//! The plate number is the public identifier of a vehicle and the natural
//! key of the registry. Plates are stored and compared in a single canonical
//! form.
//!
//! ## Invariants
//! - Canonical form: trimmed, upper-cased
//! - Length: 1 to 20 characters (after normalization)
//! - Characters: ASCII letters, digits and hyphen
//! - Starts and ends with a letter or digit
//! - No consecutive hyphens, no whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for a plate (in characters)
pub const PLATE_MAX_LENGTH: usize = 20;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when plate validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    /// Plate is empty after normalization
    Empty,

    /// Plate is too long (maximum: PLATE_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Plate contains an invalid character
    InvalidCharacter { char: char, position: usize },

    /// Plate starts with an invalid character (must be a letter or digit)
    InvalidStart { char: char },

    /// Plate ends with an invalid character (must be a letter or digit)
    InvalidEnd { char: char },

    /// Plate contains consecutive hyphens (--)
    ConsecutiveHyphens,

    /// Plate contains whitespace in the middle
    ContainsWhitespace,
}

impl fmt::Display for PlateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Plate cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Plate is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only A-Z, 0-9 and - are allowed"
                )
            }
            Self::InvalidStart { char } => {
                write!(f, "Plate cannot start with '{char}'. Must start with A-Z or 0-9")
            }
            Self::InvalidEnd { char } => {
                write!(f, "Plate cannot end with '{char}'. Must end with A-Z or 0-9")
            }
            Self::ConsecutiveHyphens => {
                write!(f, "Plate cannot contain consecutive hyphens (--)")
            }
            Self::ContainsWhitespace => {
                write!(f, "Plate cannot contain whitespace")
            }
        }
    }
}

impl std::error::Error for PlateError {}

// ============================================================================
// Plate Value Object
// ============================================================================

/// Validated, normalized plate number
///
/// # Invariants
/// - Non-empty after normalization
/// - At most PLATE_MAX_LENGTH characters
/// - Contains only ASCII letters, digits and hyphens
/// - Starts and ends with a letter or digit
/// - No consecutive hyphens
///
/// # Storage
/// A single canonical form: trimmed and upper-cased. Unlike user handles
/// there is no case-preserving display variant; the canonical form is what
/// appears on the physical plate.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate {
    value: String,
}

impl Plate {
    /// Create a new Plate from raw input
    ///
    /// Applies normalization (trim, uppercase) and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, PlateError> {
        let value = Self::normalize(input.as_ref());
        Self::validate(&value)?;
        Ok(Self { value })
    }

    /// Get the canonical plate string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Create from a database value (assumes already validated and normalized)
    pub fn from_db(value: String) -> Self {
        Self { value }
    }

    /// Normalize input string (trim and uppercase)
    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    /// Validate the normalized plate
    fn validate(value: &str) -> Result<(), PlateError> {
        if value.is_empty() {
            return Err(PlateError::Empty);
        }

        let length = value.chars().count();
        if length > PLATE_MAX_LENGTH {
            return Err(PlateError::TooLong {
                length,
                max: PLATE_MAX_LENGTH,
            });
        }

        if value.chars().any(|c| c.is_whitespace()) {
            return Err(PlateError::ContainsWhitespace);
        }

        for (pos, ch) in value.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(PlateError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        // value is non-empty, unwraps cannot fail
        let first_char = value.chars().next().unwrap();
        if !first_char.is_ascii_alphanumeric() {
            return Err(PlateError::InvalidStart { char: first_char });
        }

        let last_char = value.chars().next_back().unwrap();
        if !last_char.is_ascii_alphanumeric() {
            return Err(PlateError::InvalidEnd { char: last_char });
        }

        if value.contains("--") {
            return Err(PlateError::ConsecutiveHyphens);
        }

        Ok(())
    }

    /// Check if character is valid in a normalized plate
    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-'
    }
}

impl fmt::Debug for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plate").field(&self.value).finish()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Plate {
    type Error = PlateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Plate {
    type Error = PlateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.value
    }
}

// ============================================================================
// Tests
// ============================================================================
