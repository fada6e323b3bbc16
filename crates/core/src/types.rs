//! Data structures for Aadhaar validation results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in an Aadhaar number
pub const AADHAAR_LENGTH: usize = 12;

/// Why a number was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// No characters supplied
    EmptyInput,

    /// Cleaned input is not exactly 12 digits
    WrongLength,

    /// First digit is 0 or 1
    LeadingDigitInvalid,

    /// Format checks pass but the Verhoeff checksum does not
    ChecksumMismatch,

    /// OCR text only: no passing 12-digit sequence anywhere
    NoCandidateFound,
}

impl Rejection {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::EmptyInput => "empty_input",
            Rejection::WrongLength => "wrong_length",
            Rejection::LeadingDigitInvalid => "leading_digit_invalid",
            Rejection::ChecksumMismatch => "checksum_mismatch",
            Rejection::NoCandidateFound => "no_candidate_found",
        }
    }

    /// Message suitable for showing to the person who supplied the input
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptyInput => "Aadhaar number cannot be empty.",
            Rejection::WrongLength => "Aadhaar number must be exactly 12 digits long.",
            Rejection::LeadingDigitInvalid => "Aadhaar number cannot start with 0 or 1.",
            Rejection::ChecksumMismatch => {
                "Invalid Aadhaar number. Please check the digits and try again."
            }
            Rejection::NoCandidateFound => {
                "No valid Aadhaar detected. Try retaking the photo (improve focus/lighting)."
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a typed number or OCR text
///
/// `reason` and `rejection` are set iff `valid` is false; `masked` is set iff
/// `valid` is true. Fields are private so the only way to get one is
/// [`ValidationResult::accepted`] or [`ValidationResult::rejected`]. It is
/// serialized for output but never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,

    /// `XXXX-XXXX-` followed by the last 4 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
}

impl ValidationResult {
    /// Result for a number that passed every check
    pub fn accepted(digits: &str) -> Self {
        Self {
            valid: true,
            reason: None,
            rejection: None,
            masked: Some(mask(digits)),
        }
    }

    /// Result for a number that failed `rejection`
    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            valid: false,
            reason: Some(rejection.message().to_string()),
            rejection: Some(rejection),
            masked: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    pub fn masked(&self) -> Option<&str> {
        self.masked.as_deref()
    }
}

/// Where a candidate was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// Standalone 12-digit token in whitespace-collapsed text
    WordBounded,

    /// Window over the concatenation of every digit in the text
    DigitStream,
}

/// A 12-digit sequence pulled out of a larger text
///
/// `offset` is a byte offset into the whitespace-collapsed text for
/// [`CandidateSource::WordBounded`], or a digit index into the concatenated
/// digit stream for [`CandidateSource::DigitStream`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub digits: String,
    pub offset: usize,
    pub source: CandidateSource,
}

pub(crate) fn has_valid_leading_digit(digits: &str) -> bool {
    matches!(digits.as_bytes().first(), Some(b'2'..=b'9'))
}

/// Display form exposing only the last 4 characters: `XXXX-XXXX-####`.
pub fn mask(digits: &str) -> String {
    let tail: String = {
        let chars: Vec<char> = digits.chars().collect();
        let start = chars.len().saturating_sub(4);
        chars[start..].iter().collect()
    };
    format!("XXXX-XXXX-{}", tail)
}

/// Turn a masked form back into a digit field by replacing each `X` with `0`.
///
/// The result of unmasking a masked number is never itself a valid Aadhaar,
/// since it starts with 0.
pub fn unmask(masked: &str) -> String {
    masked.replace('X', "0")
}
