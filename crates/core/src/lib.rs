//! Aadhaar Core Library
//!
//! This library validates Aadhaar numbers, either typed by a person or
//! recognised by an OCR engine inside a larger block of text. Validity is
//! confirmed with the Verhoeff checksum.
//!
//! Everything here is a pure function over strings: no I/O, no shared state.

pub mod error;
pub mod resolver;
pub mod types;
pub mod verhoeff;

#[cfg(test)]
mod proptest;

pub use error::{AadhaarError, Result};
pub use resolver::{
    collapse_whitespace, find_word_bounded_candidate, normalize_typed, resolve_from_text,
    resolve_typed, scan_digit_stream,
};
pub use types::{
    mask, unmask, Candidate, CandidateSource, Rejection, ValidationResult, AADHAAR_LENGTH,
};
pub use verhoeff::{generate_check_digit, is_valid};
