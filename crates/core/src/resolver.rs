//! Aadhaar resolver for typed input and OCR text
//!
//! Typed input goes through the format rules in a fixed order: emptiness,
//! length and digit class, leading digit, checksum. The first rule violated
//! is the one reported.
//!
//! OCR text is searched in two phases. A standalone 12-digit token is tried
//! first. If there is none, or it fails, every 12-digit window of the
//! concatenated digit stream is tried left to right and the first one passing
//! wins.
//!
//! Nothing here logs digits, neither raw nor masked.

use crate::types::{
    has_valid_leading_digit, Candidate, CandidateSource, Rejection, ValidationResult,
    AADHAAR_LENGTH,
};
use crate::verhoeff;

/// Validate a number typed by a person.
pub fn resolve_typed(input: &str) -> ValidationResult {
    if input.is_empty() {
        log::debug!("typed input rejected: {}", Rejection::EmptyInput.code());
        return ValidationResult::rejected(Rejection::EmptyInput);
    }

    let cleaned = normalize_typed(input);
    let result = check_number(&cleaned);
    log_outcome("typed input", &result);
    result
}

/// Find and validate an Aadhaar number inside raw OCR output.
pub fn resolve_from_text(raw_text: &str) -> ValidationResult {
    let text = collapse_whitespace(raw_text);

    if let Some(candidate) = find_word_bounded_candidate(&text) {
        let result = check_number(&candidate.digits);
        if result.is_valid() {
            log::debug!(
                "accepted word-bounded candidate at offset {}",
                candidate.offset
            );
            return result;
        }
        log::debug!(
            "word-bounded candidate at offset {} rejected ({}), scanning digit stream",
            candidate.offset,
            result.rejection().map(|r| r.code()).unwrap_or("unknown")
        );
    }

    match scan_digit_stream(&text) {
        Some(candidate) => {
            log::debug!(
                "accepted digit-stream window at offset {}",
                candidate.offset
            );
            ValidationResult::accepted(&candidate.digits)
        }
        None => {
            log::debug!("OCR text rejected: {}", Rejection::NoCandidateFound.code());
            ValidationResult::rejected(Rejection::NoCandidateFound)
        }
    }
}

/// Strip whitespace and hyphens. Nothing else is touched.
pub fn normalize_typed(input: &str) -> String {
    input
        .chars()
        .filter(|c| !is_space(*c) && *c != '-')
        .collect()
}

/// Replace every run of whitespace with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if is_space(c) {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }

    out
}

/// First run of exactly 12 ASCII digits with a word boundary on both sides.
///
/// Letters, digits and `_` are word characters, so `ID234567890124` has no
/// match while `ID: 234567890124.` does. The checksum is not consulted.
pub fn find_word_bounded_candidate(text: &str) -> Option<Candidate> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        let bounded_before = start == 0 || !is_word_byte(bytes[start - 1]);
        let bounded_after = i == bytes.len() || !is_word_byte(bytes[i]);

        if i - start == AADHAAR_LENGTH && bounded_before && bounded_after {
            return Some(Candidate {
                digits: text[start..i].to_string(),
                offset: start,
                source: CandidateSource::WordBounded,
            });
        }
    }

    None
}

/// First 12-digit window of the text's digit stream that starts with 2-9 and
/// passes the checksum.
///
/// The stream is every ASCII digit of `text` concatenated in order. Windows are
/// tried at each offset from 0 to `len - 12`.
pub fn scan_digit_stream(text: &str) -> Option<Candidate> {
    let stream: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if stream.len() < AADHAAR_LENGTH {
        log::trace!("digit stream too short ({} digits)", stream.len());
        return None;
    }

    let last = stream.len() - AADHAAR_LENGTH;
    let found = (0..=last).find_map(|offset| {
        let window = &stream[offset..offset + AADHAAR_LENGTH];
        if has_valid_leading_digit(window) && verhoeff::is_valid(window) {
            Some(Candidate {
                digits: window.to_string(),
                offset,
                source: CandidateSource::DigitStream,
            })
        } else {
            None
        }
    });

    if found.is_none() {
        log::trace!("no passing window among {} offsets", last + 1);
    }

    found
}

/// Length, digit class, leading digit and checksum, in that order.
fn check_number(cleaned: &str) -> ValidationResult {
    if cleaned.len() != AADHAAR_LENGTH || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::rejected(Rejection::WrongLength);
    }

    if !has_valid_leading_digit(cleaned) {
        return ValidationResult::rejected(Rejection::LeadingDigitInvalid);
    }

    if !verhoeff::is_valid(cleaned) {
        return ValidationResult::rejected(Rejection::ChecksumMismatch);
    }

    ValidationResult::accepted(cleaned)
}

/// Unicode `White_Space` minus NEL, plus the byte-order mark. OCR engines and
/// pasted text both leave a stray U+FEFF in front of numbers.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn log_outcome(what: &str, result: &ValidationResult) {
    match result.rejection() {
        Some(rejection) => log::debug!("{} rejected: {}", what, rejection.code()),
        None => log::debug!("{} accepted", what),
    }
}
