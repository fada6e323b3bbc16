//! Property-based tests for the core crate.
//!
//! These tests use proptest to verify invariants around:
//! - Checksum generation and validation agreeing with each other
//! - Typed-input normalization being insensitive to separators
//! - Masked output never exposing more than the last 4 digits

use crate::resolver::{resolve_from_text, resolve_typed, scan_digit_stream};
use crate::verhoeff::{generate_check_digit, is_valid, D, P};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Digit strings of any length, possibly with leading zeros.
fn arb_numeral() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,40}").unwrap()
}

/// Checksum-valid 12-digit Aadhaar numbers.
fn arb_aadhaar() -> impl Strategy<Value = String> {
    prop::string::string_regex("[2-9][0-9]{10}")
        .unwrap()
        .prop_map(|body| {
            let check = generate_check_digit(&body).unwrap();
            format!("{}{}", body, check)
        })
}

/// Separator runs a person might type between digit groups.
fn arb_separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("-".to_string()),
        Just(" - ".to_string()),
        Just("\t".to_string()),
    ]
}

/// Straight index loop over the tables, kept apart from the engine's fold.
fn table_walk(numeral: &str) -> bool {
    let values: Vec<usize> = numeral.bytes().map(|b| (b - b'0') as usize).collect();
    let mut c = 0usize;
    for i in 0..values.len() {
        let v = values[values.len() - 1 - i];
        c = D[c][P[i % 8][v] as usize] as usize;
    }
    c == 0
}

// ============================================================================
// Checksum properties
// ============================================================================

proptest! {
    #[test]
    fn check_digit_round_trips(body in arb_numeral()) {
        let check = generate_check_digit(&body).unwrap();
        prop_assert!(check <= 9);
        let numeral = format!("{}{}", body, check);
        prop_assert!(is_valid(&numeral), "{} failed", numeral);
    }

    #[test]
    fn exactly_one_check_digit_fits(body in arb_numeral()) {
        let passing = (0..10u8)
            .filter(|d| is_valid(&format!("{}{}", body, d)))
            .count();
        prop_assert_eq!(passing, 1);
    }

    #[test]
    fn validation_matches_table_walk(numeral in arb_numeral()) {
        prop_assert_eq!(is_valid(&numeral), table_walk(&numeral));
    }

    #[test]
    fn validation_is_deterministic(s in ".{0,24}") {
        let first = is_valid(&s);
        let fresh: String = s.chars().collect();
        prop_assert_eq!(first, is_valid(&fresh));
    }

    #[test]
    fn non_digit_input_never_valid(s in "[0-9]{0,8}[a-zA-Z -][0-9]{0,8}") {
        prop_assert!(!is_valid(&s));
        prop_assert!(generate_check_digit(&s).is_err());
    }

    #[test]
    fn single_substitution_detected(number in arb_aadhaar(), pos in 0usize..12, delta in 1u8..10) {
        let mut bytes = number.clone().into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_valid(&mutated));
    }
}

// ============================================================================
// Resolver properties
// ============================================================================

proptest! {
    #[test]
    fn separators_do_not_change_typed_result(
        number in arb_aadhaar(),
        seps in prop::collection::vec(arb_separator(), 12),
    ) {
        let spaced: String = number
            .chars()
            .zip(seps.iter())
            .map(|(c, sep)| format!("{}{}", sep, c))
            .collect();

        prop_assert_eq!(resolve_typed(&spaced), resolve_typed(&number));
    }

    #[test]
    fn masked_form_exposes_only_last_four(number in arb_aadhaar()) {
        let result = resolve_typed(&number);
        prop_assert!(result.is_valid());

        let masked = result.masked().unwrap();
        prop_assert_eq!(masked.len(), 14);
        prop_assert!(masked.starts_with("XXXX-XXXX-"));
        prop_assert_eq!(&masked[10..], &number[8..]);
        prop_assert!(!masked.contains(&number[..8]));
    }

    #[test]
    fn typed_number_found_in_ocr_text(
        number in arb_aadhaar(),
        prefix in "[A-Za-z :]{0,20}",
        suffix in "[A-Za-z .]{0,20}",
    ) {
        let text = format!("{} {} {}", prefix, number, suffix);
        prop_assert_eq!(resolve_from_text(&text), resolve_typed(&number));
    }

    #[test]
    fn stream_hits_are_always_valid(text in "[0-9 a-z]{0,60}") {
        if let Some(candidate) = scan_digit_stream(&text) {
            prop_assert_eq!(candidate.digits.len(), 12);
            prop_assert!(resolve_typed(&candidate.digits).is_valid());
        }
    }
}
