//! Example: Validate a typed Aadhaar number or a block of OCR text
//!
//! Usage:
//!   cargo run --example check_aadhaar -- <number>
//!   cargo run --example check_aadhaar -- --text "<ocr output>"

use aadhaar_core::{resolve_from_text, resolve_typed};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("--text") if args.len() >= 3 => resolve_from_text(&args[2..].join(" ")),
        Some(number) => resolve_typed(number),
        None => {
            eprintln!("Usage: {} <aadhaar_number>", args[0]);
            eprintln!("       {} --text <ocr_text>", args[0]);
            eprintln!("Example: {} \"2345 6789 0124\"", args[0]);
            std::process::exit(1);
        }
    };

    match result.masked() {
        Some(masked) => {
            println!("✅ Aadhaar number format & checksum are valid");
            println!("   {}", masked);
        }
        None => {
            println!("❌ {}", result.reason().unwrap_or("Invalid Aadhaar number."));
            std::process::exit(1);
        }
    }
}
