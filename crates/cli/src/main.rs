//! CLI tool for Aadhaar number validation
//!
//! Checks typed numbers and text produced by an external OCR engine. Output
//! never shows more than the last 4 digits of an Aadhaar number.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use aadhaar_core::{
    generate_check_digit, is_valid, resolve_from_text, resolve_typed, ValidationResult,
};

#[derive(Parser)]
#[command(name = "aadhaar-check")]
#[command(about = "Validate Aadhaar numbers from typed input or OCR text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a typed Aadhaar number (spaces and hyphens allowed)
    Check {
        /// The number as typed
        number: String,
    },

    /// Find and validate an Aadhaar number in OCR output text
    Scan {
        /// Text file with OCR output; stdin when omitted or "-"
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Test a numeral of any length against the Verhoeff checksum
    Checksum {
        /// Digits, check digit last
        numeral: String,
    },

    /// Compute the Verhoeff check digit for a numeral
    CheckDigit {
        /// Digits without a check digit
        numeral: String,
    },

    /// Show example usage
    Examples,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logger
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Check { number } => cmd_check(&number, cli.json),
        Commands::Scan { file } => cmd_scan(file, cli.json),
        Commands::Checksum { numeral } => cmd_checksum(&numeral, cli.json),
        Commands::CheckDigit { numeral } => cmd_check_digit(&numeral, cli.json),
        Commands::Examples => cmd_examples(),
    }
}

fn cmd_check(number: &str, json: bool) -> Result<ExitCode> {
    let result = resolve_typed(number);
    report(&result, json)
}

fn cmd_scan(file: Option<PathBuf>, json: bool) -> Result<ExitCode> {
    let text = read_ocr_text(file)?;
    log::info!("Scanning {} characters of OCR text", text.chars().count());

    let result = resolve_from_text(&text);
    report(&result, json)
}

/// Read OCR output from a file, or stdin for `None` / `-`.
fn read_ocr_text(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read OCR text from {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read OCR text from stdin")?;
            Ok(text)
        }
    }
}

fn cmd_checksum(numeral: &str, json: bool) -> Result<ExitCode> {
    let valid = is_valid(numeral);

    if json {
        println!("{}", serde_json::json!({ "valid": valid }));
    } else if valid {
        println!("valid");
    } else {
        println!("invalid");
    }

    Ok(exit_code(valid))
}

fn cmd_check_digit(numeral: &str, json: bool) -> Result<ExitCode> {
    let digit = generate_check_digit(numeral)?;

    if json {
        println!("{}", serde_json::json!({ "check_digit": digit }));
    } else {
        println!("{}", digit);
    }

    Ok(ExitCode::SUCCESS)
}

fn report(result: &ValidationResult, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        match (result.masked(), result.reason()) {
            (Some(masked), _) => {
                println!("✅ Aadhaar number format & checksum are valid");
                println!("   {}", masked);
            }
            (None, Some(reason)) => println!("❌ {}", reason),
            (None, None) => println!("❌ Invalid Aadhaar number"),
        }
    }

    Ok(exit_code(result.is_valid()))
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn cmd_examples() -> Result<ExitCode> {
    println!("📚 Example Usage");
    println!();
    println!("1. Check a typed Aadhaar number:");
    println!("   aadhaar-check check \"2345 6789 0124\"");
    println!();
    println!("2. Scan OCR output saved to a file:");
    println!("   aadhaar-check scan -f card.txt");
    println!();
    println!("3. Pipe OCR output straight in:");
    println!("   tesseract card.png - | aadhaar-check scan");
    println!();
    println!("4. Test any numeral against the Verhoeff checksum:");
    println!("   aadhaar-check checksum 2363");
    println!();
    println!("5. Compute a check digit:");
    println!("   aadhaar-check check-digit 23456789012");
    println!();
    println!("💡 Tips:");
    println!("   - Use --json for machine-readable output");
    println!("   - Use --verbose or -v for detailed logging (digits are never logged)");
    println!("   - Exit status is 0 for a valid number and 1 otherwise");
    println!();

    Ok(ExitCode::SUCCESS)
}
