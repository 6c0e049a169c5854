//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `MatrixError`, `ConfigError`, and `InputError`
//! implementations via their `code()`, `description()`, `details()`, and
//! `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordfinder::errors::{ConfigError, InputError, MatrixError};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_matrix_error_variants() -> Vec<MatrixError> {
    vec![
        MatrixError::Empty,
        MatrixError::RowCountOutOfRange { min: 2, max: 20, actual: 1 },
        MatrixError::RaggedRow { row: 2, expected: 4, actual: 3 },
    ]
}

fn all_config_error_variants() -> Vec<ConfigError> {
    vec![
        ConfigError::ZeroMinimumSize,
        ConfigError::ContradictoryBounds { min: 8, max: 4 },
    ]
}

fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::NotANumber { input: "four".to_string() },
        InputError::SizeOutOfRange { size: 25, min: 2, max: 20 },
        InputError::RowLength { expected: 4, actual: 5 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Matrix Errors (M001–M003)](#matrix-errors)");
    println!("- [Configuration Errors (C001–C002)](#configuration-errors)");
    println!("- [Input Errors (I001–I003)](#input-errors)\n");

    println!("## Matrix Errors\n");
    println!("Raised when rows cannot form a searchable matrix. No matrix is built.\n");
    generate_error_docs!(all_matrix_error_variants());

    println!("## Configuration Errors\n");
    println!("Raised when --min-size, --max-size, or --max-results cannot be satisfied.\n");
    generate_error_docs!(all_config_error_variants());

    println!("## Input Errors\n");
    println!("Reported by the interactive prompts, which then ask again.\n");
    generate_error_docs!(all_input_error_variants());
}
