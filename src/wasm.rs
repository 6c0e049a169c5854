use crate::config::FinderConfig;
use crate::display::framed_matrix;
use crate::errors::{ConfigError, MatrixError};
use crate::finder::{FindStatus, WordFinder};
use crate::log::init_logger;
use crate::matrix::Matrix;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "M002", "C001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<MatrixError> for WasmError {
    fn from(e: MatrixError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<ConfigError> for WasmError {
    fn from(e: ConfigError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn string_array(value: JsValue, name: &str, code: &str) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError {
        code: code.to_string(),
        message: format!("{name} must be string[]: {e}"),
        description: format!("Invalid {name} format"),
        details: format!("The {name} parameter must be a JavaScript array of strings."),
        help: Some("Ensure you're passing a valid string array, e.g., ['abc', 'def', 'ghi']".to_string()),
    })
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmFindResult {
    words: Vec<String>,
    status: String,
}

/// JS entry: (rows: string[], words: string[], min, max, max_results)
/// returns `{ words: string[], status: "query_exhausted" | "found_enough" }`
///
/// Rows and words are lowercased here, as the CLI does.
#[wasm_bindgen]
pub fn find_words(
    rows: JsValue,
    words: JsValue,
    matrix_size_min: usize,
    matrix_size_max: usize,
    max_results: usize,
) -> Result<JsValue, JsValue> {
    let config = FinderConfig::new(matrix_size_min, matrix_size_max, max_results).map_err(WasmError::from)?;
    let rows = string_array(rows, "rows", "WASM001")?;
    let words = string_array(words, "words", "WASM001")?;

    let matrix = Matrix::with_config(rows.iter().map(|r| r.to_lowercase()), &config)
        .map_err(WasmError::from)?;
    let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let result = WordFinder::new(&matrix, config.max_results).find(&words);

    let status = match result.status {
        FindStatus::QueryExhausted => "query_exhausted",
        FindStatus::FoundEnough => "found_enough",
    };
    let wasm_result = WasmFindResult { words: result.words, status: status.to_string() };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The search result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Render rows as the framed text block the CLI prints.
///
/// # Errors
/// Returns a `JsValue` error if the rows do not form a valid matrix.
#[wasm_bindgen]
pub fn render_matrix(rows: JsValue, matrix_size_min: usize, matrix_size_max: usize) -> Result<String, JsValue> {
    let rows = string_array(rows, "rows", "WASM001")?;
    let matrix = Matrix::new(rows.iter().map(|r| r.to_lowercase()), matrix_size_min, matrix_size_max)
        .map_err(WasmError::from)?;
    Ok(framed_matrix(&matrix))
}
