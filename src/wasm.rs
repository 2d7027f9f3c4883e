use crate::dictionary::Dictionary;
use crate::errors::{DictionaryError, InputError};
use crate::log::init_logger;
use crate::solver::{generate_square, SolverError, SquareOutcome};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S002")
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

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For InvalidInput, extract the nested InputError details
        match &e {
            SolverError::InvalidInput(ie) => WasmError::from(ie),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<&InputError> for WasmError {
    fn from(e: &InputError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<DictionaryError> for WasmError {
    fn from(e: DictionaryError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        // Format a comprehensive error message
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();

    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSquareResult {
    /// Rows of the square; empty unless `outcome` is "found"
    rows: Vec<String>,
    outcome: String,
    /// Error code when `outcome` is "invalid_input"
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl WasmSquareResult {
    fn empty(outcome: &str) -> Self {
        WasmSquareResult { rows: Vec::new(), outcome: outcome.to_string(), code: None, message: None }
    }
}

fn to_js<T: serde::Serialize>(value: &T, code: &str) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| {
        WasmError {
            code: code.to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// JS entry: (letters: string, words: string[])
/// returns { rows: string[], outcome: "found" | "no_solution" | "invalid_input" | "budget_exhausted" | "size_limit_exceeded", code?, message? }
#[wasm_bindgen]
pub fn generate_square_wasm(letters: &str, words: JsValue) -> Result<JsValue, JsValue> {
    // words: string[] -> Vec<String>
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid dictionary format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['card', 'area', 'rear', 'dart']".to_string()),
    })?;

    let dictionary = Dictionary::from_words(&words);
    if dictionary.is_empty() {
        return Err(WasmError::from(DictionaryError::Empty).into());
    }

    let outcome = generate_square(letters, &dictionary).map_err(WasmError::from)?;

    let result = match outcome {
        SquareOutcome::Found(square) => WasmSquareResult {
            rows: square.into_rows(),
            ..WasmSquareResult::empty("found")
        },
        SquareOutcome::NoSolution => WasmSquareResult::empty("no_solution"),
        SquareOutcome::InvalidInput(e) => WasmSquareResult {
            code: Some(e.code().to_string()),
            message: Some(e.display_detailed()),
            ..WasmSquareResult::empty("invalid_input")
        },
        SquareOutcome::BudgetExhausted { elapsed, nodes_visited } => WasmSquareResult {
            message: Some(format!(
                "search budget exhausted after {:.1}s ({nodes_visited} nodes)",
                elapsed.as_secs_f64()
            )),
            ..WasmSquareResult::empty("budget_exhausted")
        },
        SquareOutcome::SizeLimitExceeded { size, max } => WasmSquareResult {
            message: Some(format!("a {size}×{size} square exceeds the size limit of {max}")),
            ..WasmSquareResult::empty("size_limit_exceeded")
        },
    };

    to_js(&result, "WASM002")
}

/// Parse a newline-separated word list into normalized dictionary words.
///
/// Returns the surviving words as a `JsValue` array of strings, sorted by
/// length and then alphabetically.
///
/// # Errors
/// Returns a `JsValue` error if the text holds no usable words.
#[wasm_bindgen]
pub fn parse_dictionary(text: &str) -> Result<JsValue, JsValue> {
    let dictionary = Dictionary::parse_from_str(text).map_err(WasmError::from)?;
    to_js(&dictionary.words(), "WASM003")
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste it when reporting issues. It includes the error
/// message, the letters, the dictionary size and environment information.
#[wasm_bindgen]
pub fn get_debug_info(letters: &str, error_message: &str, dictionary_size: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails (infallible operation)
    let _ = writeln!(&mut report, "=== WORDSQUARE DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Letters: {}", letters);
    let _ = writeln!(&mut report, "Dictionary Size: {}", dictionary_size);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
