//! Batch report aggregation
//!
//! Processes a list of inputs independently and renders a one-line-per-entry
//! human-readable report, suitable for use verbatim as a chat reply. A
//! failing entry never affects its siblings.

use super::converter::{LinkConverter, Platform};

/// Convert each input and join the per-entry markers with newlines,
/// preserving input order.
pub fn convert_all(converter: &LinkConverter, inputs: &[String]) -> String {
    if inputs.is_empty() {
        return "Please provide a URL to convert".to_string();
    }

    let results: Vec<String> = inputs
        .iter()
        .map(|input| {
            if converter.is_url(input) {
                process_url(converter, input)
            } else {
                format!("❌ Invalid URL: {}", input)
            }
        })
        .collect();

    results.join("\n")
}

fn process_url(converter: &LinkConverter, input: &str) -> String {
    let result = converter.convert_link(input);
    if result.success {
        format!(
            "✅ {} → {}",
            result.platform.unwrap_or(Platform::Unsupported),
            result.converted_url.unwrap_or_default()
        )
    } else {
        format!("❌ Error: {}", result.error.unwrap_or_default())
    }
}
