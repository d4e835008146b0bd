use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// Markup emitted by the recipe generator in front of a step: `⟦label:Teig kneten⟧ Knete ...`
static LABEL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*⟦label:(.*?)⟧\s*(.*)$").expect("label tag pattern is valid")
});

/// Separate an embedded `⟦label:...⟧` tag from the instruction body.
///
/// Returns the trimmed label and the text after the tag. Instructions without
/// the tag come back unchanged with no label. Run this before any duration or
/// label parsing so the markup is never scanned for numbers.
pub fn split_instruction(raw: &str) -> (Option<String>, String) {
    match LABEL_TAG.captures(raw) {
        Some(caps) => {
            let label = caps.get(1).map(|m| m.as_str().trim().to_string());
            let body = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| raw.to_string());
            debug!("Found label tag {:?} in instruction", label);
            (label, body)
        }
        None => (None, raw.to_string()),
    }
}
