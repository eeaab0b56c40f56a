//! Text-content sanitization for SII XML.
//!
//! Two independent operations: a destructive clean that drops characters
//! the XML 1.0 text model cannot carry and escapes the five reserved
//! characters, and a non-destructive round-trip check used as a pre-flight
//! probe before serialization.

/// Whether `ch` may appear in XML 1.0 character data.
///
/// Valid characters are tab, linefeed, carriage return and the two
/// surrogate-safe printable ranges of the Basic Multilingual Plane.
/// Supplementary-plane characters (emoji and similar) are rejected.
fn is_valid_xml_char(ch: char) -> bool {
    matches!(ch,
        '\t' | '\n' | '\r'
        | '\u{0020}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}')
}

/// Clean a string for use as XML text content.
///
/// Invalid characters are dropped, not replaced. The five reserved
/// characters are then escaped to their named entities; the ampersand goes
/// first so the entities produced by the later replacements stay intact.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| is_valid_xml_char(*c)).collect();
    cleaned
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// [`sanitize`] over an optional input. Absent text maps to the empty
/// string, never an error.
pub fn sanitize_opt(text: Option<&str>) -> String {
    text.map(sanitize).unwrap_or_default()
}

/// Whether `text` survives a strict (non-lossy) UTF-8 encode/decode round
/// trip. Rust strings are valid UTF-8 by construction, so this only fails
/// on input that was malformed before it reached the engine; it is kept as
/// a pre-flight check distinct from the destructive [`sanitize`] path.
pub fn is_round_trip_safe(text: &str) -> bool {
    std::str::from_utf8(text.as_bytes()).is_ok()
}
