//! Export filename derivation for SII offer uploads.
//!
//! The transmission portal expects `<PIVA>_INSERIMENTO[_<LABEL>].XML`. The
//! identifier is uppercased verbatim; the free-text label is reduced to
//! uppercase letters, digits and hyphens joined by single underscores, and
//! dropped entirely when nothing survives.

/// Derive the export filename from the vendor VAT number and an optional
/// free-text label.
pub fn export_filename(piva: &str, label: Option<&str>) -> String {
    let base = format!("{}_INSERIMENTO", piva.to_uppercase());
    match label.map(clean_label) {
        Some(l) if !l.is_empty() => format!("{}_{}.XML", base, l),
        _ => format!("{}.XML", base),
    }
}

/// Trim and uppercase, keep letters/digits/whitespace/hyphens, then turn
/// every whitespace run into a single underscore with none leading or
/// trailing.
fn clean_label(label: &str) -> String {
    let kept: String = label
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut pending_sep = false;
    for ch in kept.chars() {
        if ch.is_whitespace() {
            pending_sep = !out.is_empty();
        } else {
            if pending_sep {
                out.push('_');
                pending_sep = false;
            }
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_only() {
        assert_eq!(
            export_filename("IT12345678901", None),
            "IT12345678901_INSERIMENTO.XML"
        );
    }

    #[test]
    fn label_whitespace_becomes_single_underscores() {
        assert_eq!(
            export_filename("IT12345678901", Some("Test Offer 2024")),
            "IT12345678901_INSERIMENTO_TEST_OFFER_2024.XML"
        );
    }

    #[test]
    fn identifier_is_uppercased() {
        assert_eq!(
            export_filename("it12345678901", Some("test")),
            "IT12345678901_INSERIMENTO_TEST.XML"
        );
    }

    #[test]
    fn label_of_only_symbols_is_dropped() {
        assert_eq!(
            export_filename("IT12345678901", Some("@#$%^&*()")),
            "IT12345678901_INSERIMENTO.XML"
        );
    }

    #[test]
    fn label_is_trimmed() {
        assert_eq!(
            export_filename("IT12345678901", Some("  Test  ")),
            "IT12345678901_INSERIMENTO_TEST.XML"
        );
    }

    #[test]
    fn blank_label_is_dropped() {
        assert_eq!(
            export_filename("IT12345678901", Some("   ")),
            "IT12345678901_INSERIMENTO.XML"
        );
    }

    #[test]
    fn hyphens_survive_cleaning() {
        assert_eq!(
            export_filename("IT12345678901", Some("eco-plus casa")),
            "IT12345678901_INSERIMENTO_ECO-PLUS_CASA.XML"
        );
    }

    #[test]
    fn interior_symbol_runs_collapse_with_surrounding_whitespace() {
        assert_eq!(
            export_filename("IT12345678901", Some("Luce &&& Gas")),
            "IT12345678901_INSERIMENTO_LUCE_GAS.XML"
        );
    }
}
