//! offerta-core: SII offer XML assembly engine.
//!
//! Transforms a typed offer document (the output of the offer form layer)
//! into the SII offer-transmission XML, derives the regulatory export
//! filename, and writes the result to disk with structured outcomes.
//!
//! # Public API
//!
//! Key operations are re-exported at the crate root for convenience:
//!
//! - [`build()`] -- serialize a full document, declaration included
//! - [`transform()`] -- offer document to ordered element tree
//! - [`render()`] -- element tree to indented XML text
//! - [`sanitize()`] / [`is_round_trip_safe()`] -- text-content utilities
//! - [`export_filename()`] -- `<PIVA>_INSERIMENTO[_<LABEL>].XML`
//! - [`export_xml()`] -- structured-outcome file export
//!
//! The transformer and serializer are pure and total: they never fail on a
//! document that satisfies [`model::OffertaDocument`], and absent optional
//! data is omitted from the output rather than rejected.

pub mod export;
pub mod filename;
pub mod model;
pub mod node;
pub mod sanitize;
pub mod transform;
pub mod xml;

// ── Convenience re-exports: key types ────────────────────────────────

pub use export::{ExportError, ExportOutcome};
pub use model::OffertaDocument;
pub use node::{ElementBuilder, XmlContent, XmlElement};
pub use xml::XmlFormat;

// ── Convenience re-exports: engine entry points ──────────────────────

pub use export::export_xml;
pub use filename::export_filename;
pub use sanitize::{is_round_trip_safe, sanitize, sanitize_opt};
pub use transform::transform;
pub use xml::{build, render};
