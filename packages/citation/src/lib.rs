//! Swiss Legal Citation Engine
//!
//! Detection, classification, structural extraction and cross-language
//! formatting of Swiss federal citations: court decisions (BGE/ATF/DTF)
//! and statute articles, in German, French, Italian and English. A
//! citation's legal identity survives translation exactly; only surface
//! tokens vary by language.
//!
//! The engine is pure: no I/O, no shared mutable state. Registries are
//! built once at process start and read concurrently without locking.
//!
//! # Example
//!
//! ```
//! use jurcite_citation::{convert_citation, validate_citation};
//!
//! let result = validate_citation("BGE 147 IV 73");
//! assert!(result.valid);
//!
//! let converted = convert_citation("Art. 97 Abs. 1 OR", "fr", false).unwrap();
//! assert_eq!(converted.converted, "art. 97 al. 1 CO");
//! ```

pub mod classifier;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod registry;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use classifier::{classify, Classification};
pub use detector::Detector;
pub use error::{CitationError, Result};
pub use extractor::extract;
pub use formatter::render;
pub use registry::{MarkerSet, MarkerSlot, Registry, StatuteRow};
pub use service::{
    convert_citation, format_citation, parse_citation, scan_text, validate_citation,
    validate_citations, CitationService, ConvertResult, FormatResult, ParseResult,
    ValidationResult,
};
pub use types::{
    CitationComponents, CitationKind, CitationSpan, Language, StatuteRef, StructuredCitation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        // Verify re-exports work
        let _lang = Language::De;
        let _kind = CitationKind::Statute;
        let _err = CitationError::UnrecognizedPattern(String::new());
        let _registry = registry::global();
    }
}
