//! Citation span detection.
//!
//! Two independent recognizers run over the text, one per citation
//! grammar, and their matches are merged leftmost-longest. Detection is
//! purely structural: an abbreviation-shaped token that is not in the
//! registry still produces a span, and the extractor turns it into a
//! typed error. Detection and validation are separate concerns.

use regex::Regex;

use crate::registry::Registry;
use crate::types::{CitationKind, CitationSpan};

/// Court-decision grammar: reporter prefix, volume (1-3 digits),
/// chamber (roman numeral I-V with optional lowercase suffix), page
/// (1-4 digits). All parts mandatory.
const DECISION_PATTERN: &str =
    r"\b(?:BGE|ATF|DTF)\s+\d{1,3}\s+(?:I{1,3}|IV|V)[a-z]?\s+\d{1,4}\b";

/// Reporter prefix and volume with no chamber/page. Deliberately NOT a
/// detection grammar: used by the façade to turn a near-miss into a
/// diagnostic instead of an unrecognized-pattern error.
const INCOMPLETE_DECISION_PATTERN: &str = r"\b(?:BGE|ATF|DTF)\s+\d{1,3}\b";

/// Scanner for citation candidates in free text.
#[derive(Debug)]
pub struct Detector {
    decision: Regex,
    statute: Regex,
    incomplete_decision: Regex,
}

impl Detector {
    /// Compile the recognizers. The statute grammar's marker alternation
    /// is built from the registry's marker union, so a marker added to
    /// the registry is recognized here without further changes.
    #[must_use]
    #[allow(clippy::expect_used)] // Patterns are static or registry-derived and always valid
    pub fn new(registry: &Registry) -> Self {
        let markers = registry
            .marker_tokens()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let statute_pattern = format!(
            r"\b[Aa]rt\.\s+\d+[a-z]*(?:\s+(?:{markers})\s+\S+)*\s+[A-Z][A-Za-z]*\.?"
        );

        Self {
            decision: Regex::new(DECISION_PATTERN).expect("valid regex"),
            statute: Regex::new(&statute_pattern).expect("valid regex"),
            incomplete_decision: Regex::new(INCOMPLETE_DECISION_PATTERN).expect("valid regex"),
        }
    }

    /// Scan text for citation spans.
    ///
    /// Returns spans in text order, non-overlapping. Overlaps between
    /// the two grammars are resolved leftmost-longest: the earlier
    /// match wins, then the longer one.
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<CitationSpan> {
        let mut candidates = Vec::new();
        for m in self.decision.find_iter(text) {
            candidates.push(CitationSpan::new(
                m.as_str(),
                m.start(),
                m.end(),
                CitationKind::CourtDecision,
            ));
        }
        for m in self.statute.find_iter(text) {
            candidates.push(CitationSpan::new(
                m.as_str(),
                m.start(),
                m.end(),
                CitationKind::Statute,
            ));
        }

        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut spans = Vec::new();
        let mut cursor = 0;
        for candidate in candidates {
            if candidate.start >= cursor {
                cursor = candidate.end;
                spans.push(candidate);
            }
        }

        tracing::debug!(spans = spans.len(), "Detected citation spans");
        spans
    }

    /// Find a reporter citation that stops after the volume, like
    /// "BGE 147". Returns the matched text so callers can name the
    /// missing components in a diagnostic.
    #[must_use]
    pub fn find_incomplete_decision<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.incomplete_decision.find(text).map(|m| m.as_str())
    }
}
