//! Structural extraction of detected spans.
//!
//! Decisions copy their numeric components verbatim (no re-formatting,
//! no leading-zero stripping). Statutes resolve the trailing
//! abbreviation against the registry and walk the remaining tokens as
//! ordered marker groups. Anything that is neither a recognized marker
//! group nor the abbreviation is a malformed citation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CitationError, Result};
use crate::registry::{MarkerSlot, Registry};
use crate::types::{CitationKind, CitationSpan, StatuteRef, StructuredCitation};

/// Article numbers: digits with an optional letter suffix ("97", "97a",
/// "59quater").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[a-z]*$").expect("valid regex"));

/// Paragraph and number values: digits with an optional suffix
/// ("1", "1bis").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[a-z]*$").expect("valid regex"));

/// Extract a structured citation from a detected span.
///
/// # Errors
///
/// * `UnknownStatute` when the trailing abbreviation is not in the
///   registry;
/// * `MalformedCitation` for dangling markers, out-of-order or
///   duplicated components, invalid values, or stray tokens;
/// * `UnrecognizedPattern` for spans of unknown kind (never produced by
///   the detector, handled for exhaustiveness).
pub fn extract(span: &CitationSpan, registry: &Registry) -> Result<StructuredCitation> {
    match span.kind {
        CitationKind::CourtDecision => extract_decision(span),
        CitationKind::Statute => extract_statute(span, registry),
        CitationKind::Unknown => Err(CitationError::UnrecognizedPattern(span.raw_text.clone())),
    }
}

/// Copy volume, chamber and page substrings verbatim.
fn extract_decision(span: &CitationSpan) -> Result<StructuredCitation> {
    let tokens: Vec<&str> = span.raw_text.split_whitespace().collect();
    let [_prefix, volume, chamber, page] = tokens.as_slice() else {
        return Err(CitationError::malformed(format!(
            "expected 'prefix volume chamber page', got '{}'",
            span.raw_text
        )));
    };
    Ok(StructuredCitation::CourtDecision {
        volume: (*volume).to_string(),
        chamber: (*chamber).to_string(),
        page: (*page).to_string(),
    })
}

/// Resolve the abbreviation and walk the optional marker groups.
fn extract_statute(span: &CitationSpan, registry: &Registry) -> Result<StructuredCitation> {
    let tokens: Vec<&str> = span.raw_text.split_whitespace().collect();
    let [_art, article, middle @ .., abbrev_token] = tokens.as_slice() else {
        return Err(CitationError::malformed(format!(
            "expected 'Art. number ... abbreviation', got '{}'",
            span.raw_text
        )));
    };

    if !ARTICLE_PATTERN.is_match(article) {
        return Err(CitationError::malformed(format!(
            "invalid article number '{article}'"
        )));
    }

    // A marker in abbreviation position has no value and no statute can
    // follow it.
    if registry.marker_slot(abbrev_token).is_some() {
        return Err(CitationError::malformed(format!(
            "marker '{abbrev_token}' has no value"
        )));
    }

    let statute = resolve_abbrev(abbrev_token, registry)?;

    let mut paragraph = None;
    let mut letter = None;
    let mut number = None;
    let mut last_slot: Option<MarkerSlot> = None;

    let mut rest = middle;
    while let [marker, tail @ ..] = rest {
        let Some(slot) = registry.marker_slot(marker) else {
            return Err(CitationError::malformed(format!(
                "unexpected token '{marker}'"
            )));
        };
        if last_slot.is_some_and(|previous| slot <= previous) {
            return Err(CitationError::malformed(format!(
                "marker '{marker}' out of order or duplicated"
            )));
        }
        let [value, tail @ ..] = tail else {
            return Err(CitationError::malformed(format!(
                "marker '{marker}' has no value"
            )));
        };
        if registry.marker_slot(value).is_some() {
            return Err(CitationError::malformed(format!(
                "marker '{marker}' has no value"
            )));
        }

        match slot {
            MarkerSlot::Paragraph => paragraph = Some(parse_value(marker, value)?),
            MarkerSlot::Letter => letter = Some(parse_letter(value)?),
            MarkerSlot::Number => number = Some(parse_value(marker, value)?),
        }
        last_slot = Some(slot);
        rest = tail;
    }

    Ok(StructuredCitation::Statute {
        statute,
        article: (*article).to_string(),
        paragraph,
        letter,
        number,
    })
}

/// Resolve the abbreviation token, tolerating sentence punctuation:
/// "OR." resolves as "OR", while registry entries that themselves end
/// in a period ("Cst.") resolve exactly.
fn resolve_abbrev(token: &str, registry: &Registry) -> Result<StatuteRef> {
    if let Some(row) = registry.resolve(token) {
        return Ok(StatuteRef::new(row.canonical, token));
    }
    if let Some(trimmed) = token.strip_suffix('.') {
        if let Some(row) = registry.resolve(trimmed) {
            return Ok(StatuteRef::new(row.canonical, trimmed));
        }
    }
    Err(CitationError::UnknownStatute(token.to_string()))
}

/// Validate a paragraph or number value.
fn parse_value(marker: &str, value: &str) -> Result<String> {
    if VALUE_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(CitationError::malformed(format!(
            "invalid value '{value}' after marker '{marker}'"
        )))
    }
}

/// A letter component is a single lowercase character.
fn parse_letter(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
        _ => Err(CitationError::malformed(format!(
            "letter must be a single lowercase character, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Detector;
    use crate::registry;

    fn extract_from(text: &str) -> Result<StructuredCitation> {
        let registry = registry::global();
        let spans = Detector::new(registry).detect(text);
        assert_eq!(spans.len(), 1, "expected one span in: {text}");
        extract(&spans[0], registry)
    }

    #[test]
    fn test_extract_decision_verbatim() {
        let citation = extract_from("BGE 147 IV 73").unwrap();
        assert_eq!(
            citation,
            StructuredCitation::CourtDecision {
                volume: "147".to_string(),
                chamber: "IV".to_string(),
                page: "73".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_decision_no_zero_stripping() {
        let citation = extract_from("BGE 099 II 01").unwrap();
        let StructuredCitation::CourtDecision { volume, page, .. } = citation else {
            panic!("expected decision");
        };
        assert_eq!(volume, "099");
        assert_eq!(page, "01");
    }

    #[test]
    fn test_extract_statute_bare() {
        let citation = extract_from("Art. 97 OR").unwrap();
        let StructuredCitation::Statute {
            statute,
            article,
            paragraph,
            letter,
            number,
        } = citation
        else {
            panic!("expected statute");
        };
        assert_eq!(statute.canonical, "code-of-obligations");
        assert_eq!(statute.abbrev, "OR");
        assert_eq!(article, "97");
        // Absent components are None, never empty strings.
        assert_eq!(paragraph, None);
        assert_eq!(letter, None);
        assert_eq!(number, None);
    }

    #[test]
    fn test_extract_statute_all_components() {
        let citation = extract_from("Art. 97 Abs. 1 lit. a Ziff. 2 OR").unwrap();
        assert_eq!(
            citation,
            StructuredCitation::Statute {
                statute: StatuteRef::new("code-of-obligations", "OR"),
                article: "97".to_string(),
                paragraph: Some("1".to_string()),
                letter: Some('a'),
                number: Some("2".to_string()),
            }
        );
    }

    #[test]
    fn test_extract_statute_subset_of_components() {
        let citation = extract_from("art. 336 al. 1 let. b CO").unwrap();
        let StructuredCitation::Statute {
            paragraph,
            letter,
            number,
            ..
        } = citation
        else {
            panic!("expected statute");
        };
        assert_eq!(paragraph, Some("1".to_string()));
        assert_eq!(letter, Some('b'));
        assert_eq!(number, None);
    }

    #[test]
    fn test_extract_trailing_punctuation_tolerated() {
        let citation = extract_from("Art. 97 OR.").unwrap();
        let StructuredCitation::Statute { statute, .. } = citation else {
            panic!("expected statute");
        };
        assert_eq!(statute.abbrev, "OR");
    }

    #[test]
    fn test_unknown_statute() {
        let err = extract_from("Art. 12 XYZ").unwrap_err();
        assert_eq!(err, CitationError::UnknownStatute("XYZ".to_string()));
    }

    #[test]
    fn test_dangling_marker_is_malformed() {
        let err = extract_from("Art. 97 Abs. OR").unwrap_err();
        let CitationError::MalformedCitation { component } = err else {
            panic!("expected malformed, got {err:?}");
        };
        assert!(component.contains("Abs."));
    }

    #[test]
    fn test_out_of_order_markers_are_malformed() {
        let err = extract_from("Art. 97 lit. a Abs. 1 OR").unwrap_err();
        assert!(matches!(err, CitationError::MalformedCitation { .. }));
    }

    #[test]
    fn test_duplicate_marker_is_malformed() {
        let err = extract_from("Art. 97 Abs. 1 Abs. 2 OR").unwrap_err();
        assert!(matches!(err, CitationError::MalformedCitation { .. }));
    }

    #[test]
    fn test_multichar_letter_is_malformed() {
        let err = extract_from("Art. 97 Abs. 1 lit. abc OR").unwrap_err();
        let CitationError::MalformedCitation { component } = err else {
            panic!("expected malformed");
        };
        assert!(component.contains("abc"));
    }

    #[test]
    fn test_unknown_kind_is_unrecognized() {
        let span = CitationSpan::new("???", 0, 3, CitationKind::Unknown);
        let err = extract(&span, registry::global()).unwrap_err();
        assert!(matches!(err, CitationError::UnrecognizedPattern(_)));
    }
}
