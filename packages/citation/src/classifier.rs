//! Citation kind and source-language resolution.
//!
//! Language precedence is fixed and must not be reordered:
//!
//! 1. an explicit marker inside the span (Abs./lit./Ziff. -> de,
//!    al./let./ch. -> fr, cpv./lett./n. -> it, para./no. -> en);
//! 2. the court-decision reporter prefix (BGE -> de, ATF -> fr,
//!    DTF -> it; English is never inferred from the prefix);
//! 3. surrounding context, scored against per-language keyword lists;
//! 4. unresolved. Callers must treat "no language" as a distinct value;
//!    it is never defaulted to German.
//!
//! When a reporter prefix and the surrounding free text disagree (an
//! ATF citation embedded in German prose), the prefix wins. That is the
//! contract, not a bug.

use crate::registry::Registry;
use crate::types::{CitationKind, CitationSpan, Language};

/// How many whitespace tokens on each side of a span the context scan
/// considers.
const CONTEXT_WINDOW: usize = 10;

/// Language-indicative keywords, lowercased: court-name variants and
/// generic legal terms. Ordered as `Language::ALL`.
const CONTEXT_KEYWORDS: [&[&str]; 4] = [
    &[
        "bundesgericht",
        "bundesgerichts",
        "urteil",
        "urteils",
        "entscheid",
        "erwägung",
        "gemäss",
        "gericht",
        "recht",
        "vergleiche",
    ],
    &[
        "tribunal",
        "fédéral",
        "arrêt",
        "considérant",
        "selon",
        "droit",
        "voir",
        "jugement",
    ],
    &[
        "tribunale",
        "federale",
        "sentenza",
        "considerando",
        "secondo",
        "diritto",
        "vedi",
        "giudizio",
    ],
    &[
        "federal",
        "supreme",
        "court",
        "judgment",
        "ruling",
        "decision",
        "pursuant",
        "law",
        "see",
    ],
];

/// Outcome of classification: the coarse kind plus the resolved source
/// language, if any signal existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Coarse citation kind, as assigned by the detector.
    pub kind: CitationKind,
    /// Resolved source language. `None` means no signal; never a
    /// silent German default.
    pub language: Option<Language>,
}

/// Classify a detected span within its surrounding text.
#[must_use]
pub fn classify(span: &CitationSpan, text: &str, registry: &Registry) -> Classification {
    let language = marker_language(span, registry)
        .or_else(|| prefix_language(span, registry))
        .or_else(|| context_language(span, text));

    tracing::debug!(kind = ?span.kind, language = ?language, "Classified citation span");

    Classification {
        kind: span.kind,
        language,
    }
}

/// Rule 1: an explicit marker token unambiguously implies one language.
fn marker_language(span: &CitationSpan, registry: &Registry) -> Option<Language> {
    span.raw_text
        .split_whitespace()
        .find_map(|token| registry.marker_language(token))
}

/// Rule 2: the reporter prefix implies the language of a decision
/// citation. Statute spans carry no prefix.
fn prefix_language(span: &CitationSpan, registry: &Registry) -> Option<Language> {
    if span.kind != CitationKind::CourtDecision {
        return None;
    }
    span.raw_text
        .split_whitespace()
        .next()
        .and_then(|prefix| registry.prefix_language(prefix))
}

/// Rule 3: scan the surrounding tokens for language-indicative
/// keywords and pick the language with the most hits. Ties stay
/// unresolved.
fn context_language(span: &CitationSpan, text: &str) -> Option<Language> {
    let before = text[..span.start].split_whitespace().rev().take(CONTEXT_WINDOW);
    let after = text[span.end..].split_whitespace().take(CONTEXT_WINDOW);

    let mut hits = [0usize; 4];
    for token in before.chain(after) {
        let token = normalize_token(token);
        if token.is_empty() {
            continue;
        }
        for (index, keywords) in CONTEXT_KEYWORDS.iter().enumerate() {
            if keywords.contains(&token.as_str()) {
                hits[index] += 1;
            }
        }
    }

    let best = *hits.iter().max()?;
    if best == 0 {
        return None;
    }
    let mut winners = hits
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == best)
        .map(|(index, _)| Language::ALL[index]);
    match (winners.next(), winners.next()) {
        (Some(language), None) => Some(language),
        _ => None,
    }
}

/// Strip surrounding punctuation and lowercase for keyword comparison.
fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Detector;
    use crate::registry;

    fn classify_first(text: &str) -> Classification {
        let registry = registry::global();
        let spans = Detector::new(registry).detect(text);
        assert!(!spans.is_empty(), "no span detected in: {text}");
        classify(&spans[0], text, registry)
    }

    #[test]
    fn test_marker_implies_language() {
        assert_eq!(classify_first("Art. 97 Abs. 1 OR").language, Some(Language::De));
        assert_eq!(classify_first("art. 97 al. 1 CO").language, Some(Language::Fr));
        assert_eq!(classify_first("art. 97 cpv. 1 CO").language, Some(Language::It));
        assert_eq!(classify_first("Art. 97 para. 1 CO").language, Some(Language::En));
    }

    #[test]
    fn test_prefix_implies_language() {
        assert_eq!(classify_first("BGE 147 IV 73").language, Some(Language::De));
        assert_eq!(classify_first("ATF 147 IV 73").language, Some(Language::Fr));
        assert_eq!(classify_first("DTF 147 IV 73").language, Some(Language::It));
    }

    #[test]
    fn test_prefix_wins_over_context() {
        // Documented conflict case: an ATF citation embedded in German
        // prose stays French.
        let text = "Das Bundesgericht hat im Urteil ATF 147 IV 73 entschieden.";
        let classification = classify_first(text);
        assert_eq!(classification.kind, CitationKind::CourtDecision);
        assert_eq!(classification.language, Some(Language::Fr));
    }

    #[test]
    fn test_context_resolves_bare_statute() {
        let text = "Das Bundesgericht stützt sich gemäss Urteil auf Art. 97 OR.";
        assert_eq!(classify_first(text).language, Some(Language::De));

        let text = "Le Tribunal fédéral applique l'art. 97 CO selon l'arrêt.";
        assert_eq!(classify_first(text).language, Some(Language::Fr));
    }

    #[test]
    fn test_no_signal_stays_unresolved() {
        let classification = classify_first("Art. 97 OR");
        assert_eq!(classification.kind, CitationKind::Statute);
        assert_eq!(classification.language, None);
    }

    #[test]
    fn test_context_tie_stays_unresolved() {
        // One German and one Italian keyword: no unique winner.
        let text = "Bundesgericht sentenza Art. 97 CO";
        assert_eq!(classify_first(text).language, None);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("(Urteil)"), "urteil");
        assert_eq!(normalize_token("arrêt,"), "arrêt");
        assert_eq!(normalize_token("---"), "");
    }
}
