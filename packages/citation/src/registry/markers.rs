//! Per-language marker tokens and court-decision prefixes.
//!
//! A marker introduces an optional statute-citation subcomponent
//! (paragraph, letter or number). Each language has its own three
//! tokens; the classifier additionally uses the tokens that are unique
//! to one language as language evidence.

use crate::types::Language;

/// Which optional statute component a marker introduces.
///
/// Components always appear in this order inside a citation:
/// paragraph, then letter, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MarkerSlot {
    /// Paragraph (Abs. / al. / cpv. / para.).
    Paragraph,
    /// Letter (lit. / let. / lett.).
    Letter,
    /// Number (Ziff. / ch. / n. / no.).
    Number,
}

/// The surface vocabulary of one language: its three marker tokens, the
/// article-token casing and the court-decision reporter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet {
    /// Paragraph marker token.
    pub paragraph: &'static str,
    /// Letter marker token.
    pub letter: &'static str,
    /// Number marker token.
    pub number: &'static str,
    /// Article token with the language's casing ("Art." or "art.").
    pub article_token: &'static str,
    /// Court-decision reporter prefix. English reuses the German "BGE"
    /// by documented design.
    pub decision_prefix: &'static str,
}

impl MarkerSet {
    /// The marker token for a slot.
    #[must_use]
    pub fn token(&self, slot: MarkerSlot) -> &'static str {
        match slot {
            MarkerSlot::Paragraph => self.paragraph,
            MarkerSlot::Letter => self.letter,
            MarkerSlot::Number => self.number,
        }
    }
}

/// German surface vocabulary.
pub(crate) const MARKERS_DE: MarkerSet = MarkerSet {
    paragraph: "Abs.",
    letter: "lit.",
    number: "Ziff.",
    article_token: "Art.",
    decision_prefix: "BGE",
};

/// French surface vocabulary.
pub(crate) const MARKERS_FR: MarkerSet = MarkerSet {
    paragraph: "al.",
    letter: "let.",
    number: "ch.",
    article_token: "art.",
    decision_prefix: "ATF",
};

/// Italian surface vocabulary.
pub(crate) const MARKERS_IT: MarkerSet = MarkerSet {
    paragraph: "cpv.",
    letter: "lett.",
    number: "n.",
    article_token: "art.",
    decision_prefix: "DTF",
};

/// English surface vocabulary. Partial alias grammar: German prefix,
/// capitalized article token, French-style letter marker.
pub(crate) const MARKERS_EN: MarkerSet = MarkerSet {
    paragraph: "para.",
    letter: "let.",
    number: "no.",
    article_token: "Art.",
    decision_prefix: "BGE",
};

/// The marker union across all languages: token, slot, and the language
/// the token is evidence for. Shared tokens keep the single language the
/// classification contract assigns them ("let." stays French evidence).
pub(crate) const MARKER_TABLE: &[(&str, MarkerSlot, Language)] = &[
    ("Abs.", MarkerSlot::Paragraph, Language::De),
    ("lit.", MarkerSlot::Letter, Language::De),
    ("Ziff.", MarkerSlot::Number, Language::De),
    ("al.", MarkerSlot::Paragraph, Language::Fr),
    ("let.", MarkerSlot::Letter, Language::Fr),
    ("ch.", MarkerSlot::Number, Language::Fr),
    ("cpv.", MarkerSlot::Paragraph, Language::It),
    ("lett.", MarkerSlot::Letter, Language::It),
    ("n.", MarkerSlot::Number, Language::It),
    ("para.", MarkerSlot::Paragraph, Language::En),
    ("no.", MarkerSlot::Number, Language::En),
];

/// Reporter prefixes that imply a language. English is deliberately
/// absent: "BGE" always reads as German evidence.
pub(crate) const PREFIX_TABLE: &[(&str, Language)] = &[
    ("BGE", Language::De),
    ("ATF", Language::Fr),
    ("DTF", Language::It),
];

/// The marker set for a language.
#[must_use]
pub(crate) const fn marker_set(language: Language) -> &'static MarkerSet {
    match language {
        Language::De => &MARKERS_DE,
        Language::Fr => &MARKERS_FR,
        Language::It => &MARKERS_IT,
        Language::En => &MARKERS_EN,
    }
}
