//! Core data types for the citation engine.
//!
//! These types model Swiss federal citations independent of their
//! rendering language: the semantic identity (statute, numeric
//! components) is language-invariant, only surface tokens vary.

use serde::{Deserialize, Serialize};

use crate::error::{CitationError, Result};

/// The four official rendering languages of the engine.
///
/// English is a documented alias grammar: it reuses the German reporter
/// prefix and carries its own lowercase-leaning markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German.
    De,
    /// French.
    Fr,
    /// Italian.
    It,
    /// English.
    En,
}

impl Language {
    /// All supported languages, in canonical order.
    pub const ALL: [Language; 4] = [Language::De, Language::Fr, Language::It, Language::En];

    /// Get the two-letter language code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
            Self::En => "en",
        }
    }

    /// Parse a two-letter language code.
    ///
    /// # Errors
    ///
    /// Returns `CitationError::UnsupportedLanguage` for anything other
    /// than `de`, `fr`, `it` or `en` (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "it" => Ok(Self::It),
            "en" => Ok(Self::En),
            _ => Err(CitationError::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse citation kind assigned by the detector.
///
/// `Unknown` is the reported value for input that matches neither
/// grammar; it never reaches the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    /// Federal court decision (BGE/ATF/DTF reporter citation).
    CourtDecision,
    /// Federal statute article citation.
    Statute,
    /// No structural match.
    Unknown,
}

impl CitationKind {
    /// Get the string value used in façade results.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CourtDecision => "court_decision",
            Self::Statute => "statute",
            Self::Unknown => "unknown",
        }
    }
}

/// A candidate citation span found by the detector.
///
/// Transient: spans reference byte offsets into the scanned text and are
/// consumed by the classifier and extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationSpan {
    /// The matched text, verbatim (casing preserved).
    pub raw_text: String,

    /// Byte offset of the match start in the scanned text.
    pub start: usize,

    /// Byte offset one past the match end.
    pub end: usize,

    /// Which grammar produced the match.
    pub kind: CitationKind,
}

impl CitationSpan {
    /// Create a new span.
    #[must_use]
    pub fn new(raw_text: impl Into<String>, start: usize, end: usize, kind: CitationKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            start,
            end,
            kind,
        }
    }
}

/// Canonical statute identity plus the abbreviation as written.
///
/// The canonical id is language-independent (e.g. "code-of-obligations");
/// the surface abbreviation is kept so `parse` can report the citation
/// exactly as the source text spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatuteRef {
    /// Canonical statute id, a key into the registry.
    pub canonical: String,

    /// Abbreviation as found in the source text (e.g. "OR", "CO").
    pub abbrev: String,
}

impl StatuteRef {
    /// Create a new statute reference.
    #[must_use]
    pub fn new(canonical: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            abbrev: abbrev.into(),
        }
    }
}

/// A fully extracted citation. Immutable once built.
///
/// Numeric components are verbatim substrings of the source text; the
/// extractor never re-formats them (no leading-zero stripping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredCitation {
    /// Federal court decision: `BGE 147 IV 73`.
    CourtDecision {
        /// Reporter volume (1-3 digits, verbatim).
        volume: String,
        /// Chamber code: roman numeral I-V, optionally with a lowercase
        /// letter suffix (e.g. "Ia").
        chamber: String,
        /// Page number (1-4 digits, verbatim).
        page: String,
    },

    /// Statute article: `Art. 97 Abs. 1 lit. a Ziff. 2 OR`.
    ///
    /// Optional components are ordered paragraph, letter, number; any
    /// subset may be absent. Absent means `None`, never an empty string.
    Statute {
        /// The statute the article belongs to.
        statute: StatuteRef,
        /// Article number (e.g. "97", "97a").
        article: String,
        /// Paragraph (Abs./al./cpv./para.), if present.
        paragraph: Option<String>,
        /// Letter (lit./let./lett.), a single lowercase char, if present.
        letter: Option<char>,
        /// Number (Ziff./ch./n./no.), if present.
        number: Option<String>,
    },
}

impl StructuredCitation {
    /// The kind this citation belongs to.
    #[must_use]
    pub fn kind(&self) -> CitationKind {
        match self {
            Self::CourtDecision { .. } => CitationKind::CourtDecision,
            Self::Statute { .. } => CitationKind::Statute,
        }
    }
}

/// Component breakdown exposed by the façade `parse` operation.
///
/// Serialized for the tool-call transport; optional fields are omitted
/// when absent rather than rendered as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CitationComponents {
    /// Court decision components.
    CourtDecision {
        /// Reporter volume.
        volume: String,
        /// Chamber code.
        chamber: String,
        /// Page number.
        page: String,
    },

    /// Statute components. `statute` is the abbreviation as written in
    /// the source text; `canonical` is its language-independent id.
    Statute {
        /// Abbreviation as written (e.g. "OR").
        statute: String,
        /// Canonical statute id (e.g. "code-of-obligations").
        canonical: String,
        /// Article number.
        article: String,
        /// Paragraph, if present.
        #[serde(skip_serializing_if = "Option::is_none")]
        paragraph: Option<String>,
        /// Letter, if present.
        #[serde(skip_serializing_if = "Option::is_none")]
        letter: Option<char>,
        /// Number, if present.
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<String>,
    },
}

impl From<&StructuredCitation> for CitationComponents {
    fn from(citation: &StructuredCitation) -> Self {
        match citation {
            StructuredCitation::CourtDecision {
                volume,
                chamber,
                page,
            } => Self::CourtDecision {
                volume: volume.clone(),
                chamber: chamber.clone(),
                page: page.clone(),
            },
            StructuredCitation::Statute {
                statute,
                article,
                paragraph,
                letter,
                number,
            } => Self::Statute {
                statute: statute.abbrev.clone(),
                canonical: statute.canonical.clone(),
                article: article.clone(),
                paragraph: paragraph.clone(),
                letter: *letter,
                number: number.clone(),
            },
        }
    }
}
