//! Immutable per-language vocabularies: statute abbreviations, marker
//! tokens and court-decision prefixes.
//!
//! The registry is built once at process start and never mutated
//! afterwards; every pipeline stage takes it by shared reference, so
//! arbitrary concurrent callers need no coordination.
//!
//! Bijection invariant: per language, every abbreviation resolves to
//! exactly one canonical statute and rendering that statute back in the
//! same language reproduces the abbreviation.

mod markers;
mod statutes;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use markers::{MarkerSet, MarkerSlot};
pub use statutes::StatuteRow;

use crate::error::{CitationError, Result};
use crate::types::Language;

/// Read-only lookup tables for statutes, markers and prefixes.
#[derive(Debug)]
pub struct Registry {
    by_abbrev: HashMap<&'static str, &'static StatuteRow>,
    by_canonical: HashMap<&'static str, &'static StatuteRow>,
    marker_slots: HashMap<&'static str, MarkerSlot>,
    marker_languages: HashMap<&'static str, Language>,
    prefix_languages: HashMap<&'static str, Language>,
}

/// Process-wide registry instance.
static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The shared process-wide registry.
#[must_use]
pub fn global() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    /// Build the lookup tables from the static statute and marker data.
    #[must_use]
    pub fn new() -> Self {
        let mut by_abbrev = HashMap::new();
        let mut by_canonical = HashMap::new();
        for row in statutes::STATUTE_ROWS {
            by_canonical.insert(row.canonical, row);
            for abbrev in row.abbrevs() {
                by_abbrev.insert(*abbrev, row);
            }
        }

        let mut marker_slots = HashMap::new();
        let mut marker_languages = HashMap::new();
        for (token, slot, language) in markers::MARKER_TABLE {
            marker_slots.insert(*token, *slot);
            marker_languages.insert(*token, *language);
        }

        let prefix_languages = markers::PREFIX_TABLE.iter().copied().collect();

        Self {
            by_abbrev,
            by_canonical,
            marker_slots,
            marker_languages,
            prefix_languages,
        }
    }

    /// Resolve a statute abbreviation (any language) to its row.
    #[must_use]
    pub fn resolve(&self, abbrev: &str) -> Option<&'static StatuteRow> {
        self.by_abbrev.get(abbrev).copied()
    }

    /// Look up a statute by canonical id.
    #[must_use]
    pub fn by_canonical(&self, canonical: &str) -> Option<&'static StatuteRow> {
        self.by_canonical.get(canonical).copied()
    }

    /// Render the abbreviation of a canonical statute in a language.
    ///
    /// # Errors
    ///
    /// Returns `CitationError::InternalInconsistency` when the canonical
    /// id is not in the table. A structured citation only ever carries
    /// ids the extractor resolved, so this indicates a registry defect.
    pub fn render_abbrev(&self, canonical: &str, language: Language) -> Result<&'static str> {
        self.by_canonical
            .get(canonical)
            .map(|row| row.abbrev(language))
            .ok_or_else(|| {
                CitationError::InternalInconsistency(format!(
                    "no registry row for canonical statute '{canonical}'"
                ))
            })
    }

    /// The full statute title in a language.
    ///
    /// # Errors
    ///
    /// Returns `CitationError::InternalInconsistency` when the canonical
    /// id is not in the table.
    pub fn full_title(&self, canonical: &str, language: Language) -> Result<&'static str> {
        self.by_canonical
            .get(canonical)
            .map(|row| row.title(language))
            .ok_or_else(|| {
                CitationError::InternalInconsistency(format!(
                    "no registry row for canonical statute '{canonical}'"
                ))
            })
    }

    /// The marker set of a language.
    #[must_use]
    pub fn markers_for(&self, language: Language) -> &'static MarkerSet {
        markers::marker_set(language)
    }

    /// The court-decision reporter prefix of a language.
    #[must_use]
    pub fn prefix_for(&self, language: Language) -> &'static str {
        markers::marker_set(language).decision_prefix
    }

    /// Which component a marker token introduces, if it is one.
    #[must_use]
    pub fn marker_slot(&self, token: &str) -> Option<MarkerSlot> {
        self.marker_slots.get(token).copied()
    }

    /// The language a marker token is evidence for, if it is a marker.
    #[must_use]
    pub fn marker_language(&self, token: &str) -> Option<Language> {
        self.marker_languages.get(token).copied()
    }

    /// The language a reporter prefix implies. "BGE" reads as German;
    /// English is never inferred from the prefix alone.
    #[must_use]
    pub fn prefix_language(&self, prefix: &str) -> Option<Language> {
        self.prefix_languages.get(prefix).copied()
    }

    /// All marker tokens across every language.
    pub fn marker_tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        markers::MARKER_TABLE.iter().map(|(token, _, _)| *token)
    }

    /// All statute rows.
    pub fn statutes(&self) -> impl Iterator<Item = &'static StatuteRow> + '_ {
        statutes::STATUTE_ROWS.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
