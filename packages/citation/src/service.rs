//! Façade operations over the citation pipeline.
//!
//! Composes Detector -> Classifier -> Extractor -> Formatter into the
//! four public operations (`validate`, `format`, `convert`, `parse`)
//! plus batch validation and free-text scanning. Every call is an
//! independent pure pipeline over immutable input and the immutable
//! registry; there is no state between calls.
//!
//! Result types are plain serde values; the surrounding tool-call layer
//! owns the JSON transport.
//!
//! # Example
//!
//! ```
//! use jurcite_citation::service::CitationService;
//!
//! let service = CitationService::new();
//! let result = service.convert("Art. 97 Abs. 1 OR", "fr", false).unwrap();
//! assert_eq!(result.converted, "art. 97 al. 1 CO");
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, Classification};
use crate::detector::Detector;
use crate::error::{CitationError, Result};
use crate::extractor::extract;
use crate::formatter::render;
use crate::registry::{self, Registry};
use crate::types::{CitationComponents, CitationKind, Language, StructuredCitation};

/// Result of `validate`: structural validity plus the normalized
/// rendering in the citation's own source language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the input is a well-formed citation.
    pub valid: bool,

    /// Coarse citation kind; `unknown` when nothing matched.
    pub kind: CitationKind,

    /// The citation re-rendered in its source language (fixes spacing
    /// and punctuation only, no translation). Omitted when the source
    /// language could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,

    /// Component breakdown, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<CitationComponents>,

    /// Failure descriptions; empty on success.
    pub errors: Vec<String>,
}

/// Result of `format`: the citation rendered in a target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    /// The input as given.
    pub original: String,

    /// The rendered citation.
    pub formatted: String,

    /// The target language the citation was rendered in.
    pub language: Language,

    /// Coarse citation kind.
    #[serde(rename = "type")]
    pub kind: CitationKind,
}

/// Result of `convert`: a cross-language translation of the citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResult {
    /// The input as given.
    pub original: String,

    /// Resolved source language, when any signal existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<Language>,

    /// The requested target language.
    pub target_language: Language,

    /// The citation rendered in the target language.
    pub converted: String,

    /// Renderings for all four languages, keyed by language code.
    /// Present when `include_all` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_translations: Option<BTreeMap<String, String>>,
}

/// Result of `parse`: the full pipeline breakdown. Never an error; a
/// total failure is reported as `kind: unknown, is_valid: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The input as given (for `scan`: the matched span).
    pub original: String,

    /// Coarse citation kind; `unknown` when nothing matched.
    #[serde(rename = "type")]
    pub kind: CitationKind,

    /// Resolved source language, when any signal existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Component breakdown, present when extraction succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<CitationComponents>,

    /// Whether the input parsed as a well-formed citation.
    pub is_valid: bool,
}

/// A fully analyzed citation: classification plus structure.
struct DetectedCitation {
    classification: Classification,
    citation: StructuredCitation,
}

/// Pipeline failure plus the context the façade reports alongside it.
struct FacadeFailure {
    kind: CitationKind,
    language: Option<Language>,
    error: CitationError,
}

/// The citation engine façade.
///
/// Stateless apart from the compiled recognizers and the shared
/// read-only registry; safe to call from any number of threads.
#[derive(Debug)]
pub struct CitationService {
    registry: &'static Registry,
    detector: Detector,
}

/// Process-wide service used by the module-level convenience functions.
static SERVICE: LazyLock<CitationService> = LazyLock::new(CitationService::new);

impl CitationService {
    /// Create a service over the process-wide registry.
    #[must_use]
    pub fn new() -> Self {
        let registry = registry::global();
        Self {
            registry,
            detector: Detector::new(registry),
        }
    }

    /// Validate a citation.
    ///
    /// On success `normalized` carries the citation re-rendered in its
    /// source language; on failure `errors` describes what went wrong.
    /// This method never fails as a function: every outcome is a
    /// `ValidationResult`.
    #[must_use]
    pub fn validate(&self, citation: &str) -> ValidationResult {
        let text = citation.trim();
        match self.analyze(text) {
            Ok(found) => {
                let mut errors = Vec::new();
                let normalized = match found.classification.language {
                    Some(language) => {
                        match render(&found.citation, language, false, self.registry) {
                            Ok(rendered) => Some(rendered),
                            Err(error) => {
                                errors.push(error.to_string());
                                None
                            }
                        }
                    }
                    None => None,
                };
                ValidationResult {
                    valid: errors.is_empty(),
                    kind: found.citation.kind(),
                    normalized,
                    components: Some(CitationComponents::from(&found.citation)),
                    errors,
                }
            }
            Err(failure) => ValidationResult {
                valid: false,
                kind: failure.kind,
                normalized: None,
                components: None,
                errors: vec![failure.error.to_string()],
            },
        }
    }

    /// Validate a batch of citations, one outcome per input. A
    /// malformed citation never aborts processing of the others.
    pub fn validate_batch<I, S>(&self, citations: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        citations
            .into_iter()
            .map(|citation| self.validate(citation.as_ref()))
            .collect()
    }

    /// Render a citation in a target language.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` (checked before the pipeline runs), or any
    /// pipeline failure (`UnrecognizedPattern`, `MalformedCitation`,
    /// `UnknownStatute`).
    pub fn format(
        &self,
        citation: &str,
        target_language: &str,
        full_statute_name: bool,
    ) -> Result<FormatResult> {
        let language = Language::from_code(target_language)?;
        let found = self.analyze(citation.trim()).map_err(|failure| failure.error)?;
        let formatted = render(&found.citation, language, full_statute_name, self.registry)?;
        Ok(FormatResult {
            original: citation.to_string(),
            formatted,
            language,
            kind: found.citation.kind(),
        })
    }

    /// Convert a citation into a target language, optionally rendering
    /// all four languages.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CitationService::format`].
    pub fn convert(
        &self,
        citation: &str,
        target_language: &str,
        include_all: bool,
    ) -> Result<ConvertResult> {
        let target = Language::from_code(target_language)?;
        let found = self.analyze(citation.trim()).map_err(|failure| failure.error)?;
        let converted = render(&found.citation, target, false, self.registry)?;

        let all_translations = if include_all {
            let mut all = BTreeMap::new();
            for language in Language::ALL {
                all.insert(
                    language.as_str().to_string(),
                    render(&found.citation, language, false, self.registry)?,
                );
            }
            Some(all)
        } else {
            None
        };

        Ok(ConvertResult {
            original: citation.to_string(),
            source_language: found.classification.language,
            target_language: target,
            converted,
            all_translations,
        })
    }

    /// Expose the full pipeline breakdown for a citation. Never
    /// returns an error: total failure is `kind: unknown`,
    /// `is_valid: false`, no components.
    #[must_use]
    pub fn parse(&self, citation: &str) -> ParseResult {
        let text = citation.trim();
        match self.analyze(text) {
            Ok(found) => ParseResult {
                original: citation.to_string(),
                kind: found.citation.kind(),
                language: found.classification.language,
                components: Some(CitationComponents::from(&found.citation)),
                is_valid: true,
            },
            Err(failure) => ParseResult {
                original: citation.to_string(),
                kind: failure.kind,
                language: failure.language,
                components: None,
                is_valid: false,
            },
        }
    }

    /// Scan free text and parse every detected citation span, in text
    /// order. Spans that fail extraction are reported invalid, without
    /// aborting the rest.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<ParseResult> {
        self.detector
            .detect(text)
            .into_iter()
            .map(|span| {
                let classification = classify(&span, text, self.registry);
                match extract(&span, self.registry) {
                    Ok(citation) => ParseResult {
                        original: span.raw_text.clone(),
                        kind: citation.kind(),
                        language: classification.language,
                        components: Some(CitationComponents::from(&citation)),
                        is_valid: true,
                    },
                    Err(_) => ParseResult {
                        original: span.raw_text.clone(),
                        kind: span.kind,
                        language: classification.language,
                        components: None,
                        is_valid: false,
                    },
                }
            })
            .collect()
    }

    /// Run Detect -> Classify -> Extract on a single citation string.
    fn analyze(&self, text: &str) -> std::result::Result<DetectedCitation, FacadeFailure> {
        let Some(span) = self.detector.detect(text).into_iter().next() else {
            // A reporter citation that stops after the volume gets a
            // diagnostic naming the missing parts instead of the
            // generic unrecognized-pattern error.
            if let Some(partial) = self.detector.find_incomplete_decision(text) {
                return Err(FacadeFailure {
                    kind: CitationKind::CourtDecision,
                    language: None,
                    error: CitationError::malformed(format!(
                        "missing chamber and page after '{partial}'"
                    )),
                });
            }
            return Err(FacadeFailure {
                kind: CitationKind::Unknown,
                language: None,
                error: CitationError::UnrecognizedPattern(text.to_string()),
            });
        };

        let classification = classify(&span, text, self.registry);
        tracing::debug!(
            kind = ?span.kind,
            language = ?classification.language,
            raw = %span.raw_text,
            "Analyzing citation"
        );

        match extract(&span, self.registry) {
            Ok(citation) => Ok(DetectedCitation {
                classification,
                citation,
            }),
            Err(error) => Err(FacadeFailure {
                kind: span.kind,
                language: classification.language,
                error,
            }),
        }
    }
}

impl Default for CitationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a citation using the process-wide service.
#[must_use]
pub fn validate_citation(citation: &str) -> ValidationResult {
    SERVICE.validate(citation)
}

/// Validate a batch of citations using the process-wide service.
pub fn validate_citations<I, S>(citations: I) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SERVICE.validate_batch(citations)
}

/// Render a citation in a target language using the process-wide
/// service.
///
/// # Errors
///
/// See [`CitationService::format`].
pub fn format_citation(
    citation: &str,
    target_language: &str,
    full_statute_name: bool,
) -> Result<FormatResult> {
    SERVICE.format(citation, target_language, full_statute_name)
}

/// Convert a citation into a target language using the process-wide
/// service.
///
/// # Errors
///
/// See [`CitationService::convert`].
pub fn convert_citation(
    citation: &str,
    target_language: &str,
    include_all: bool,
) -> Result<ConvertResult> {
    SERVICE.convert(citation, target_language, include_all)
}

/// Parse a citation using the process-wide service.
#[must_use]
pub fn parse_citation(citation: &str) -> ParseResult {
    SERVICE.parse(citation)
}

/// Scan free text for citations using the process-wide service.
#[must_use]
pub fn scan_text(text: &str) -> Vec<ParseResult> {
    SERVICE.scan(text)
}
