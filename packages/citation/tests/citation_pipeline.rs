//! End-to-end properties of the citation pipeline.
//!
//! Exercises the full Detect -> Classify -> Extract -> Format chain
//! through the façade: translation of reporter citations, statute
//! conversion across all four languages, loss-free language round-trips
//! and the failure taxonomy.

use pretty_assertions::assert_eq;

use jurcite_citation::{
    convert_citation, format_citation, parse_citation, registry, render, validate_citation,
    validate_citations, CitationComponents, CitationKind, Language, StatuteRef,
    StructuredCitation,
};

#[test]
fn decision_reporter_translates_across_languages() {
    assert_eq!(
        format_citation("BGE 147 IV 73", "fr", false).unwrap().formatted,
        "ATF 147 IV 73"
    );
    assert_eq!(
        format_citation("BGE 147 IV 73", "it", false).unwrap().formatted,
        "DTF 147 IV 73"
    );
    // English has no reporter prefix of its own and keeps the German one.
    assert_eq!(
        format_citation("BGE 147 IV 73", "en", false).unwrap().formatted,
        "BGE 147 IV 73"
    );
}

#[test]
fn statute_converts_to_french() {
    let result = convert_citation("Art. 97 Abs. 1 OR", "fr", false).unwrap();
    assert_eq!(result.converted, "art. 97 al. 1 CO");
    assert_eq!(result.source_language, Some(Language::De));
}

#[test]
fn statute_converts_to_all_languages() {
    let result = convert_citation("Art. 97 Abs. 1 OR", "fr", true).unwrap();
    let all = result.all_translations.expect("requested all translations");
    assert_eq!(all["it"], "art. 97 cpv. 1 CO");
    assert_eq!(all["en"], "Art. 97 para. 1 CO");
}

#[test]
fn parse_exposes_full_component_breakdown() {
    let result = parse_citation("Art. 97 Abs. 1 lit. a Ziff. 2 OR");
    assert!(result.is_valid);
    assert_eq!(
        result.components,
        Some(CitationComponents::Statute {
            statute: "OR".to_string(),
            canonical: "code-of-obligations".to_string(),
            article: "97".to_string(),
            paragraph: Some("1".to_string()),
            letter: Some('a'),
            number: Some("2".to_string()),
        })
    );
}

#[test]
fn invalid_input_reports_unknown_kind() {
    let result = validate_citation("INVALID CITATION 123");
    assert!(!result.valid);
    assert_eq!(result.kind, CitationKind::Unknown);
}

#[test]
fn bare_statute_is_valid_with_absent_components() {
    let result = validate_citation("Art. 97 OR");
    assert!(result.valid);
    let Some(CitationComponents::Statute {
        paragraph,
        letter,
        number,
        ..
    }) = result.components
    else {
        panic!("expected statute components");
    };
    // Absent, not empty strings.
    assert_eq!(paragraph, None);
    assert_eq!(letter, None);
    assert_eq!(number, None);
}

#[test]
fn incomplete_decision_names_missing_components() {
    let result = validate_citation("BGE 147");
    assert!(!result.valid);
    assert!(result.errors[0].contains("chamber"));
    assert!(result.errors[0].contains("page"));
}

#[test]
fn registry_round_trip_per_language() {
    let registry = registry::global();
    for row in registry.statutes() {
        for language in Language::ALL {
            let abbrev = row.abbrev(language);
            let resolved = registry.resolve(abbrev).expect("abbrev resolves");
            assert_eq!(
                registry
                    .render_abbrev(resolved.canonical, language)
                    .expect("render succeeds"),
                abbrev
            );
        }
    }
}

/// Sample citations whose identity must survive any translation chain.
fn samples() -> Vec<StructuredCitation> {
    vec![
        StructuredCitation::CourtDecision {
            volume: "147".to_string(),
            chamber: "IV".to_string(),
            page: "73".to_string(),
        },
        StructuredCitation::CourtDecision {
            volume: "121".to_string(),
            chamber: "Ia".to_string(),
            page: "42".to_string(),
        },
        StructuredCitation::Statute {
            statute: StatuteRef::new("code-of-obligations", "OR"),
            article: "97".to_string(),
            paragraph: Some("1".to_string()),
            letter: Some('a'),
            number: Some("2".to_string()),
        },
        StructuredCitation::Statute {
            statute: StatuteRef::new("civil-code", "ZGB"),
            article: "8".to_string(),
            paragraph: None,
            letter: None,
            number: None,
        },
        StructuredCitation::Statute {
            statute: StatuteRef::new("criminal-procedure-code", "StPO"),
            article: "130".to_string(),
            paragraph: None,
            letter: Some('b'),
            number: None,
        },
    ]
}

#[test]
fn language_round_trip_is_lossless() {
    let registry = registry::global();
    for citation in samples() {
        for source in Language::ALL {
            let rendered = render(&citation, source, false, registry).expect("render succeeds");
            for target in Language::ALL {
                let expected = render(&citation, target, false, registry).expect("render succeeds");
                let converted = convert_citation(&rendered, target.as_str(), false)
                    .unwrap_or_else(|e| panic!("failed to convert '{rendered}': {e}"));
                assert_eq!(converted.converted, expected, "{source} -> {target}");
            }
        }
    }
}

#[test]
fn formatting_is_idempotent() {
    for citation in samples() {
        for language in Language::ALL {
            let once = render(&citation, language, false, registry::global()).expect("render");
            let twice = convert_citation(&once, language.as_str(), false)
                .expect("reparse succeeds")
                .converted;
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn batch_validation_yields_one_outcome_per_input() {
    let inputs = [
        "BGE 147 IV 73",
        "garbage",
        "Art. 97 Abs. 1 OR",
        "BGE 147",
        "Art. 12 XYZ",
    ];
    let results = validate_citations(inputs);
    assert_eq!(results.len(), inputs.len());
    assert_eq!(
        results.iter().map(|r| r.valid).collect::<Vec<_>>(),
        vec![true, false, true, false, false]
    );
}

#[test]
fn full_statute_name_is_presentation_only() {
    let plain = format_citation("Art. 97 OR", "it", false).unwrap().formatted;
    let titled = format_citation("Art. 97 OR", "it", true).unwrap().formatted;
    assert_eq!(plain, "art. 97 CO");
    assert_eq!(titled, "art. 97 CO (Codice delle obbligazioni)");
    assert!(titled.starts_with(&plain));
}
