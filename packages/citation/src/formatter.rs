//! Rendering of structured citations into a target language.
//!
//! Only surface tokens vary by language; the citation's identity
//! (statute, numeric components) is carried through unchanged. Absent
//! optional components contribute nothing: no empty markers ever appear
//! in output.

use crate::error::Result;
use crate::registry::Registry;
use crate::types::{Language, StructuredCitation};

/// Render a citation in the given language.
///
/// With `full_statute_name`, statute citations get the parenthesized
/// full title in the target language appended. Presentation only: the
/// flag does not alter the citation's identity.
///
/// # Errors
///
/// Never fails for a well-formed citation whose statute is in the
/// registry; a miss is an `InternalInconsistency` (registry defect, not
/// a user error).
pub fn render(
    citation: &StructuredCitation,
    language: Language,
    full_statute_name: bool,
    registry: &Registry,
) -> Result<String> {
    match citation {
        StructuredCitation::CourtDecision {
            volume,
            chamber,
            page,
        } => Ok(format!(
            "{} {volume} {chamber} {page}",
            registry.prefix_for(language)
        )),

        StructuredCitation::Statute {
            statute,
            article,
            paragraph,
            letter,
            number,
        } => {
            let markers = registry.markers_for(language);
            let mut rendered = format!("{} {article}", markers.article_token);

            if let Some(paragraph) = paragraph {
                rendered.push_str(&format!(" {} {paragraph}", markers.paragraph));
            }
            if let Some(letter) = letter {
                rendered.push_str(&format!(" {} {letter}", markers.letter));
            }
            if let Some(number) = number {
                rendered.push_str(&format!(" {} {number}", markers.number));
            }

            rendered.push(' ');
            rendered.push_str(registry.render_abbrev(&statute.canonical, language)?);

            if full_statute_name {
                let title = registry.full_title(&statute.canonical, language)?;
                rendered.push_str(&format!(" ({title})"));
            }

            Ok(rendered)
        }
    }
}
