//! The federal statute table.
//!
//! One row per statute, carrying the canonical id, the abbreviation in
//! each of the four languages and the full title in each language.
//! Adding a statute means adding one row here; no other component
//! changes.
//!
//! German/French/Italian abbreviations are the official SR ones; the
//! English abbreviations follow the admin.ch translations (SCC, CrimPC,
//! DEBA, FADP, ...).

use crate::types::Language;

/// A single statute row: canonical identity plus per-language surface
/// forms. Abbreviations and titles are indexed in `Language::ALL` order
/// (de, fr, it, en).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatuteRow {
    /// Language-independent canonical id (e.g. "code-of-obligations").
    pub canonical: &'static str,
    abbrevs: [&'static str; 4],
    titles: [&'static str; 4],
}

impl StatuteRow {
    const fn new(
        canonical: &'static str,
        abbrevs: [&'static str; 4],
        titles: [&'static str; 4],
    ) -> Self {
        Self {
            canonical,
            abbrevs,
            titles,
        }
    }

    /// The abbreviation in the given language.
    #[must_use]
    pub fn abbrev(&self, language: Language) -> &'static str {
        self.abbrevs[language_index(language)]
    }

    /// The full title in the given language.
    #[must_use]
    pub fn title(&self, language: Language) -> &'static str {
        self.titles[language_index(language)]
    }

    /// All four abbreviations, in `Language::ALL` order.
    #[must_use]
    pub fn abbrevs(&self) -> &[&'static str; 4] {
        &self.abbrevs
    }
}

/// Index of a language into the per-row arrays.
const fn language_index(language: Language) -> usize {
    match language {
        Language::De => 0,
        Language::Fr => 1,
        Language::It => 2,
        Language::En => 3,
    }
}

/// The statute table. Kept sorted by SR number of the underlying act.
pub(crate) const STATUTE_ROWS: &[StatuteRow] = &[
    StatuteRow::new(
        "federal-constitution",
        ["BV", "Cst.", "Cost.", "Cst."],
        [
            "Bundesverfassung der Schweizerischen Eidgenossenschaft",
            "Constitution fédérale de la Confédération suisse",
            "Costituzione federale della Confederazione Svizzera",
            "Federal Constitution of the Swiss Confederation",
        ],
    ),
    StatuteRow::new(
        "civil-code",
        ["ZGB", "CC", "CC", "CC"],
        [
            "Schweizerisches Zivilgesetzbuch",
            "Code civil suisse",
            "Codice civile svizzero",
            "Swiss Civil Code",
        ],
    ),
    StatuteRow::new(
        "code-of-obligations",
        ["OR", "CO", "CO", "CO"],
        [
            "Obligationenrecht",
            "Code des obligations",
            "Codice delle obbligazioni",
            "Code of Obligations",
        ],
    ),
    StatuteRow::new(
        "private-international-law-act",
        ["IPRG", "LDIP", "LDIP", "PILA"],
        [
            "Bundesgesetz über das Internationale Privatrecht",
            "Loi fédérale sur le droit international privé",
            "Legge federale sul diritto internazionale privato",
            "Federal Act on Private International Law",
        ],
    ),
    StatuteRow::new(
        "unfair-competition-act",
        ["UWG", "LCD", "LCSl", "UCA"],
        [
            "Bundesgesetz gegen den unlauteren Wettbewerb",
            "Loi fédérale contre la concurrence déloyale",
            "Legge federale contro la concorrenza sleale",
            "Federal Act against Unfair Competition",
        ],
    ),
    StatuteRow::new(
        "data-protection-act",
        ["DSG", "LPD", "LPD", "FADP"],
        [
            "Bundesgesetz über den Datenschutz",
            "Loi fédérale sur la protection des données",
            "Legge federale sulla protezione dei dati",
            "Federal Act on Data Protection",
        ],
    ),
    StatuteRow::new(
        "debt-enforcement-bankruptcy-act",
        ["SchKG", "LP", "LEF", "DEBA"],
        [
            "Bundesgesetz über Schuldbetreibung und Konkurs",
            "Loi fédérale sur la poursuite pour dettes et la faillite",
            "Legge federale sulla esecuzione e sul fallimento",
            "Federal Act on Debt Enforcement and Bankruptcy",
        ],
    ),
    StatuteRow::new(
        "criminal-code",
        ["StGB", "CP", "CP", "SCC"],
        [
            "Schweizerisches Strafgesetzbuch",
            "Code pénal suisse",
            "Codice penale svizzero",
            "Swiss Criminal Code",
        ],
    ),
    StatuteRow::new(
        "vat-act",
        ["MWSTG", "LTVA", "LIVA", "VATA"],
        [
            "Bundesgesetz über die Mehrwertsteuer",
            "Loi fédérale régissant la taxe sur la valeur ajoutée",
            "Legge federale concernente l'imposta sul valore aggiunto",
            "Federal Act on Value Added Tax",
        ],
    ),
    StatuteRow::new(
        "health-insurance-act",
        ["KVG", "LAMal", "LAMal", "HIA"],
        [
            "Bundesgesetz über die Krankenversicherung",
            "Loi fédérale sur l'assurance-maladie",
            "Legge federale sull'assicurazione malattie",
            "Federal Act on Health Insurance",
        ],
    ),
    StatuteRow::new(
        "administrative-procedure-act",
        ["VwVG", "PA", "PA", "APA"],
        [
            "Bundesgesetz über das Verwaltungsverfahren",
            "Loi fédérale sur la procédure administrative",
            "Legge federale sulla procedura amministrativa",
            "Federal Act on Administrative Procedure",
        ],
    ),
    StatuteRow::new(
        "federal-supreme-court-act",
        ["BGG", "LTF", "LTF", "FSCA"],
        [
            "Bundesgesetz über das Bundesgericht",
            "Loi sur le Tribunal fédéral",
            "Legge sul Tribunale federale",
            "Federal Supreme Court Act",
        ],
    ),
    StatuteRow::new(
        "criminal-procedure-code",
        ["StPO", "CPP", "CPP", "CrimPC"],
        [
            "Schweizerische Strafprozessordnung",
            "Code de procédure pénale suisse",
            "Codice di diritto processuale penale svizzero",
            "Swiss Criminal Procedure Code",
        ],
    ),
    StatuteRow::new(
        "civil-procedure-code",
        ["ZPO", "CPC", "CPC", "CPC"],
        [
            "Schweizerische Zivilprozessordnung",
            "Code de procédure civile suisse",
            "Codice di diritto processuale civile svizzero",
            "Swiss Civil Procedure Code",
        ],
    ),
];
