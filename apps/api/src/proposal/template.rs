//! Fallback template: deterministic proposal text built only from the form.
//!
//! Same request in, same bytes out: no clock, no randomness, no I/O.

use crate::proposal::request::{FormKind, Lang, LanguageMode, ProposalRequest};
use crate::proposal::variant::Variant;
use crate::proposal::vocabulary;

/// Width of the line separating the Polish and English documents.
pub const LANGUAGE_DIVIDER_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 79;
/// Scope list in the program section shows at most this many tags.
const MAX_SCOPE_ITEMS: usize = 5;

/// Who the proposal is addressed to and who signs it.
#[derive(Debug, Clone, Copy)]
pub struct Letterhead<'a> {
    pub brand_name: &'a str,
    /// Short form used in the greeting, e.g. "DIASEN".
    pub salutation_name: &'a str,
    pub author_name: &'a str,
}

/// The `═` line placed between language versions.
pub fn language_divider() -> String {
    "═".repeat(LANGUAGE_DIVIDER_WIDTH)
}

/// Renders the proposal in every language the request asks for.
pub fn render_fallback(
    request: &ProposalRequest,
    variant: Variant,
    letterhead: &Letterhead<'_>,
) -> String {
    match request.language_mode {
        LanguageMode::Both => format!(
            "{}\n\n{}\n{}",
            render_document(request, variant, letterhead, Lang::Pl),
            language_divider(),
            render_document(request, variant, letterhead, Lang::En)
        ),
        mode => render_document(request, variant, letterhead, mode.languages()[0]),
    }
}

/// Title line for the document.
pub fn title(brand_name: &str, lang: Lang) -> String {
    match lang {
        Lang::Pl => format!("Propozycja Współpracy dla {brand_name}"),
        Lang::En => format!("A Collaboration Proposal for {brand_name}"),
    }
}

/// Opening salutation for the document.
pub fn greeting(salutation_name: &str, lang: Lang) -> String {
    match lang {
        Lang::Pl => format!("Szanowni Państwo z {salutation_name},"),
        Lang::En => format!("Dear {salutation_name} Team,"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document builder
// ────────────────────────────────────────────────────────────────────────────

struct Doc {
    out: String,
}

impl Doc {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn heading(&mut self, text: &str) {
        self.line(&format!("**{text}**"));
        self.blank();
    }

    fn ruled(&mut self, text: &str) {
        self.line(text);
        self.line(&"─".repeat(SECTION_RULE_WIDTH));
        self.blank();
    }

    fn bullets<S: AsRef<str>>(&mut self, items: &[S], empty: &str) {
        if items.is_empty() {
            self.line(&format!("• {empty}"));
        } else {
            for item in items {
                self.line(&format!("• {}", item.as_ref()));
            }
        }
        self.blank();
    }

    fn finish(self) -> String {
        self.out
    }
}

fn labels(tags: &[String], lang: Lang) -> Vec<String> {
    tags.iter()
        .map(|t| vocabulary::label(t, lang).into_owned())
        .collect()
}

/// Comma-joined labels, or the localized "not specified".
fn joined(tags: &[String], lang: Lang) -> String {
    if tags.is_empty() {
        not_specified(lang).to_string()
    } else {
        labels(tags, lang).join(", ")
    }
}

fn not_specified(lang: Lang) -> &'static str {
    lang.pick("Nie określono", "Not specified")
}

fn or_not_provided(value: &str, lang: Lang) -> &str {
    if value.is_empty() {
        lang.pick("Nie podano", "Not provided")
    } else {
        value
    }
}

fn budget_range(request: &ProposalRequest, lang: Lang) -> String {
    match (request.budget_min.as_str(), request.budget_max.as_str()) {
        ("", "") => not_specified(lang).to_string(),
        (min, "") => format!("{} {min}", lang.pick("od", "from")),
        ("", max) => format!("{} {max}", lang.pick("do", "up to")),
        (min, max) => format!("{min} – {max}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Single-language document
// ────────────────────────────────────────────────────────────────────────────

fn render_document(
    request: &ProposalRequest,
    variant: Variant,
    letterhead: &Letterhead<'_>,
    lang: Lang,
) -> String {
    let mut doc = Doc::new();
    let company = request.company_name.as_str();

    doc.heading(&title(letterhead.brand_name, lang));
    doc.line(&greeting(letterhead.salutation_name, lang));
    doc.blank();

    // Executive summary
    doc.heading(lang.pick("PODSUMOWANIE", "EXECUTIVE SUMMARY"));
    doc.line(&match lang {
        Lang::Pl => format!(
            "Mam przyjemność przedstawić propozycję współpracy przygotowaną na podstawie odpowiedzi firmy {company}, \
             skupioną na wzmocnieniu marki i obecności rynkowej {}. Rekomendowany wariant współpracy: {variant}.",
            letterhead.brand_name
        ),
        Lang::En => format!(
            "I am pleased to present a collaboration proposal prepared from the answers provided by {company}, \
             focused on brand elevation and market presence for {}. Recommended collaboration variant: {variant}.",
            letterhead.brand_name
        ),
    });
    doc.blank();

    // Contact information
    doc.heading(lang.pick("INFORMACJE KONTAKTOWE", "CONTACT INFORMATION"));
    doc.line(&format!("{}: {company}", lang.pick("Firma", "Company")));
    doc.line(&format!(
        "{}: {}",
        lang.pick("Kontakt", "Contact"),
        or_not_provided(&request.contact_line(), lang)
    ));
    doc.line(&format!(
        "Email: {}",
        or_not_provided(&request.contact_email, lang)
    ));
    doc.blank();

    doc.line(&format!(
        "{}: {variant}",
        lang.pick("REKOMENDOWANY WARIANT", "RECOMMENDED VARIANT")
    ));
    doc.blank();

    // Selected areas
    match request.kind {
        FormKind::Cooperation => {
            doc.ruled(&format!(
                "📋 {}",
                lang.pick("WYBRANE OBSZARY WSPÓŁPRACY", "SELECTED AREAS OF COOPERATION")
            ));
            doc.bullets(
                &labels(&request.areas_of_cooperation, lang),
                lang.pick("Nie wybrano jeszcze obszarów", "No areas selected yet"),
            );
            doc.ruled(&format!(
                "🎯 {}",
                lang.pick("WYBRANE SCENARIUSZE WSPÓŁPRACY", "SELECTED COOPERATION SCENARIOS")
            ));
            doc.bullets(
                &labels(&request.selected_scenarios, lang),
                lang.pick("Nie wybrano jeszcze scenariuszy", "No scenarios selected yet"),
            );
        }
        FormKind::Modules => {
            doc.ruled(&format!(
                "📋 {}",
                lang.pick("WYBRANE MODUŁY WSPÓŁPRACY", "SELECTED COOPERATION MODULES")
            ));
            doc.bullets(
                &labels(&request.modules, lang),
                lang.pick("Nie wybrano jeszcze modułów", "No modules selected yet"),
            );
            doc.line(&format!(
                "{}: {}%",
                lang.pick("Intensywność współpracy", "Collaboration intensity"),
                request.intensity
            ));
            doc.blank();
        }
    }

    // Cooperation model
    doc.ruled(&format!(
        "⚙️ {}",
        lang.pick("PREFERENCJE MODELU WSPÓŁPRACY", "COOPERATION MODEL PREFERENCES")
    ));
    let preferences = [
        (
            lang.pick("Model współpracy", "Cooperation Model"),
            &request.cooperation_model,
        ),
        (lang.pick("Forma rozliczeń", "Billing Form"), &request.billing_form),
        (
            lang.pick("Zakres zaangażowania", "Engagement Scope"),
            &request.engagement_scope,
        ),
        (
            lang.pick("Integracja z zespołem", "Team Integration"),
            &request.team_integration_level,
        ),
        (
            lang.pick("Dodatkowe preferencje", "Additional Preferences"),
            &request.additional_preferences,
        ),
    ];
    for (name, tags) in preferences {
        doc.line(&format!("{name}: {}", joined(tags, lang)));
    }
    doc.blank();

    // Budget
    doc.ruled(&format!("💰 {}", lang.pick("BUDŻET", "BUDGET")));
    doc.line(&format!(
        "{}: {}",
        lang.pick("Zakres budżetu", "Budget range"),
        budget_range(request, lang)
    ));
    let refund = if request.refund_mechanism.is_empty() {
        not_specified(lang).to_string()
    } else {
        vocabulary::label(&request.refund_mechanism, lang).into_owned()
    };
    doc.line(&format!(
        "{}: {refund}",
        lang.pick("Mechanizm zwrotu kosztów", "Refund mechanism")
    ));
    doc.blank();

    // Markets
    doc.ruled(&format!(
        "🌍 {}",
        lang.pick("RYNKI I CELE", "MARKETS AND GOALS")
    ));
    doc.line(&format!(
        "{}: {}",
        lang.pick("Rynki docelowe", "Target markets"),
        joined(&request.markets, lang)
    ));
    doc.line(&format!(
        "{}: {}",
        lang.pick("Cele biznesowe", "Business goals"),
        joined(&request.goals, lang)
    ));
    doc.line(&format!(
        "{}: {}",
        lang.pick("Planowane działania", "Planned activities"),
        joined(&request.activities, lang)
    ));
    doc.blank();

    if !request.additional_notes.is_empty() {
        doc.ruled(&format!(
            "💬 {}",
            lang.pick("DODATKOWE UWAGI", "ADDITIONAL NOTES")
        ));
        doc.line(&request.additional_notes);
        doc.blank();
    }

    // Proposed program
    doc.heading(lang.pick(
        "PROPONOWANY PROGRAM WSPÓŁPRACY",
        "PROPOSED COLLABORATION PROGRAM",
    ));
    doc.line(&match lang {
        Lang::Pl => format!(
            "Na podstawie wybranych elementów proponuję program współpracy {variant}, który łączy:"
        ),
        Lang::En => format!(
            "Based on your selections, I propose a {variant} collaboration program that combines:"
        ),
    });
    doc.blank();

    let scope_tags = match request.kind {
        FormKind::Cooperation => &request.areas_of_cooperation,
        FormKind::Modules => &request.modules,
    };
    let scope: Vec<String> = labels(scope_tags, lang)
        .into_iter()
        .take(MAX_SCOPE_ITEMS)
        .collect();
    doc.line(&format!("**{}**:", lang.pick("ZAKRES DZIAŁAŃ", "SCOPE OF ACTIVITIES")));
    doc.bullets(
        &scope,
        lang.pick(
            "Do ustalenia na podstawie rozmowy",
            "To be defined based on discussion",
        ),
    );
    doc.line(&format!("**{}**:", lang.pick("MODEL ROZLICZEŃ", "BILLING MODEL")));
    doc.bullets(
        &labels(&request.billing_form, lang),
        lang.pick(
            "Elastyczny model rozliczeń według preferencji",
            "Flexible billing model based on preferences",
        ),
    );
    doc.line(&format!(
        "**{}**:",
        lang.pick("POZIOM ZAANGAŻOWANIA", "ENGAGEMENT LEVEL")
    ));
    doc.bullets(
        &labels(&request.engagement_scope, lang),
        lang.pick(
            "Do uzgodnienia podczas konsultacji",
            "To be agreed during consultation",
        ),
    );

    // Next steps
    doc.heading(lang.pick("NASTĘPNE KROKI", "NEXT STEPS"));
    let phases: [(&str, [&str; 3]); 3] = [
        (
            lang.pick("WARSZTAT STRATEGICZNY (1-2h)", "STRATEGIC WORKSHOP (1-2h)"),
            [
                lang.pick("Doprecyzowanie celów biznesowych", "Define business objectives"),
                lang.pick("Ustalenie wskaźników sukcesu", "Set success metrics"),
                lang.pick("Wybór projektów pilotażowych", "Choose pilot projects"),
            ],
        ),
        (
            lang.pick("FAZA PILOTAŻOWA (30-60 dni)", "PILOT PHASE (30-60 days)"),
            [
                lang.pick("Realizacja wybranej inicjatywy", "Execute selected initiative"),
                lang.pick("Zebranie feedbacku i danych", "Gather feedback and data"),
                lang.pick("Optymalizacja procesów", "Optimize processes"),
            ],
        ),
        (
            lang.pick("PEŁNE WDROŻENIE", "FULL IMPLEMENTATION"),
            [
                lang.pick("Kompletny model współpracy", "Complete collaboration model"),
                lang.pick("Regularne sesje strategiczne", "Regular strategic sessions"),
                lang.pick(
                    "Skalowanie działań na podstawie wyników",
                    "Scale activities based on results",
                ),
            ],
        ),
    ];
    for (i, (phase, steps)) in phases.iter().enumerate() {
        doc.line(&format!("{}. {phase}", i + 1));
        for step in steps {
            doc.line(&format!("   • {step}"));
        }
        doc.blank();
    }

    // Closing
    doc.line(lang.pick(
        "Ten dokument stanowi bazę do dyskusji. Wszystkie parametry można dostosować do Państwa potrzeb i oczekiwań.",
        "This document serves as a discussion basis. All parameters can be adjusted to meet your specific needs and expectations.",
    ));
    doc.blank();
    doc.line(lang.pick(
        "Jestem otwarty na rozmowę o szczegółach i modyfikacjach tej propozycji.",
        "I am open to discussion of details and modifications to this proposal.",
    ));
    doc.blank();
    doc.line(&format!("**{}**", lang.pick("Z poważaniem,", "Best regards,")));
    doc.line(&format!("**{}**", letterhead.author_name));

    doc.finish()
}
