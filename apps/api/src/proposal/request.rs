//! Questionnaire payloads: the loose wire shape and the validated record.
//!
//! `ProposalForm` accepts whatever the browser sends. `validate()` is the only
//! place defaults are applied, so everything downstream works with a total
//! `ProposalRequest`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::AppError;

/// Intensity assumed when the form does not carry the slider.
pub const DEFAULT_INTENSITY: u8 = 50;
pub const MAX_INTENSITY: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Output language of the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageMode {
    #[default]
    Pl,
    En,
    Both,
}

impl LanguageMode {
    /// Unknown or missing values fall back to Polish.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("en") => LanguageMode::En,
            Some("both") => LanguageMode::Both,
            _ => LanguageMode::Pl,
        }
    }

    /// Languages to render, in document order.
    pub fn languages(self) -> &'static [Lang] {
        match self {
            LanguageMode::Pl => &[Lang::Pl],
            LanguageMode::En => &[Lang::En],
            LanguageMode::Both => &[Lang::Pl, Lang::En],
        }
    }

    /// Picks the user-facing message for this mode.
    pub fn localize(self, pl: &str, en: &str) -> String {
        match self {
            LanguageMode::Pl => pl.to_string(),
            LanguageMode::En => en.to_string(),
            LanguageMode::Both => format!("{pl} / {en}"),
        }
    }
}

/// A single rendering language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Pl,
    En,
}

impl Lang {
    /// Chooses between the Polish and English variant of a phrase.
    pub fn pick<'a>(self, pl: &'a str, en: &'a str) -> &'a str {
        match self {
            Lang::Pl => pl,
            Lang::En => en,
        }
    }
}

/// Which questionnaire produced the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Areas of cooperation + scenarios.
    Cooperation,
    /// Modules + intensity slider, budget and markets.
    Modules,
}

/// Fields that must be present for a form kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    CompanyName,
    ContactPerson,
    ContactEmail,
}

impl RequiredField {
    pub fn message(self, language: LanguageMode) -> String {
        match self {
            RequiredField::CompanyName => {
                language.localize("Nazwa firmy jest wymagana", "Company name is required")
            }
            RequiredField::ContactPerson => language.localize(
                "Osoba kontaktowa jest wymagana",
                "Contact person is required",
            ),
            RequiredField::ContactEmail => {
                language.localize("Adres e-mail jest wymagany", "Email address is required")
            }
        }
    }
}

impl FormKind {
    pub fn required_fields(self) -> &'static [RequiredField] {
        match self {
            FormKind::Cooperation => &[RequiredField::CompanyName],
            FormKind::Modules => &[
                RequiredField::CompanyName,
                RequiredField::ContactPerson,
                RequiredField::ContactEmail,
            ],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shape
// ────────────────────────────────────────────────────────────────────────────

/// Request body as posted by the questionnaire. Every field may be absent.
///
/// Fields of the wrong JSON type are treated as absent rather than failing
/// the whole body: a list field that is not an array is empty, a scalar where
/// text is expected is stringified.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalForm {
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_role: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_email: Option<String>,

    #[serde(deserialize_with = "lenient_list")]
    pub areas_of_cooperation: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub cooperation_model: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub billing_form: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub engagement_scope: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub team_integration_level: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub additional_preferences: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub selected_scenarios: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub modules: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub goals: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub markets: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub activities: Option<Vec<String>>,

    #[serde(deserialize_with = "lenient_intensity")]
    pub intensity: Option<u32>,
    #[serde(deserialize_with = "lenient_text")]
    pub budget_min: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub budget_max: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub refund_mechanism: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub additional_notes: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub language_mode: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub send_email: Option<bool>,
    #[serde(deserialize_with = "lenient_text")]
    pub email_to_send: Option<String>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Anything but an array is treated as no selection. Non-scalar entries are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        _ => None,
    })
}

/// Any finite number, or a numeric string, rounded and floored at zero.
fn lenient_intensity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, u32::MAX as f64) as u32))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Validated record
// ────────────────────────────────────────────────────────────────────────────

/// A fully defaulted questionnaire submission. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    pub kind: FormKind,

    pub company_name: String,
    pub contact_person: String,
    pub contact_role: String,
    pub contact_email: String,

    pub areas_of_cooperation: Vec<String>,
    pub cooperation_model: Vec<String>,
    pub billing_form: Vec<String>,
    pub engagement_scope: Vec<String>,
    pub team_integration_level: Vec<String>,
    pub additional_preferences: Vec<String>,
    pub selected_scenarios: Vec<String>,
    pub modules: Vec<String>,
    pub goals: Vec<String>,
    pub markets: Vec<String>,
    pub activities: Vec<String>,

    /// 0 – 100
    pub intensity: u8,
    pub budget_min: String,
    pub budget_max: String,
    pub refund_mechanism: String,
    pub additional_notes: String,

    pub language_mode: LanguageMode,
    pub send_email: bool,
    pub email_to_send: String,
}

impl ProposalForm {
    /// Applies defaults and checks the required fields for `kind`.
    ///
    /// Vocabulary membership is not checked: unknown tags are carried through
    /// and rendered as plain text.
    pub fn validate(self, kind: FormKind) -> Result<ProposalRequest, AppError> {
        let language_mode = LanguageMode::parse(self.language_mode.as_deref());

        let request = ProposalRequest {
            kind,
            company_name: text(self.company_name),
            contact_person: text(self.contact_person),
            contact_role: text(self.contact_role),
            contact_email: text(self.contact_email),

            areas_of_cooperation: tags(self.areas_of_cooperation),
            cooperation_model: tags(self.cooperation_model),
            billing_form: tags(self.billing_form),
            engagement_scope: tags(self.engagement_scope),
            team_integration_level: tags(self.team_integration_level),
            additional_preferences: tags(self.additional_preferences),
            selected_scenarios: tags(self.selected_scenarios),
            modules: tags(self.modules),
            goals: tags(self.goals),
            markets: tags(self.markets),
            activities: tags(self.activities),

            intensity: self
                .intensity
                .map(|v| v.min(MAX_INTENSITY as u32) as u8)
                .unwrap_or(DEFAULT_INTENSITY),
            budget_min: text(self.budget_min),
            budget_max: text(self.budget_max),
            refund_mechanism: text(self.refund_mechanism),
            additional_notes: text(self.additional_notes),

            language_mode,
            send_email: self.send_email.unwrap_or(false),
            email_to_send: text(self.email_to_send),
        };

        for &field in kind.required_fields() {
            if request.field(field).is_empty() {
                return Err(AppError::MissingField {
                    field,
                    language: language_mode,
                });
            }
        }

        Ok(request)
    }
}

impl ProposalRequest {
    fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::CompanyName => &self.company_name,
            RequiredField::ContactPerson => &self.contact_person,
            RequiredField::ContactEmail => &self.contact_email,
        }
    }

    /// `"Jan Kowalski (CMO)"`, or just the name when no role was given.
    /// Empty when no contact person was given, even if a role was.
    pub fn contact_line(&self) -> String {
        if self.contact_person.is_empty() || self.contact_role.is_empty() {
            self.contact_person.clone()
        } else {
            format!("{} ({})", self.contact_person, self.contact_role)
        }
    }
}

fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Trims tags, drops blanks and repeated entries, keeps submission order.
fn tags(values: Option<Vec<String>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values.unwrap_or_default() {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
