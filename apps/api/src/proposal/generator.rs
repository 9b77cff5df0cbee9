//! Proposal generation: external LLM first, local template as the fallback.
//!
//! Flow: classify variant → build prompt → LLM call (if configured) →
//!       on any failure, render the deterministic template.
//!
//! Never fails: every error from the external service is logged and absorbed.

use tracing::{info, warn};

use crate::llm_client::prompts::{PARTNERSHIP_TONE_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::proposal::prompts::{
    LANGUAGE_INSTRUCTION_BOTH, LANGUAGE_INSTRUCTION_EN, LANGUAGE_INSTRUCTION_PL,
    PROPOSAL_PROMPT_TEMPLATE, PROPOSAL_SYSTEM,
};
use crate::proposal::request::{FormKind, Lang, LanguageMode, ProposalRequest};
use crate::proposal::template::{self, render_fallback, Letterhead};
use crate::proposal::variant::Variant;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The proposal text and where it came from. Both carry the same contract:
/// a non-empty document ready to be shown and downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// Returned verbatim by the external generation service.
    Generated(String),
    /// Rendered locally from the fallback template.
    Templated(String),
}

impl Proposal {
    pub fn text(&self) -> &str {
        match self {
            Proposal::Generated(text) | Proposal::Templated(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Proposal::Generated(text) | Proposal::Templated(text) => text,
        }
    }

    /// `"llm"` or `"template"`, for logs.
    pub fn origin(&self) -> &'static str {
        match self {
            Proposal::Generated(_) => "llm",
            Proposal::Templated(_) => "template",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Produces the proposal for a validated request.
///
/// `llm = None` skips the external call entirely.
pub async fn generate_proposal(
    llm: Option<&dyn TextGenerator>,
    request: &ProposalRequest,
    letterhead: &Letterhead<'_>,
) -> Proposal {
    let variant = Variant::classify(request);

    let Some(llm) = llm else {
        info!("No LLM configured, rendering {variant} proposal from template");
        return Proposal::Templated(render_fallback(request, variant, letterhead));
    };

    let prompt = build_proposal_prompt(request, variant, letterhead);

    match llm.complete(PROPOSAL_SYSTEM, &prompt).await {
        Ok(text) => {
            info!(
                "Generated {variant} proposal with {} ({} chars)",
                llm.model(),
                text.len()
            );
            Proposal::Generated(text)
        }
        Err(e) => {
            warn!("LLM proposal generation failed, falling back to template: {e}");
            Proposal::Templated(render_fallback(request, variant, letterhead))
        }
    }
}

/// Builds the natural-language instruction prompt from every form field.
pub fn build_proposal_prompt(
    request: &ProposalRequest,
    variant: Variant,
    letterhead: &Letterhead<'_>,
) -> String {
    // The prompt itself is always English; the language instruction steers output.
    let primary = request.language_mode.languages()[0];

    let (language, language_instruction) = match request.language_mode {
        LanguageMode::Pl => ("Polish only", LANGUAGE_INSTRUCTION_PL),
        LanguageMode::En => ("English only", LANGUAGE_INSTRUCTION_EN),
        LanguageMode::Both => ("Both Polish and English", LANGUAGE_INSTRUCTION_BOTH),
    };

    let areas = bullet_list(&request.areas_of_cooperation, "No areas selected");
    let scenarios = bullet_list(&request.selected_scenarios, "No scenarios selected");
    let modules = match request.kind {
        FormKind::Cooperation => "• Not part of this questionnaire".to_string(),
        FormKind::Modules => format!(
            "{}\nCollaboration intensity: {}%",
            bullet_list(&request.modules, "No modules selected"),
            request.intensity
        ),
    };

    let model_preferences = [
        ("Cooperation Model", &request.cooperation_model),
        ("Billing Form", &request.billing_form),
        ("Engagement Scope", &request.engagement_scope),
        ("Team Integration", &request.team_integration_level),
        ("Additional Preferences", &request.additional_preferences),
    ]
    .iter()
    .map(|(name, tags)| format!("{name}: {}", comma_list(tags)))
    .collect::<Vec<_>>()
    .join("\n");

    let budget = format!(
        "Minimum: {}\nMaximum: {}\nRefund mechanism: {}",
        or_not_specified(&request.budget_min),
        or_not_specified(&request.budget_max),
        or_not_specified(&request.refund_mechanism.replace('_', " ")),
    );

    let markets = format!(
        "Markets: {}\nGoals: {}\nActivities: {}",
        comma_list(&request.markets),
        comma_list(&request.goals),
        comma_list(&request.activities)
    );

    let notes = if request.additional_notes.is_empty() {
        "No additional notes provided"
    } else {
        request.additional_notes.as_str()
    };

    let contact_line = request.contact_line();
    let variant_label = variant.to_string();
    let title = template::title(letterhead.brand_name, primary);
    let greeting = match request.language_mode {
        LanguageMode::Both => format!(
            "{}\" / \"{}",
            template::greeting(letterhead.salutation_name, Lang::Pl),
            template::greeting(letterhead.salutation_name, Lang::En)
        ),
        _ => template::greeting(letterhead.salutation_name, primary),
    };

    fill_template(
        PROPOSAL_PROMPT_TEMPLATE,
        &[
            ("brand_name", letterhead.brand_name),
            ("author_name", letterhead.author_name),
            ("company_name", &request.company_name),
            ("contact_line", &contact_line),
            ("contact_email", &request.contact_email),
            ("variant", &variant_label),
            ("areas", &areas),
            ("scenarios", &scenarios),
            ("modules", &modules),
            ("model_preferences", &model_preferences),
            ("budget", &budget),
            ("markets", &markets),
            ("notes", notes),
            ("language", language),
            ("title", &title),
            ("greeting", &greeting),
            ("tone_instruction", PARTNERSHIP_TONE_INSTRUCTION),
            ("plain_text_instruction", PLAIN_TEXT_INSTRUCTION),
            ("language_instruction", language_instruction),
        ],
    )
}

/// Replaces `{key}` placeholders in a single pass. Substituted values are
/// never re-scanned, so braces typed into the form stay literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after.find('}').and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn bullet_list(tags: &[String], empty: &str) -> String {
    if tags.is_empty() {
        format!("• {empty}")
    } else {
        tags.iter()
            .map(|t| format!("• {}", t.replace('_', " ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn comma_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "Not specified".to_string()
    } else {
        tags.join(", ")
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        "Not specified"
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::proposal::request::ProposalForm;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const LETTERHEAD: Letterhead<'static> = Letterhead {
        brand_name: "Diasen Polska",
        salutation_name: "DIASEN",
        author_name: "Amitiel Angelisme",
    };

    /// Test double: replies with a fixed result and records prompts.
    struct StubGenerator {
        reply: Result<String, ()>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubGenerator {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            assert_eq!(system, PROPOSAL_SYSTEM);
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(LlmError::Api {
                    status: 503,
                    message: "upstream unavailable".to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "stub/model"
        }
    }

    fn request(json: serde_json::Value) -> ProposalRequest {
        serde_json::from_value::<ProposalForm>(json)
            .unwrap()
            .validate(FormKind::Cooperation)
            .unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_llm_uses_template() {
        let req = request(serde_json::json!({ "companyName": "Acme", "languageMode": "pl" }));
        let proposal = generate_proposal(None, &req, &LETTERHEAD).await;

        assert!(matches!(proposal, Proposal::Templated(_)));
        assert_eq!(proposal.origin(), "template");
        assert!(proposal.text().contains("Acme"));
        assert!(proposal.text().contains("BASIC"));
    }

    #[tokio::test]
    async fn test_successful_llm_text_is_returned_verbatim() {
        let stub = StubGenerator::ok("  **Custom proposal for Acme**\n");
        let req = request(serde_json::json!({ "companyName": "Acme" }));

        let proposal = generate_proposal(Some(&stub), &req, &LETTERHEAD).await;

        assert_eq!(
            proposal,
            Proposal::Generated("  **Custom proposal for Acme**\n".to_string())
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_template() {
        let stub = StubGenerator::failing();
        let req = request(serde_json::json!({ "companyName": "Acme", "languageMode": "en" }));

        let proposal = generate_proposal(Some(&stub), &req, &LETTERHEAD).await;

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            proposal,
            Proposal::Templated(render_fallback(&req, Variant::Basic, &LETTERHEAD))
        );
    }

    #[tokio::test]
    async fn test_prompt_embeds_form_fields() {
        let stub = StubGenerator::ok("ok");
        let req = request(serde_json::json!({
            "companyName": "Acme",
            "contactPerson": "Anna",
            "contactRole": "CMO",
            "contactEmail": "anna@acme.pl",
            "areasOfCooperation": ["murale_wewnetrzne_ekskluzywne"],
            "billingForm": ["kwartalna"],
            "additionalNotes": "Budget {approved}",
            "languageMode": "en"
        }));

        generate_proposal(Some(&stub), &req, &LETTERHEAD).await;
        let prompt = stub.last_prompt.lock().unwrap().clone().unwrap();

        assert!(prompt.contains("- Company: Acme"));
        assert!(prompt.contains("- Contact: Anna (CMO)"));
        assert!(prompt.contains("• murale wewnetrzne ekskluzywne"));
        assert!(prompt.contains("Billing Form: kwartalna"));
        assert!(prompt.contains("Budget {approved}"));
        assert!(prompt.contains("Recommended variant: BASIC"));
        assert!(prompt.contains(LANGUAGE_INSTRUCTION_EN));
        assert!(prompt.contains("Dear DIASEN Team,"));
        assert!(!prompt.contains("{company_name}"));
    }

    #[test]
    fn test_prompt_for_both_languages_asks_for_divider() {
        let req = request(serde_json::json!({ "companyName": "Acme", "languageMode": "both" }));
        let prompt = build_proposal_prompt(&req, Variant::Basic, &LETTERHEAD);
        assert!(prompt.contains("Both Polish and English"));
        assert!(prompt.contains(LANGUAGE_INSTRUCTION_BOTH));
        assert!(prompt.contains("Szanowni Państwo z DIASEN,\" / \"Dear DIASEN Team,"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template("a {x} b {y} {unknown} {", &[("x", "{y}"), ("y", "2")]);
        assert_eq!(out, "a {y} b 2 {unknown} {");
    }

    #[test]
    fn test_proposal_into_text() {
        assert_eq!(Proposal::Generated("g".into()).into_text(), "g");
        assert_eq!(Proposal::Templated("t".into()).into_text(), "t");
    }
}
