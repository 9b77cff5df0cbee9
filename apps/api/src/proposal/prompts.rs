// LLM prompt constants for proposal generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for proposal generation.
pub const PROPOSAL_SYSTEM: &str = "You are an expert assistant who generates premium-quality \
    B2B collaboration proposals. You output structured, clear, professional text.";

/// Proposal prompt template. Placeholders are filled by `fill_template`:
/// {brand_name}, {author_name}, {company_name}, {contact_line}, {contact_email},
/// {variant}, {areas}, {scenarios}, {modules}, {model_preferences}, {budget},
/// {markets}, {notes}, {language}, {greeting}, {title}, {tone_instruction},
/// {plain_text_instruction}, {language_instruction}
pub const PROPOSAL_PROMPT_TEMPLATE: &str = r#"You are an expert assistant that builds and synthesizes B2B collaboration offers based on a structured questionnaire for {brand_name}.

CONTEXT:
I am {author_name}, a creative professional preparing a collaboration proposal for {brand_name} based on their preferences.

CLIENT DATA:
- Company: {company_name}
- Contact: {contact_line}
- Email: {contact_email}
- Recommended variant: {variant}

SELECTED AREAS OF COOPERATION:
{areas}

SELECTED COOPERATION SCENARIOS:
{scenarios}

SELECTED MODULES:
{modules}

COOPERATION MODEL PREFERENCES:
{model_preferences}

BUDGET:
{budget}

MARKETS, GOALS AND ACTIVITIES:
{markets}

ADDITIONAL NOTES:
{notes}

LANGUAGE: {language}

YOUR TASK:
Create a clear, structured, premium-looking collaboration proposal based on the selections above.

IMPORTANT REQUIREMENTS:
- Title should be simple: "{title}"
- Start with "{greeting}"
- Use first-person language ("I propose", "I am", not "we")
- Mention the client company "{company_name}" and the recommended variant {variant}
- Sign as "{author_name}" at the end

The output should include:
1. Executive summary / context of cooperation
2. Selected areas of cooperation (summary of client choices)
3. Proposed cooperation model (billing, engagement, team integration)
4. Budget and refund terms as provided (do not invent prices)
5. Target markets and goals
6. Proposed timeline / next steps
7. Summary and invitation to discussion

{tone_instruction}

{plain_text_instruction}

{language_instruction}"#;

pub const LANGUAGE_INSTRUCTION_PL: &str =
    "IMPORTANT: Write the ENTIRE response in Polish only. Do not mix languages.";

pub const LANGUAGE_INSTRUCTION_EN: &str =
    "IMPORTANT: Write the ENTIRE response in English only. Do not mix languages.";

pub const LANGUAGE_INSTRUCTION_BOTH: &str =
    "Write in Polish first, then add the English translation separated by a line of ═ characters.";
