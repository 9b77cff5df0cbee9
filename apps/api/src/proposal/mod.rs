// Proposal generation: questionnaire validation, variant classification,
// LLM-backed document assembly with a deterministic template fallback.
// All LLM calls go through llm_client, never direct HTTP calls here.

pub mod email;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod request;
pub mod template;
pub mod variant;
pub mod vocabulary;
