// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Tone instruction appended to every business-document prompt.
pub const PARTNERSHIP_TONE_INSTRUCTION: &str =
    "Use a premium, calm, partnership tone with clear B2B language.";

/// Instruction for plain-text documents that are downloaded as `.txt`.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    The document will be saved as a plain-text file. \
    Use **bold formatting** only for section headers and do not use tables, \
    HTML or code fences.";
