// Policy generation core.
// Implements: label resolution, answer validation, deterministic Markdown
// assembly, LLM prompt construction, export naming, and the route handlers.
// All LLM calls go through llm_client — no direct API calls here.

pub mod assembler;
pub mod export;
pub mod handlers;
pub mod labels;
pub mod prompts;
pub mod validation;
