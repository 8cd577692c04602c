// Q&A extraction: upload handling, the outbound document-understanding call,
// and reply parsing. All model calls go through llm_client, no direct
// Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
