//! The extraction pipeline: one outbound model call, one parsing pass.

use tracing::{info, warn};

use crate::extraction::models::{Document, QaPair};
use crate::extraction::parser::{parse_qa_reply, processing_error_pair};
use crate::extraction::prompts::QA_EXTRACTION_PROMPT;
use crate::llm_client::{GenerativeModel, PDF_MIME_TYPE};

/// Runs the full extraction pipeline for one uploaded document.
///
/// Never fails: every failure mode of the outbound call and of reply parsing
/// is folded into the returned sequence as a sentinel record, so the handler
/// can always answer 200 with a well-formed array. Callers that need to tell
/// real answers from failures inspect the sentinel question strings in
/// [`crate::extraction::parser`].
pub async fn extract_qa_pairs(model: &dyn GenerativeModel, document: &Document<'_>) -> Vec<QaPair> {
    info!(
        "Extracting Q&A pairs from '{}' ({} bytes)",
        document.name,
        document.bytes.len()
    );

    let reply = match model
        .generate_from_document(document.bytes, PDF_MIME_TYPE, QA_EXTRACTION_PROMPT)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!("Model call failed for '{}': {e}", document.name);
            return vec![processing_error_pair(&e.to_string())];
        }
    };

    parse_qa_reply(&reply)
}
