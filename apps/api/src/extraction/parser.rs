//! Reply parsing: locates the JSON payload inside the model's free-form
//! reply, parses it, and filters it down to well-formed question/answer
//! records.
//!
//! Models wrap their output unpredictably: a ```json fence, a bare fence,
//! prose around a bare array, or nothing at all. Localization tries those
//! conventions in order and the structural parse degrades to a sentinel
//! record instead of an error, so callers always get a well-formed sequence.

use serde_json::Value;

use crate::extraction::models::QaPair;

/// How much of the raw reply is echoed back inside the parse-failure
/// sentinel. Counted in chars, not bytes, since the reply is arbitrary UTF-8.
const RAW_EXCERPT_LIMIT: usize = 500;

/// Sentinel question marking a reply that could not be parsed as JSON.
pub const PARSE_ERROR_QUESTION: &str = "Error parsing response";
/// Sentinel question marking a failure of the outbound model call itself.
pub const PROCESSING_ERROR_QUESTION: &str = "Error processing document";

const PARSE_ERROR_PREFIX: &str = "The model did not return a valid JSON format. Raw response: ";
const PROCESSING_ERROR_PREFIX: &str = "An error occurred while processing the document: ";

/// Converts one raw model reply into the outgoing QA sequence.
///
/// Never fails: an unparseable reply becomes a single sentinel record
/// carrying an excerpt of the raw text. A reply that parses to something
/// other than an array counts as zero usable records, not an error.
pub fn parse_qa_reply(reply: &str) -> Vec<QaPair> {
    let payload = locate_payload(reply).trim();

    let parsed: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(_) => return vec![parse_error_pair(reply)],
    };

    match parsed {
        Value::Array(items) => items.iter().filter_map(qa_pair_from_item).collect(),
        _ => Vec::new(),
    }
}

/// Cuts the JSON payload out of a reply that may wrap it in markdown fences
/// or surround it with prose. First match wins:
/// 1. ```json fence
/// 2. unlabeled ``` fence
/// 3. first `[` through last `]`
/// 4. the whole reply verbatim
fn locate_payload(reply: &str) -> &str {
    if let Some(open) = reply.find("```json") {
        let start = open + "```json".len();
        match reply[start..].find("```") {
            Some(close) => &reply[start..start + close],
            // Unterminated fence: take the rest of the reply
            None => &reply[start..],
        }
    } else if let Some(open) = reply.find("```") {
        let start = open + "```".len();
        match reply[start..].find("```") {
            Some(close) => &reply[start..start + close],
            None => &reply[start..],
        }
    } else {
        match (reply.find('['), reply.rfind(']')) {
            (Some(open), Some(close)) if open <= close => &reply[open..=close],
            // Brackets out of order slice to nothing, surfaced downstream
            // as a parse failure
            (Some(_), Some(_)) => "",
            _ => reply,
        }
    }
}

/// Keeps an array element only if it is an object carrying string `question`
/// and `answer` fields; everything else in the element is dropped. There are
/// no partial records.
fn qa_pair_from_item(item: &Value) -> Option<QaPair> {
    let object = item.as_object()?;
    let question = object.get("question")?.as_str()?;
    let answer = object.get("answer")?.as_str()?;
    Some(QaPair {
        question: question.to_string(),
        answer: answer.to_string(),
    })
}

/// Sentinel for a reply that survived the model call but not the JSON parse.
pub fn parse_error_pair(raw_reply: &str) -> QaPair {
    let excerpt: String = raw_reply.chars().take(RAW_EXCERPT_LIMIT).collect();
    QaPair {
        question: PARSE_ERROR_QUESTION.to_string(),
        answer: format!("{PARSE_ERROR_PREFIX}{excerpt}..."),
    }
}

/// Sentinel for a model call that failed outright (network, auth, API error).
pub fn processing_error_pair(detail: &str) -> QaPair {
    QaPair {
        question: PROCESSING_ERROR_QUESTION.to_string(),
        answer: format!("{PROCESSING_ERROR_PREFIX}{detail}"),
    }
}
