use serde::{Deserialize, Serialize};

/// One question/answer record in the outgoing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// An uploaded document held in memory for the duration of one request.
/// Borrowed by the extraction pipeline, dropped when the request completes.
#[derive(Debug)]
pub struct Document<'a> {
    pub bytes: &'a [u8],
    pub name: &'a str,
}
