// The extraction instruction sent with every document. Process-wide constant;
// the endpoint takes no prompt parameters.

/// Instruction for turning one academic PDF into MCQ question/answer pairs.
/// The reply shape it asks for is what `parser` expects: a bare JSON array of
/// objects with `question` and `answer` fields.
pub const QA_EXTRACTION_PROMPT: &str = r#"Analyze this academic PDF document and generate a comprehensive list of important MCQ questions and answers based on its content.

Focus on key concepts, methodologies, findings, and conclusions from the document.

Format your response as a JSON array with each object containing 'question' and 'answer' fields, like:
[
    {"question": "What is the main research question?
                    A)option1
                    B)option2
                    C)option3
                    D)option4", "answer": "B"},
    {"question": "What methodology was used?
                    A)option1
                    B)option2
                    C)option3
                    D)option4", "answer": "C"},
    ...
]

Generate at least 10 meaningful MCQ that cover the most important aspects of the document.
Try to generate as many MCQ as possible.
Don't use knowledge other than the document.
Create proper spaces between the questions and answers.
If possible make the answers a little bit descriptive."#;
