use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::extract::extract_qa_pairs;
use crate::extraction::models::{Document, QaPair};
use crate::state::AppState;

/// POST /qa
///
/// Multipart upload with a single `file` field carrying one PDF. Answers 200
/// with a JSON array of question/answer pairs for every valid request;
/// extraction failures arrive inside the array, not as an HTTP status.
pub async fn handle_create_qa_pairs(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<QaPair>>, AppError> {
    let (filename, content) = read_upload(&mut multipart).await?;

    let document = Document {
        bytes: &content,
        name: &filename,
    };
    let pairs = extract_qa_pairs(state.model.as_ref(), &document).await;

    Ok(Json(pairs))
}

/// Pulls the `file` field out of the form. The declared filename is checked
/// before the field body is read into memory; a rejected upload never
/// reaches the extraction pipeline. Unknown fields are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        // Suffix match only, case-sensitive. No magic-byte sniffing.
        if !filename.ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }

        let content = field.bytes().await?;
        return Ok((filename, content));
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart form".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{GenerativeModel, LlmError};
    use crate::routes::build_router;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CannedModel(&'static str);

    #[async_trait]
    impl GenerativeModel for CannedModel {
        async fn generate_from_document(
            &self,
            _document: &[u8],
            _mime_type: &str,
            _prompt: &str,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl GenerativeModel for FailingModel {
        async fn generate_from_document(
            &self,
            _document: &[u8],
            _mime_type: &str,
            _prompt: &str,
        ) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    /// Fails the test if the handler lets an invalid upload through.
    struct UnreachableModel;

    #[async_trait]
    impl GenerativeModel for UnreachableModel {
        async fn generate_from_document(
            &self,
            _document: &[u8],
            _mime_type: &str,
            _prompt: &str,
        ) -> Result<String, LlmError> {
            unreachable!("extraction must not run for a rejected upload");
        }
    }

    const BOUNDARY: &str = "qa-test-boundary";

    fn upload_body(field_name: &str, filename: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/pdf\r\n\
             \r\n\
             %PDF-1.4 fake content\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    async fn post_upload(
        model: Arc<dyn GenerativeModel>,
        field_name: &str,
        filename: &str,
    ) -> (StatusCode, serde_json::Value) {
        let app = build_router(AppState { model });
        let request = Request::builder()
            .method("POST")
            .uri("/qa")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(upload_body(field_name, filename)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_pdf_upload_returns_extracted_pairs() {
        let model = Arc::new(CannedModel(
            "Here you go:\n```json\n[{\"question\":\"Q1\",\"answer\":\"A1\"},{\"question\":\"Q2\",\"answer\":\"A2\"}]\n```",
        ));
        let (status, body) = post_upload(model, "file", "sample.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([
                {"question": "Q1", "answer": "A1"},
                {"question": "Q2", "answer": "A2"}
            ])
        );
    }

    #[tokio::test]
    async fn test_non_pdf_upload_rejected_before_extraction() {
        let (status, body) = post_upload(Arc::new(UnreachableModel), "file", "notes.txt").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("PDF files"));
    }

    #[tokio::test]
    async fn test_uppercase_extension_rejected() {
        // Suffix check is case-sensitive
        let (status, _) = post_upload(Arc::new(UnreachableModel), "file", "REPORT.PDF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_file_field_rejected() {
        let (status, body) =
            post_upload(Arc::new(UnreachableModel), "attachment", "sample.pdf").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Missing 'file' field"));
    }

    #[tokio::test]
    async fn test_model_failure_still_answers_200_with_sentinel() {
        let (status, body) = post_upload(Arc::new(FailingModel), "file", "sample.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["question"], "Error processing document");
        assert!(body[0]["answer"]
            .as_str()
            .unwrap()
            .contains("model overloaded"));
    }
}
