//! Classification request.

use closet_core::{CapturedImage, Classification};
use tracing::debug;

use super::VisionClassifier;
use crate::error::VisionResult;
use crate::http::HttpBackend;
use crate::models::{Content, GenerateRequest, GenerationConfig, InlineData, RequestPart};
use crate::parsing::{generated_text, parse_classification};

/// Fixed instruction sent with every image.
pub(crate) const CLASSIFICATION_PROMPT: &str = "\
You are a clothing classifier for a digital closet. Look at the photo.
If it does not show exactly one clearly centered garment, reply with {\"status\":\"Invalid\"}.
Otherwise reply with {\"status\":\"Valid\",\"category\":C,\"itemName\":N,\"tags\":T,\"contrastBg\":B} where
C is \"Top\" or \"Bottom\",
N is a short descriptive name for the garment,
T is a list of 3 to 5 short style keywords,
B is \"light\" or \"dark\", whichever background best contrasts the garment's own color.
Reply with the JSON object only, no prose and no code fences.";

impl<B: HttpBackend> VisionClassifier<B> {
    pub(crate) async fn classify_image(&self, image: &CapturedImage) -> VisionResult<Classification> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text {
                        text: CLASSIFICATION_PROMPT,
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type(),
                            data: image.to_base64(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.0,
            },
        };
        let body = serde_json::to_value(&request)?;

        debug!(url = %self.endpoint, bytes = image.len(), "Sending classification request");
        let reply = self
            .backend
            .post_json(
                &self.endpoint,
                vec![("x-goog-api-key", self.api_key.clone())],
                &body,
            )
            .await?;
        debug!(status = reply.status, "Classification reply received");

        let text = generated_text(&reply)?;
        parse_classification(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisionError;
    use crate::http::testing::{CannedReply, FakeBackend};
    use closet_core::Category;
    use serde_json::json;

    const ENDPOINT: &str = "https://vision.test/v1beta/models/m:generateContent";

    fn answer(text: &str) -> CannedReply {
        CannedReply::ok(&json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}))
    }

    #[tokio::test]
    async fn test_request_shape() {
        let client = VisionClassifier::with_backend(
            FakeBackend::new().with_reply(answer(r#"{"status":"Invalid"}"#)),
            ENDPOINT,
            "sekret",
        );
        let image = CapturedImage::new(b"\xff\xd8raw".to_vec(), "image/jpeg");

        client.classify_image(&image).await.unwrap();

        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.url, ENDPOINT);
        assert_eq!(request.header("x-goog-api-key"), Some("sekret"));
        assert!(!request.url.contains("sekret"));

        let parts = &request.json.as_ref().unwrap()["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], CLASSIFICATION_PROMPT);
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], image.to_base64());
    }

    #[tokio::test]
    async fn test_valid_answer_in_fences() {
        let client = VisionClassifier::with_backend(
            FakeBackend::new().with_reply(answer(
                "```json\n{\"status\":\"Valid\",\"category\":\"Top\",\"itemName\":\"Striped Tee\",\"tags\":[\"casual\"],\"contrastBg\":\"dark\"}\n```",
            )),
            ENDPOINT,
            "k",
        );

        let result = client.classify_image(&CapturedImage::jpeg(vec![1])).await.unwrap();
        let Classification::Valid(garment) = result else {
            panic!("expected Valid");
        };
        assert_eq!(garment.category, Category::Top);
        assert_eq!(garment.item_name, "Striped Tee");
    }

    #[tokio::test]
    async fn test_prose_answer_is_contract_violation() {
        let client = VisionClassifier::with_backend(
            FakeBackend::new().with_reply(answer("Looks like a nice jacket!")),
            ENDPOINT,
            "k",
        );

        let err = client
            .classify_image(&CapturedImage::jpeg(vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::ContractViolation { .. }));
    }

    #[tokio::test]
    async fn test_timeout_propagates() {
        let client = VisionClassifier::with_backend(
            FakeBackend::new().with_reply(CannedReply::TimedOut),
            ENDPOINT,
            "k",
        );

        let err = client
            .classify_image(&CapturedImage::jpeg(vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::Timeout));
        assert_eq!(client.backend.requests().len(), 1);
    }
}
