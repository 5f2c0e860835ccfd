//! Background removal request.

use closet_core::CapturedImage;
use tracing::debug;

use super::BackgroundRemover;
use crate::error::VisionResult;
use crate::http::{HttpBackend, MultipartUpload};
use crate::parsing::removal_result;

impl<B: HttpBackend> BackgroundRemover<B> {
    pub(crate) async fn remove(&self, image: &CapturedImage) -> VisionResult<Vec<u8>> {
        let extension = match image.mime_type() {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        };
        let upload = MultipartUpload {
            file_field: "image_file",
            file_name: format!("capture.{extension}"),
            mime_type: image.mime_type().to_string(),
            bytes: image.bytes().to_vec(),
            text_fields: vec![("size", "auto".to_string())],
        };

        debug!(url = %self.endpoint, bytes = image.len(), "Sending background removal request");
        let reply = self
            .backend
            .post_multipart(
                &self.endpoint,
                vec![
                    ("X-Api-Key", self.api_key.clone()),
                    ("Accept", "application/json".to_string()),
                ],
                upload,
            )
            .await?;
        debug!(status = reply.status, "Background removal reply received");

        removal_result(&reply)
    }
}
