//! Image methods for ScholarApi

use super::ScholarApi;
use crate::core::request::{ApiRequest, FormPart};
use crate::models::{Image, ImageBlob, ImageQuery, Page};
use crate::traits::error::{ClientError, Result};
use tracing::info;

/// Multipart field the upload endpoint reads
const UPLOAD_FIELD: &str = "file";

impl ScholarApi {
    pub async fn list_images(&self, query: &ImageQuery) -> Result<Page<Image>> {
        query.page.validate()?;
        let url = self.url_with_query(&["admin", "images"], &query.to_query_params())?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch images")
            .await
    }

    /// Upload one image as a multipart form
    pub async fn upload_image(
        &self,
        file_name: &str,
        mime_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<Image> {
        if data.is_empty() {
            return Err(ClientError::InvalidRequest(format!(
                "image {} is empty",
                file_name
            )));
        }

        let size = data.len();
        let part = FormPart::file(UPLOAD_FIELD, file_name, mime_type.map(str::to_string), data);
        let request = ApiRequest::post(self.url(&["admin", "images", "upload"])?)
            .authenticated()
            .with_multipart(vec![part]);

        let image: Image = self.fetch(request, "Failed to upload image").await?;
        info!("Uploaded image {} ({} bytes) as {}", file_name, size, image.id);
        Ok(image)
    }

    /// Raw image body with its content type
    pub async fn get_image(&self, id: &str) -> Result<ImageBlob> {
        let url = self.url(&["admin", "images", id])?;
        let response = self
            .execute(ApiRequest::get(url).authenticated(), "Failed to fetch image")
            .await?;

        Ok(ImageBlob {
            content_type: response.content_type().map(str::to_string),
            data: response.into_bytes(),
        })
    }

    pub async fn delete_image(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "images", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete image")
            .await
    }
}
