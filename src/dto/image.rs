use serde::Deserialize;
use validator::Validate;

use crate::domain::customer_image::NewCustomerImage;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for a single image upload. Base64 decodability is checked by
/// the image service, not here.
pub struct UploadImageRequest {
    pub image_data: String,
    #[validate(length(max = 100))]
    pub file_name: Option<String>,
    #[validate(length(max = 50))]
    pub content_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for a batch upload.
pub struct UploadImagesRequest {
    #[validate(nested)]
    pub images: Vec<UploadImageRequest>,
}

impl UploadImageRequest {
    /// Convert the wire payload into the domain record, scoped to the
    /// customer from the request path.
    pub fn into_new_image(self, customer_id: i32) -> NewCustomerImage {
        NewCustomerImage::new(
            customer_id,
            self.image_data,
            self.file_name,
            self.content_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_new_image_scopes_to_customer() {
        let request: UploadImageRequest = serde_json::from_str(
            r#"{
                "imageData": "aGVsbG8=",
                "fileName": " photo.png ",
                "contentType": ""
            }"#,
        )
        .unwrap();
        let new = request.into_new_image(5);
        assert_eq!(new.customer_id, 5);
        assert_eq!(new.file_name.as_deref(), Some("photo.png"));
        assert_eq!(new.content_type, None);
    }

    #[test]
    fn oversized_file_name_is_rejected() {
        let request = UploadImageRequest {
            image_data: "aGVsbG8=".to_string(),
            file_name: Some("x".repeat(101)),
            content_type: None,
        };
        assert!(request.validate().is_err());
    }
}
