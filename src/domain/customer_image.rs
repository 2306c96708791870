use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An image owned by a customer. The payload stays base64 encoded end to
/// end, optionally carrying a `data:<mime>;base64,` prefix.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerImage {
    pub id: i32,
    pub customer_id: i32,
    pub image_data: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub uploaded_at: NaiveDateTime,
}

/// Candidate image for upload, already scoped to its owning customer.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomerImage {
    pub customer_id: i32,
    pub image_data: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl NewCustomerImage {
    #[must_use]
    pub fn new(
        customer_id: i32,
        image_data: String,
        file_name: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            image_data,
            file_name: file_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            content_type: content_type
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
